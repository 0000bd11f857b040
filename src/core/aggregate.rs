//! Read-only views over a snapshot of work records.

use crate::models::{Money, WorkRecord};
use chrono::NaiveDate;
use std::collections::{BTreeMap, HashSet};

/// Records of one calendar month, in the order they were given.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MonthGroup {
    pub total: Money,
    pub items: Vec<WorkRecord>,
}

/// History grouped by `YYYY-MM`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MonthlyHistory {
    groups: BTreeMap<String, MonthGroup>,
}

impl MonthlyHistory {
    pub fn from_records(records: &[WorkRecord]) -> Self {
        let mut groups: BTreeMap<String, MonthGroup> = BTreeMap::new();
        for r in records {
            let g = groups.entry(r.month_key()).or_default();
            g.total += r.calculated_value;
            g.items.push(r.clone());
        }
        Self { groups }
    }

    /// Month keys, most recent first.
    pub fn months_desc(&self) -> Vec<&str> {
        self.groups.keys().rev().map(String::as_str).collect()
    }

    pub fn get(&self, month: &str) -> Option<&MonthGroup> {
        self.groups.get(month)
    }

    /// Groups in presentation order.
    pub fn iter_desc(&self) -> impl Iterator<Item = (&str, &MonthGroup)> {
        self.groups.iter().rev().map(|(k, g)| (k.as_str(), g))
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Dashboard figures for one month.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MonthStats {
    pub total: Money,
    pub unique_days: usize,
    /// `total / unique_days`, or zero when nothing was logged.
    pub average: Money,
}

/// Total and per-worked-day average for records whose date falls in `month`
/// (`YYYY-MM`).
pub fn month_stats(records: &[WorkRecord], month: &str) -> MonthStats {
    let in_month: Vec<&WorkRecord> = records.iter().filter(|r| r.month_key() == month).collect();

    let total: Money = in_month.iter().map(|r| r.calculated_value).sum();
    let unique_days = in_month.iter().map(|r| r.date).collect::<HashSet<_>>().len();

    let average = if unique_days > 0 {
        total.div_round(unique_days as i64)
    } else {
        Money::ZERO
    };

    MonthStats {
        total,
        unique_days,
        average,
    }
}

pub fn current_month_stats(records: &[WorkRecord], today: NaiveDate) -> MonthStats {
    month_stats(records, &today.format("%Y-%m").to_string())
}

/// Validate and normalize a `YYYY-MM` month key.
pub fn parse_month_key(s: &str) -> Option<String> {
    NaiveDate::parse_from_str(&format!("{}-01", s.trim()), "%Y-%m-%d")
        .ok()
        .map(|d| d.format("%Y-%m").to_string())
}
