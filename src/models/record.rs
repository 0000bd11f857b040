use super::money::Money;
use super::work_kind::{AreaIdCount, IndividualType, RecordMode, WorkKind};
use chrono::{DateTime, Local, NaiveDate};
use serde::Serialize;

/// A proof image attached to a record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Photo {
    pub id: String,
    pub data_url: String,
    pub timestamp: DateTime<Local>,
}

/// One logged earning event.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkRecord {
    pub id: String,
    pub user_id: String,
    pub user_name: String, // denormalized for admin listings
    pub date: NaiveDate,   // business day, not the creation day
    pub kind: WorkKind,
    pub id_field: String,
    pub quantity: u32,
    pub calculated_value: Money, // fixed at creation, never recomputed
    pub photos: Vec<Photo>,
    pub created_at: DateTime<Local>,
}

impl WorkRecord {
    pub fn mode(&self) -> RecordMode {
        self.kind.mode()
    }

    pub fn individual_type(&self) -> Option<IndividualType> {
        self.kind.individual_type()
    }

    pub fn area_id_count(&self) -> Option<AreaIdCount> {
        self.kind.area_id_count()
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    /// `YYYY-MM` grouping key.
    pub fn month_key(&self) -> String {
        self.date.format("%Y-%m").to_string()
    }

    /// Short description used in history listings.
    pub fn summary_line(&self) -> String {
        match self.kind {
            WorkKind::Individual(t) => format!("{} • {} un.", t.label(), self.quantity),
            WorkKind::Area(n) => format!("Daily • {} IDs • {} un.", n.count(), self.quantity),
        }
    }
}
