// src/export/logic.rs

use crate::db::repository::RecordRepository;
use crate::errors::AppResult;
use crate::export::fs_utils::{ensure_writable, write_text};
use crate::export::{
    ExportFormat, csv::records_to_csv, global_file_name, json::records_to_json, month_file_name,
    notify_export_success,
};
use crate::models::{User, WorkRecord};
use crate::ui::messages::{info, warning};
use std::path::{Path, PathBuf};

/// Which records an export covers.
#[derive(Debug, Clone)]
pub enum ExportScope {
    /// One driver's records for one `YYYY-MM` month.
    Month { month: String, owner: User },
    /// Every record in the store (admin report).
    All,
}

impl ExportScope {
    pub fn default_file_name(&self, format: ExportFormat) -> String {
        match self {
            ExportScope::Month { month, owner } => month_file_name(month, &owner.username, format),
            ExportScope::All => global_file_name(format),
        }
    }

    /// Month scope keeps the history order (date descending); the global
    /// report keeps insertion order.
    pub fn collect<R: RecordRepository>(&self, store: &R) -> AppResult<Vec<WorkRecord>> {
        match self {
            ExportScope::Month { month, owner } => Ok(store
                .records_by_user(&owner.id)?
                .into_iter()
                .filter(|r| r.month_key() == *month)
                .collect()),
            ExportScope::All => store.all_records(),
        }
    }
}

pub struct ExportLogic;

impl ExportLogic {
    /// Render records in the requested format.
    pub fn render(records: &[WorkRecord], format: ExportFormat) -> AppResult<String> {
        match format {
            ExportFormat::Csv => records_to_csv(records),
            ExportFormat::Json => records_to_json(records),
        }
    }

    /// Export a scope to disk.
    ///
    /// - `file`: explicit output path; otherwise the scope's default file
    ///   name inside `out_dir`
    /// - `force`: overwrite without asking
    ///
    /// Returns the written path, or `None` when there was nothing to export.
    pub fn export<R: RecordRepository>(
        store: &R,
        scope: &ExportScope,
        format: ExportFormat,
        file: Option<&str>,
        out_dir: &Path,
        force: bool,
    ) -> AppResult<Option<PathBuf>> {
        let records = scope.collect(store)?;

        if records.is_empty() {
            warning("No records found for the selected scope. Nothing to export.");
            return Ok(None);
        }

        let path = match file {
            Some(f) => PathBuf::from(f),
            None => out_dir.join(scope.default_file_name(format)),
        };

        ensure_writable(&path, force)?;

        info(format!(
            "Exporting {} record(s) to {}: {}",
            records.len(),
            format.label(),
            path.display()
        ));

        let content = Self::render(&records, format)?;
        write_text(&path, &content)?;

        notify_export_success(format.label(), &path);
        Ok(Some(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::add::{AddLogic, NewRecordForm};
    use crate::db::MemoryStore;
    use crate::models::{RecordMode, UserRole};
    use chrono::NaiveDate;
    use std::fs;

    fn driver(id: &str) -> User {
        User {
            id: id.into(),
            username: id.into(),
            name: format!("Driver {id}"),
            role: UserRole::User,
            password: String::new(),
        }
    }

    fn add(store: &mut MemoryStore, owner: &User, date: (i32, u32, u32), parcels: &str) {
        let d = NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap();
        let mut form = NewRecordForm::new(d, RecordMode::Individual);
        form.route_id = "R".into();
        form.parcels = parcels.into();
        AddLogic::apply(store, owner, &form).unwrap();
    }

    #[test]
    fn month_scope_filters_owner_and_month() {
        let mut store = MemoryStore::new();
        let a = driver("a");
        let b = driver("b");
        add(&mut store, &a, (2024, 1, 5), "1");
        add(&mut store, &a, (2024, 1, 20), "2");
        add(&mut store, &a, (2024, 2, 1), "3");
        add(&mut store, &b, (2024, 1, 9), "4");

        let scope = ExportScope::Month {
            month: "2024-01".into(),
            owner: a.clone(),
        };
        let recs = scope.collect(&store).unwrap();
        let qty: Vec<u32> = recs.iter().map(|r| r.quantity).collect();
        assert_eq!(qty, vec![2, 1]);
        assert_eq!(scope.default_file_name(ExportFormat::Csv), "folha_2024-01_a.csv");

        let all = ExportScope::All.collect(&store).unwrap();
        assert_eq!(all.len(), 4);
    }

    #[test]
    fn writes_file_and_skips_empty_scope() {
        let mut store = MemoryStore::new();
        let a = driver("a");
        add(&mut store, &a, (2024, 3, 3), "5");

        let mut dir = std::env::temp_dir();
        dir.push(format!("drivepay_export_logic_{}", std::process::id()));

        let written = ExportLogic::export(&store, &ExportScope::All, ExportFormat::Csv, None, &dir, true)
            .unwrap()
            .unwrap();
        assert_eq!(written, dir.join("relatorio_geral_admin.csv"));
        let text = fs::read_to_string(&written).unwrap();
        assert_eq!(text.lines().count(), 2);

        let empty = ExportScope::Month {
            month: "1999-01".into(),
            owner: a,
        };
        assert!(
            ExportLogic::export(&store, &empty, ExportFormat::Csv, None, &dir, true)
                .unwrap()
                .is_none()
        );

        fs::remove_dir_all(&dir).ok();
    }
}
