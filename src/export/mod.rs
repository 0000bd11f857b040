// src/export/mod.rs

pub mod csv;
mod fs_utils;
pub mod json;
pub mod logic;
pub mod model;

pub use logic::{ExportLogic, ExportScope};
pub use model::{CSV_HEADERS, RecordExport};

use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Common completion message for every export format.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "CSV",
            ExportFormat::Json => "JSON",
        }
    }
}

/// `folha_<YYYY-MM>_<username>.<ext>`
pub fn month_file_name(month: &str, username: &str, format: ExportFormat) -> String {
    format!("folha_{}_{}.{}", month, username, format.as_str())
}

/// `relatorio_geral_admin.<ext>`
pub fn global_file_name(format: ExportFormat) -> String {
    format!("relatorio_geral_admin.{}", format.as_str())
}
