// src/export/model.rs

use crate::models::WorkRecord;
use serde::Serialize;

/// Spreadsheet header, in column order.
pub const CSV_HEADERS: [&str; 7] = [
    "Data",
    "Usuario",
    "Modo",
    "ID Rota",
    "Qtd",
    "Valor (£)",
    "Criado Em",
];

/// Creation timestamp as `dd/mm/yyyy, HH:MM:SS` local time.
pub(crate) fn created_at_label(r: &WorkRecord) -> String {
    r.created_at.format("%d/%m/%Y, %H:%M:%S").to_string()
}

/// One CSV row, matching [`CSV_HEADERS`].
pub(crate) fn record_to_row(r: &WorkRecord) -> [String; 7] {
    [
        r.date_str(),
        r.user_name.clone(),
        r.kind.mode_label(),
        r.id_field.clone(),
        r.quantity.to_string(),
        r.calculated_value.to_fixed2(),
        created_at_label(r),
    ]
}

/// Flat structure for JSON export.
#[derive(Serialize, Clone, Debug)]
pub struct RecordExport {
    pub id: String,
    pub date: String,
    pub user_id: String,
    pub user_name: String,
    pub mode: &'static str,
    pub individual_type: Option<&'static str>,
    pub area_id_count: Option<u8>,
    pub id_field: String,
    pub quantity: u32,
    pub value: String,
    pub photos: usize,
    pub created_at: String,
}

impl From<&WorkRecord> for RecordExport {
    fn from(r: &WorkRecord) -> Self {
        Self {
            id: r.id.clone(),
            date: r.date_str(),
            user_id: r.user_id.clone(),
            user_name: r.user_name.clone(),
            mode: r.mode().as_str(),
            individual_type: r.individual_type().map(|t| t.as_str()),
            area_id_count: r.area_id_count().map(|n| n.count()),
            id_field: r.id_field.clone(),
            quantity: r.quantity,
            value: r.calculated_value.to_fixed2(),
            photos: r.photos.len(),
            created_at: r.created_at.to_rfc3339(),
        }
    }
}
