use crate::errors::AppResult;
use crate::export::model::RecordExport;
use crate::models::WorkRecord;

/// Serialize records as a pretty-printed JSON array of flat rows.
pub fn records_to_json(records: &[WorkRecord]) -> AppResult<String> {
    let rows: Vec<RecordExport> = records.iter().map(RecordExport::from).collect();
    Ok(serde_json::to_string_pretty(&rows)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AreaIdCount, Money, WorkKind};
    use chrono::{Local, NaiveDate, TimeZone};

    #[test]
    fn area_row_has_count_and_no_type() {
        let r = WorkRecord {
            id: "r1".into(),
            user_id: "u1".into(),
            user_name: "Driver".into(),
            date: NaiveDate::from_ymd_opt(2024, 7, 1).unwrap(),
            kind: WorkKind::Area(AreaIdCount::Two),
            id_field: "A + B".into(),
            quantity: 90,
            calculated_value: Money::from_pounds(260),
            photos: vec![],
            created_at: Local.with_ymd_and_hms(2024, 7, 1, 8, 0, 0).unwrap(),
        };

        let json = records_to_json(&[r]).unwrap();
        let v: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(v[0]["mode"], "AREA");
        assert_eq!(v[0]["area_id_count"], 2);
        assert!(v[0]["individual_type"].is_null());
        assert_eq!(v[0]["value"], "260.00");
    }
}
