use crate::errors::{AppError, AppResult};
use crate::export::model::{CSV_HEADERS, record_to_row};
use crate::models::WorkRecord;
use csv::{QuoteStyle, Terminator, WriterBuilder};

/// Serialize records to CSV text: header first, then one row per record in
/// the given order. Rows are `\n`-separated with no trailing newline.
///
/// Fields are quoted only when they contain a comma, a quote or a line
/// break, so plain values come out exactly as typed.
pub fn records_to_csv(records: &[WorkRecord]) -> AppResult<String> {
    let mut wtr = WriterBuilder::new()
        .quote_style(QuoteStyle::Necessary)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    wtr.write_record(CSV_HEADERS)?;
    for r in records {
        wtr.write_record(record_to_row(r))?;
    }

    let bytes = wtr
        .into_inner()
        .map_err(|e| AppError::Export(format!("CSV flush error: {e}")))?;
    let mut text =
        String::from_utf8(bytes).map_err(|e| AppError::Export(format!("CSV encoding error: {e}")))?;

    if text.ends_with('\n') {
        text.pop();
    }
    Ok(text)
}
