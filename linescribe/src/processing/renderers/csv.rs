use crate::error::{LinescribeError, Result};
use crate::models::ExtractionResult;

pub const CSV_HEADER: [&str; 2] = ["Line Number", "Text"];

/// Render the surviving lines as a `Line Number,Text` table.
pub fn render_csv(result: &ExtractionResult) -> Result<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer
        .write_record(CSV_HEADER)
        .map_err(|e| LinescribeError::Unknown(format!("Failed to write CSV header: {e}")))?;

    for record in result.line_records() {
        writer
            .write_record([record.number.to_string(), record.text])
            .map_err(|e| LinescribeError::Unknown(format!("Failed to write CSV row: {e}")))?;
    }

    writer
        .into_inner()
        .map_err(|e| LinescribeError::Unknown(format!("Failed to flush CSV: {e}")))
}
