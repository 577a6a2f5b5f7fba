use std::path::Path;

use crate::error::{LinescribeError, Result};
use crate::models::ExtractionRecord;

/// Load a `json_record` file produced by a previous run.
pub fn read_record(path: &Path) -> Result<ExtractionRecord> {
    if !path.exists() {
        return Err(LinescribeError::NotFound(format!(
            "Record not found: {}",
            path.display()
        )));
    }

    let content = std::fs::read_to_string(path).map_err(|e| {
        LinescribeError::Decode(format!("Failed to read record {}: {e}", path.display()))
    })?;

    let record: ExtractionRecord = serde_json::from_str(&content).map_err(|e| {
        LinescribeError::Decode(format!("Failed to parse record {}: {e}", path.display()))
    })?;

    if !record.is_consistent() {
        tracing::warn!(
            path = %path.display(),
            line_count = record.line_count,
            lines = record.extracted_text.len(),
            "Record line_count does not match extracted_text"
        );
    }

    Ok(record)
}
