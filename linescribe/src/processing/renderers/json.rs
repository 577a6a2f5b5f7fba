use crate::error::{LinescribeError, Result};
use crate::models::ExtractionResult;

/// Render the result as a single pretty-printed `json_record` object.
pub fn render_json(result: &ExtractionResult) -> Result<Vec<u8>> {
    let mut bytes = serde_json::to_vec_pretty(&result.to_record())
        .map_err(|e| LinescribeError::Unknown(format!("Failed to serialize record: {e}")))?;
    bytes.push(b'\n');
    Ok(bytes)
}
