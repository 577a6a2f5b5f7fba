pub mod csv;
pub mod json;

pub use self::csv::{render_csv, CSV_HEADER};
pub use self::json::render_json;

use crate::error::Result;
use crate::models::{ExtractionResult, OutputFormat};

pub fn render(format: OutputFormat, result: &ExtractionResult) -> Result<Vec<u8>> {
    match format {
        OutputFormat::LinesCsv => render_csv(result),
        OutputFormat::JsonRecord => render_json(result),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_render_dispatches_on_format() {
        let result = ExtractionResult::new(Path::new("a.png"), vec!["Hello".to_string()]);

        let csv = render(OutputFormat::LinesCsv, &result).unwrap();
        assert!(csv.starts_with(b"Line Number,Text\n"));

        let json = render(OutputFormat::JsonRecord, &result).unwrap();
        assert_eq!(json[0], b'{');
    }

    #[test]
    fn test_render_is_deterministic() {
        let result = ExtractionResult::new(
            Path::new("a.png"),
            vec!["one".to_string(), "two".to_string()],
        );
        for format in [OutputFormat::LinesCsv, OutputFormat::JsonRecord] {
            assert_eq!(
                render(format, &result).unwrap(),
                render(format, &result).unwrap()
            );
        }
    }
}
