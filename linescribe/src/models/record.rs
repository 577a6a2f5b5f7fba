use serde::{Deserialize, Serialize};
use std::path::Path;

/// One surviving line of recognized text with its 1-based position
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineRecord {
    pub number: usize,
    pub text: String,
}

/// Surviving lines of a single OCR pass, tied to the image they came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionResult {
    pub source_name: String,
    pub lines: Vec<String>,
}

impl ExtractionResult {
    /// Build a result for `source`, keeping only its base file name.
    pub fn new(source: &Path, lines: Vec<String>) -> Self {
        Self {
            source_name: base_name(source),
            lines,
        }
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn line_records(&self) -> impl Iterator<Item = LineRecord> + '_ {
        self.lines.iter().enumerate().map(|(idx, text)| LineRecord {
            number: idx + 1,
            text: text.clone(),
        })
    }

    pub fn to_record(&self) -> ExtractionRecord {
        ExtractionRecord {
            image_source: self.source_name.clone(),
            extracted_text: self.lines.clone(),
            line_count: self.lines.len(),
        }
    }
}

/// On-disk shape of the `json_record` output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionRecord {
    pub image_source: String,
    pub extracted_text: Vec<String>,
    pub line_count: usize,
}

impl ExtractionRecord {
    pub fn joined_text(&self) -> String {
        self.extracted_text.join("\n")
    }

    pub fn is_consistent(&self) -> bool {
        self.line_count == self.extracted_text.len()
    }
}

// Directory components never reach the output.
fn base_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}
