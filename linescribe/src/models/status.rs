use serde::Serialize;
use std::path::PathBuf;

use super::OutputFormat;
use crate::error::{ErrorKind, LinescribeError};

/// Success value of one extraction run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractionReport {
    pub output_path: PathBuf,
    pub format: OutputFormat,
    pub line_count: usize,
}

/// Terminal state of a run once every error has been caught.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ExtractionStatus {
    Done {
        output_path: PathBuf,
        line_count: usize,
    },
    Failed {
        kind: ErrorKind,
        message: String,
    },
}

impl ExtractionStatus {
    pub fn is_done(&self) -> bool {
        matches!(self, Self::Done { .. })
    }

    pub fn error_kind(&self) -> Option<ErrorKind> {
        match self {
            Self::Done { .. } => None,
            Self::Failed { kind, .. } => Some(*kind),
        }
    }
}

impl From<ExtractionReport> for ExtractionStatus {
    fn from(report: ExtractionReport) -> Self {
        Self::Done {
            output_path: report.output_path,
            line_count: report.line_count,
        }
    }
}

impl From<LinescribeError> for ExtractionStatus {
    fn from(err: LinescribeError) -> Self {
        Self::Failed {
            kind: err.kind(),
            message: err.to_string(),
        }
    }
}

impl std::fmt::Display for ExtractionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Done {
                output_path,
                line_count,
            } => write!(
                f,
                "Text lines extracted ({line_count}) and saved to {}",
                output_path.display()
            ),
            Self::Failed { kind, message } => write!(f, "Error [{kind}]: {message}"),
        }
    }
}
