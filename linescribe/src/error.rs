use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LinescribeError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("OCR engine not found: {0}")]
    EngineNotFound(String),

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Write error: {0}")]
    Write(String),

    #[error("OCR error: {0}")]
    Ocr(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

/// Payload-free discriminant of [`LinescribeError`], for callers that only
/// need to branch on the failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    NotFound,
    EngineNotFound,
    Decode,
    Write,
    Ocr,
    Unknown,
}

impl LinescribeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            LinescribeError::NotFound(_) => ErrorKind::NotFound,
            LinescribeError::EngineNotFound(_) => ErrorKind::EngineNotFound,
            LinescribeError::Decode(_) => ErrorKind::Decode,
            LinescribeError::Write(_) => ErrorKind::Write,
            LinescribeError::Ocr(_) => ErrorKind::Ocr,
            LinescribeError::Unknown(_) => ErrorKind::Unknown,
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound => write!(f, "not_found"),
            Self::EngineNotFound => write!(f, "engine_not_found"),
            Self::Decode => write!(f, "decode_error"),
            Self::Write => write!(f, "write_error"),
            Self::Ocr => write!(f, "ocr_error"),
            Self::Unknown => write!(f, "unknown_error"),
        }
    }
}

pub type Result<T> = std::result::Result<T, LinescribeError>;
