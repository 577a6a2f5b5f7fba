pub mod config;
pub mod error;
pub mod models;
pub mod ocr;
pub mod processing;

pub use error::{ErrorKind, LinescribeError, Result};
pub use models::{ExtractionRecord, ExtractionReport, ExtractionResult, ExtractionStatus, OutputFormat};
pub use processing::TextExtractionRecorder;
