use serde::Deserialize;
use std::env;
use std::path::PathBuf;

use crate::models::OutputFormat;
use crate::ocr::OcrProfile;

fn parse_env_or<T: std::str::FromStr>(var: &str, default: T) -> T
where
    T::Err: std::fmt::Display,
{
    match env::var(var) {
        Ok(val) => match val.parse() {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::warn!("Invalid value '{}' for {}: {}. Using default.", val, var, e);
                default
            }
        },
        Err(_) => default,
    }
}

fn parse_env_opt<T: std::str::FromStr>(var: &str) -> Option<T>
where
    T::Err: std::fmt::Display,
{
    match env::var(var) {
        Ok(val) => match val.parse() {
            Ok(parsed) => Some(parsed),
            Err(e) => {
                tracing::warn!("Invalid value '{}' for {}: {}. Ignoring.", val, var, e);
                None
            }
        },
        Err(_) => None,
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub ocr: OcrConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct OcrConfig {
    /// `+`-separated Tesseract language codes, e.g. `eng+hin`
    pub languages: String,
    /// Directory holding `tessdata`; `None` lets Tesseract resolve it
    pub data_path: Option<String>,
    pub profile: OcrProfile,
    pub source_dpi: Option<u32>,
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            languages: "eng".to_string(),
            data_path: None,
            profile: OcrProfile::Default,
            source_dpi: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub directory: Option<PathBuf>,
}

impl OutputConfig {
    /// Destination used when none is given explicitly.
    pub fn default_path(&self, format: OutputFormat) -> PathBuf {
        match &self.directory {
            Some(dir) => dir.join(format.default_output()),
            None => PathBuf::from(format.default_output()),
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "pretty" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown log format: {s}")),
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct LoggingConfig {
    pub format: LogFormat,
    /// Rejected `LOG_FORMAT` value, kept until a subscriber can report it
    #[serde(skip)]
    pub invalid_format: Option<String>,
}

impl LoggingConfig {
    /// Read before any subscriber exists, so a bad value is recorded rather
    /// than logged. Call [`LoggingConfig::warn_invalid`] once tracing is up.
    pub fn from_env() -> Self {
        match env::var("LOG_FORMAT") {
            Ok(val) => match val.parse() {
                Ok(format) => Self {
                    format,
                    invalid_format: None,
                },
                Err(_) => Self {
                    format: LogFormat::Text,
                    invalid_format: Some(val),
                },
            },
            Err(_) => Self {
                format: LogFormat::Text,
                invalid_format: None,
            },
        }
    }

    pub fn warn_invalid(&self) {
        if let Some(val) = &self.invalid_format {
            tracing::warn!(
                "Invalid value '{}' for LOG_FORMAT: expected text or json. Using default.",
                val
            );
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ocr: OcrConfig {
                languages: env::var("OCR_LANGUAGES").unwrap_or_else(|_| "eng".to_string()),
                data_path: env::var("OCR_DATA_PATH").ok().filter(|p| !p.is_empty()),
                profile: parse_env_or("OCR_PROFILE", OcrProfile::Default),
                source_dpi: parse_env_opt("OCR_SOURCE_DPI"),
            },
            output: OutputConfig {
                format: parse_env_or("LINESCRIBE_FORMAT", OutputFormat::LinesCsv),
                directory: env::var("LINESCRIBE_OUTPUT_DIR")
                    .ok()
                    .filter(|d| !d.is_empty())
                    .map(PathBuf::from),
            },
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::default()
    }
}
