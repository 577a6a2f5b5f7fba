use serde::{Deserialize, Serialize};

/// Output layout for an extraction run.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// `Line Number,Text` table, one row per recognized line
    #[default]
    #[value(aliases = ["lines_csv", "csv"])]
    LinesCsv,
    /// Single JSON object with source name, lines and line count
    #[value(aliases = ["json_record", "json"])]
    JsonRecord,
}

impl OutputFormat {
    /// File name used when the caller does not choose a destination.
    pub fn default_output(&self) -> &'static str {
        match self {
            Self::LinesCsv => "text_lines.csv",
            Self::JsonRecord => "result.json",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LinesCsv => write!(f, "lines_csv"),
            Self::JsonRecord => write!(f, "json_record"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "lines_csv" | "lines-csv" | "csv" => Ok(Self::LinesCsv),
            "json_record" | "json-record" | "json" => Ok(Self::JsonRecord),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}
