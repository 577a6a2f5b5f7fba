use serde::{Deserialize, Serialize};

/// Fixed Tesseract tuning a provider is built with.
///
/// `UniformBlock` pins engine mode 3 and page segmentation mode 6, which suits
/// single-column blocks of text such as lab reports or receipts. Engine mode 3
/// is what Tesseract selects at init, so only the segmentation mode needs to be
/// applied as a variable.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OcrProfile {
    /// Engine defaults
    #[default]
    Default,
    /// `--oem 3 --psm 6`
    #[value(aliases = ["uniform_block", "block"])]
    UniformBlock,
}

impl OcrProfile {
    pub fn engine_mode(&self) -> Option<u8> {
        match self {
            Self::Default => None,
            Self::UniformBlock => Some(3),
        }
    }

    pub fn page_seg_mode(&self) -> Option<u8> {
        match self {
            Self::Default => None,
            Self::UniformBlock => Some(6),
        }
    }
}

impl std::fmt::Display for OcrProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Default => write!(f, "default"),
            Self::UniformBlock => write!(f, "uniform_block"),
        }
    }
}

impl std::str::FromStr for OcrProfile {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "default" => Ok(Self::Default),
            "uniform_block" | "uniform-block" | "block" => Ok(Self::UniformBlock),
            _ => Err(format!("Unknown OCR profile: {s}")),
        }
    }
}
