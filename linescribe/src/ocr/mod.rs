//! OCR (Optical Character Recognition) Module
//!
//! Turns an image on disk into raw recognized text.
//!
//! - `decode_image` loads and validates the bitmap, handing it on as PNG bytes
//! - `TextRecognizer` is the seam the recorder talks to
//! - `OcrProvider` implements it with a local Tesseract via leptess, and
//!   degrades to an unavailable backend when the engine cannot be initialized
//!
//! # Usage
//!
//! ```rust,ignore
//! let ocr = OcrProvider::new(&config.ocr)?;
//! let image = decode_image(Path::new("scan.png"))?;
//! let text = ocr.recognize(&image)?;
//! ```

mod decode;
mod profile;
mod provider;

pub use decode::{decode_bytes, decode_image, DecodedImage};
pub use profile::OcrProfile;
pub use provider::OcrProvider;

use crate::error::Result;

pub trait TextRecognizer {
    /// Run one OCR pass over `image` and return the untrimmed text.
    fn recognize(&self, image: &DecodedImage) -> Result<String>;

    fn is_available(&self) -> bool {
        true
    }
}
