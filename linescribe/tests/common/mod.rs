#![allow(dead_code)]

use std::cell::Cell;
use std::path::{Path, PathBuf};

use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
use linescribe::ocr::{DecodedImage, TextRecognizer};
use linescribe::{LinescribeError, Result};

/// Recognizer that returns canned text and counts how often it ran
pub struct FakeRecognizer {
    text: String,
    calls: Cell<usize>,
}

impl FakeRecognizer {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            calls: Cell::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl TextRecognizer for FakeRecognizer {
    fn recognize(&self, _image: &DecodedImage) -> Result<String> {
        self.calls.set(self.calls.get() + 1);
        Ok(self.text.clone())
    }
}

/// Recognizer standing in for a missing Tesseract installation
pub struct MissingEngine;

impl TextRecognizer for MissingEngine {
    fn recognize(&self, _image: &DecodedImage) -> Result<String> {
        Err(LinescribeError::EngineNotFound(
            "Tesseract not available: failed loading language 'eng'".to_string(),
        ))
    }

    fn is_available(&self) -> bool {
        false
    }
}

/// Recognizer whose engine fails mid-run
pub struct FailingEngine;

impl TextRecognizer for FailingEngine {
    fn recognize(&self, _image: &DecodedImage) -> Result<String> {
        Err(LinescribeError::Ocr("Failed to extract text".to_string()))
    }
}

/// Write a small white image in `format` and return its path
pub fn write_image(dir: &Path, name: &str, format: ImageFormat) -> PathBuf {
    let path = dir.join(name);
    DynamicImage::ImageRgb8(RgbImage::from_pixel(160, 48, Rgb([255, 255, 255])))
        .save_with_format(&path, format)
        .unwrap_or_else(|e| panic!("Failed to write fixture '{name}': {e}"));
    path
}

pub fn write_png(dir: &Path, name: &str) -> PathBuf {
    write_image(dir, name, ImageFormat::Png)
}
