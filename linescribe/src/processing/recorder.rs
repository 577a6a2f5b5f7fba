use std::path::Path;

use tracing::{debug, error, info, warn};

use crate::error::{LinescribeError, Result};
use crate::models::{ExtractionReport, ExtractionResult, ExtractionStatus, OutputFormat};
use crate::ocr::{decode_image, TextRecognizer};

use super::lines::split_lines;
use super::renderers::render;
use super::writer::write_atomic;

/// Runs one image through OCR and records the surviving lines to a file.
///
/// OCR tuning is fixed by the recognizer handed in at construction; calls
/// only choose paths and the output format.
pub struct TextExtractionRecorder<R: TextRecognizer> {
    recognizer: R,
}

impl<R: TextRecognizer> TextExtractionRecorder<R> {
    pub fn new(recognizer: R) -> Self {
        Self { recognizer }
    }

    pub fn recognizer(&self) -> &R {
        &self.recognizer
    }

    /// Extract the text lines of `image_path` and write them to `output_path`.
    ///
    /// Nothing is written unless every step before persistence succeeds, and
    /// persistence itself is a single atomic replace.
    pub fn extract_lines(
        &self,
        image_path: &Path,
        output_path: &Path,
        format: OutputFormat,
    ) -> Result<ExtractionReport> {
        if !image_path.exists() {
            return Err(LinescribeError::NotFound(format!(
                "Image not found: {}",
                image_path.display()
            )));
        }
        if !image_path.is_file() {
            return Err(LinescribeError::Decode(format!(
                "Input is not a file: {}",
                image_path.display()
            )));
        }

        info!(
            image = %image_path.display(),
            output = %output_path.display(),
            %format,
            "Extracting text lines"
        );

        let image = decode_image(image_path)?;

        if !self.recognizer.is_available() {
            warn!("OCR engine unavailable, extraction will fail");
        }
        let raw = self.recognizer.recognize(&image)?;

        let lines = split_lines(&raw);
        debug!(
            raw_lines = raw.lines().count(),
            kept = lines.len(),
            "Split OCR output into lines"
        );

        let result = ExtractionResult::new(image_path, lines);
        if result.is_empty() {
            warn!(image = %image_path.display(), "No text recognized, recording an empty result");
        }
        let bytes = render(format, &result)?;
        write_atomic(output_path, &bytes)?;

        info!(
            output = %output_path.display(),
            line_count = result.line_count(),
            "Text lines saved"
        );

        Ok(ExtractionReport {
            output_path: output_path.to_path_buf(),
            format,
            line_count: result.line_count(),
        })
    }

    /// Like [`extract_lines`](Self::extract_lines), but every failure is
    /// folded into a [`ExtractionStatus::Failed`] value.
    pub fn run(&self, image_path: &Path, output_path: &Path, format: OutputFormat) -> ExtractionStatus {
        match self.extract_lines(image_path, output_path, format) {
            Ok(report) => report.into(),
            Err(e) => {
                error!(kind = %e.kind(), image = %image_path.display(), "Extraction failed: {}", e);
                e.into()
            }
        }
    }
}
