use std::sync::Mutex;

use leptess::{LepTess, Variable};
use tracing::{debug, info, warn};

use crate::config::OcrConfig;
use crate::error::{LinescribeError, Result};

use super::{DecodedImage, TextRecognizer};

enum OcrBackend {
    Local { tesseract: Mutex<LepTess> },
    Unavailable { reason: String },
}

pub struct OcrProvider {
    backend: OcrBackend,
    config: OcrConfig,
}

fn create_tesseract(config: &OcrConfig) -> std::result::Result<LepTess, String> {
    let mut lt = LepTess::new(config.data_path.as_deref(), &config.languages)
        .map_err(|e| e.to_string())?;

    if let Some(psm) = config.profile.page_seg_mode() {
        lt.set_variable(Variable::TesseditPagesegMode, &psm.to_string())
            .map_err(|e| format!("Failed to set page segmentation mode {psm}: {e}"))?;
    }

    Ok(lt)
}

/// Tesseract takes the resolution as a C int.
fn source_resolution(dpi: u32) -> Result<i32> {
    i32::try_from(dpi)
        .map_err(|_| LinescribeError::Ocr(format!("Source resolution {dpi} DPI is out of range")))
}

impl OcrProvider {
    pub fn new(config: &OcrConfig) -> Result<Self> {
        let backend = match create_tesseract(config) {
            Ok(lt) => {
                info!(
                    languages = %config.languages,
                    profile = %config.profile,
                    engine_mode = ?config.profile.engine_mode(),
                    page_seg_mode = ?config.profile.page_seg_mode(),
                    "Tesseract OCR initialized"
                );
                OcrBackend::Local {
                    tesseract: Mutex::new(lt),
                }
            }
            Err(e) => {
                let reason = format!("Tesseract not available: {e}");
                warn!("{}", reason);
                OcrBackend::Unavailable { reason }
            }
        };

        Ok(Self {
            backend,
            config: config.clone(),
        })
    }
}

impl TextRecognizer for OcrProvider {
    fn is_available(&self) -> bool {
        !matches!(self.backend, OcrBackend::Unavailable { .. })
    }

    fn recognize(&self, image: &DecodedImage) -> Result<String> {
        match &self.backend {
            OcrBackend::Local { tesseract } => {
                let dpi = self.config.source_dpi.map(source_resolution).transpose()?;

                let mut lt = tesseract
                    .lock()
                    .map_err(|e| LinescribeError::Ocr(format!("Tesseract handle poisoned: {e}")))?;

                lt.set_image_from_mem(&image.png)
                    .map_err(|e| LinescribeError::Ocr(format!("Failed to set image: {e}")))?;

                if let Some(dpi) = dpi {
                    lt.set_source_resolution(dpi);
                }

                let text = lt
                    .get_utf8_text()
                    .map_err(|e| LinescribeError::Ocr(format!("Failed to extract text: {e}")))?;

                debug!(
                    width = image.width,
                    height = image.height,
                    chars = text.len(),
                    "Tesseract pass finished"
                );

                Ok(text)
            }
            OcrBackend::Unavailable { reason } => {
                Err(LinescribeError::EngineNotFound(reason.clone()))
            }
        }
    }
}
