use std::path::Path;

use image::{DynamicImage, GenericImageView, ImageFormat, ImageReader};

use crate::error::{LinescribeError, Result};

/// A decoded image, re-encoded as PNG for the OCR engine
#[derive(Debug, Clone)]
pub struct DecodedImage {
    pub png: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

/// Decode the image at `path` into a bitmap and hand it back as PNG bytes.
///
/// The caller is expected to have checked that `path` exists; every failure
/// here is reported as [`LinescribeError::Decode`].
pub fn decode_image(path: &Path) -> Result<DecodedImage> {
    let bytes = std::fs::read(path).map_err(|e| {
        LinescribeError::Decode(format!("Failed to read image {}: {e}", path.display()))
    })?;

    decode_bytes(&bytes)
}

pub fn decode_bytes(bytes: &[u8]) -> Result<DecodedImage> {
    let reader = ImageReader::new(std::io::Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| LinescribeError::Decode(format!("Failed to read image: {e}")))?;

    let img = reader
        .decode()
        .map_err(|e| LinescribeError::Decode(format!("Failed to decode image: {e}")))?;

    let (width, height) = img.dimensions();

    // PNG has no float pixel layouts
    let img = match img {
        DynamicImage::ImageRgb32F(_) | DynamicImage::ImageRgba32F(_) => {
            DynamicImage::ImageRgba8(img.to_rgba8())
        }
        other => other,
    };

    let mut png = Vec::new();
    img.write_to(&mut std::io::Cursor::new(&mut png), ImageFormat::Png)
        .map_err(|e| LinescribeError::Decode(format!("Failed to encode image: {e}")))?;

    Ok(DecodedImage { png, width, height })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn create_test_image(format: ImageFormat) -> Vec<u8> {
        let img = DynamicImage::new_rgb8(120, 40);
        let mut output = Vec::new();
        img.write_to(&mut std::io::Cursor::new(&mut output), format)
            .unwrap();
        output
    }

    #[test]
    fn test_decode_png() {
        let decoded = decode_bytes(&create_test_image(ImageFormat::Png)).unwrap();
        assert_eq!((decoded.width, decoded.height), (120, 40));
        assert_eq!(&decoded.png[0..4], &[0x89, 0x50, 0x4E, 0x47]);
    }

    #[test]
    fn test_decode_bmp_reencodes_as_png() {
        let decoded = decode_bytes(&create_test_image(ImageFormat::Bmp)).unwrap();
        assert_eq!((decoded.width, decoded.height), (120, 40));
        assert_eq!(&decoded.png[0..4], &[0x89, 0x50, 0x4E, 0x47]);
    }

    #[test]
    fn test_decode_rejects_garbage() {
        let err = decode_bytes(&[0u8, 1, 2, 3, 4, 5]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Decode);
    }

    #[test]
    fn test_decode_rejects_truncated_png() {
        let mut bytes = create_test_image(ImageFormat::Png);
        bytes.truncate(20);
        assert!(decode_bytes(&bytes).is_err());
    }

    #[test]
    fn test_decode_image_unreadable_path_is_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = decode_image(dir.path()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Decode);
    }
}
