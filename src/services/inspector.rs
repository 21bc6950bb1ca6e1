//! Inspection service: the img-inspect pipeline behind the request handlers.

use img_inspect::render::png::encode_png;
use img_inspect::{loader, InspectError};

/// Grayscale preview of an uploaded image.
#[derive(Debug, Clone)]
pub struct GrayscalePreview {
    /// Source image width in pixels.
    pub width: usize,
    /// Source image height in pixels.
    pub height: usize,
    /// The preview, encoded as an 8-bit grayscale PNG.
    pub png: Vec<u8>,
}

/// Stateless wrapper around the inspection pipeline.
///
/// Each call is an independent pipeline run: decode, convert, encode.
/// Nothing is retained between requests, and a failed run cannot affect
/// any other.
#[derive(Debug, Default)]
pub struct InspectService;

impl InspectService {
    pub fn new() -> Self {
        Self
    }

    /// Decode an uploaded image body and reduce it to a grayscale preview.
    pub fn grayscale_preview(&self, body: &[u8]) -> Result<GrayscalePreview, InspectError> {
        let image = loader::load_rgb_from_memory(body)?;
        let gray = image.to_gray()?;
        let png = encode_png(&gray)?;

        tracing::debug!(
            width = gray.width(),
            height = gray.height(),
            png_bytes = png.len(),
            "Produced grayscale preview"
        );

        Ok(GrayscalePreview {
            width: gray.width(),
            height: gray.height(),
            png,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use img_inspect::LoadError;
    use std::io::Cursor;

    /// Encode a 2x2 RGB PNG: [[red, green], [blue, white]].
    fn test_png_bytes() -> Vec<u8> {
        let pixels = vec![255, 0, 0, 0, 255, 0, 0, 0, 255, 255, 255, 255];
        let buffer = image::RgbImage::from_raw(2, 2, pixels).unwrap();
        let mut bytes = Cursor::new(Vec::new());
        buffer
            .write_to(&mut bytes, image::ImageFormat::Png)
            .unwrap();
        bytes.into_inner()
    }

    #[test]
    fn test_grayscale_preview_dimensions_and_values() {
        let service = InspectService::new();
        let preview = service.grayscale_preview(&test_png_bytes()).unwrap();

        assert_eq!((preview.width, preview.height), (2, 2));

        let decoded = image::load_from_memory(&preview.png).unwrap().into_luma8();
        assert_eq!(decoded.into_raw(), vec![76, 150, 29, 255]);
    }

    #[test]
    fn test_grayscale_preview_rejects_garbage() {
        let service = InspectService::new();
        let err = service.grayscale_preview(b"not an image").unwrap_err();
        assert!(matches!(
            err,
            InspectError::Load(LoadError::DecodeBytes { .. })
        ));
    }
}
