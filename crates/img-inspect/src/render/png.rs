//! PNG encoding for pixel arrays.

use std::io::Cursor;

use super::RenderError;
use crate::encoding::ColorEncoding;
use crate::image::PixelImage;

/// Encode an image as PNG bytes.
///
/// Grayscale input becomes an 8-bit grayscale PNG; three-channel input
/// becomes an 8-bit RGB PNG with the bytes written through untouched.
/// Callers holding BGR data must convert first — the encoder does not.
pub fn encode_png(image: &PixelImage) -> Result<Vec<u8>, RenderError> {
    let color_type = match image.encoding() {
        ColorEncoding::Gray => png::ColorType::Grayscale,
        ColorEncoding::Rgb | ColorEncoding::Bgr => png::ColorType::Rgb,
    };

    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, image.width() as u32, image.height() as u32);
        encoder.set_color(color_type);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder
            .write_header()
            .map_err(|e| RenderError::PngEncode(e.to_string()))?;
        writer
            .write_image_data(image.data())
            .map_err(|e| RenderError::PngEncode(e.to_string()))?;
    }
    Ok(buf.into_inner())
}
