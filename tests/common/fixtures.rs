//! Image fixtures for integration tests.

use std::io::Cursor;

/// Encode the 2x2 reference image as a PNG: [[red, green], [blue, white]].
pub fn reference_png() -> Vec<u8> {
    encode_png(2, 2, vec![255, 0, 0, 0, 255, 0, 0, 0, 255, 255, 255, 255])
}

/// Encode arbitrary RGB pixels as a PNG.
pub fn encode_png(width: u32, height: u32, pixels: Vec<u8>) -> Vec<u8> {
    let buffer = image::RgbImage::from_raw(width, height, pixels).unwrap();
    let mut bytes = Cursor::new(Vec::new());
    buffer
        .write_to(&mut bytes, image::ImageFormat::Png)
        .unwrap();
    bytes.into_inner()
}
