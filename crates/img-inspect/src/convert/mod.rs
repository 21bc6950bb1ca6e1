//! Color encoding conversions.
//!
//! Supported conversions:
//!
//! - `Bgr <-> Rgb`: per-pixel channel reversal (its own inverse).
//! - `Rgb -> Gray` / `Bgr -> Gray`: weighted luma reduction using the
//!   ITU-R BT.601 coefficients, applied to whichever byte each encoding
//!   stores the red, green and blue samples in.
//!
//! Grayscale output drops the channel axis: the result buffer has length
//! `width * height`. Converting an already-grayscale image again is an
//! error, as is expanding grayscale back to color — neither direction is
//! part of this pipeline.
//!
//! All conversions produce a new [`PixelImage`]; the input is never
//! modified.

use crate::encoding::ColorEncoding;
use crate::image::{PixelImage, ShapeError};

/// BT.601 luma weights for the red, green and blue channels.
pub const LUMA_WEIGHTS: [f32; 3] = [0.299, 0.587, 0.114];

/// Weighted luma of one pixel, rounded to the nearest integer.
#[inline]
pub fn luma(r: u8, g: u8, b: u8) -> u8 {
    let y = LUMA_WEIGHTS[0] * r as f32 + LUMA_WEIGHTS[1] * g as f32 + LUMA_WEIGHTS[2] * b as f32;
    y.round().clamp(0.0, 255.0) as u8
}

/// Convert an image to the target encoding.
///
/// Same-encoding color conversions return a copy. Grayscale conversion
/// requires a three-channel input; anything else fails with
/// [`ShapeError::ChannelCount`].
///
/// # Example
///
/// ```
/// use img_inspect::{convert, ColorEncoding, PixelImage};
///
/// let bgr = PixelImage::from_raw(vec![255, 0, 0], 1, 1, ColorEncoding::Bgr).unwrap();
/// let rgb = convert::convert(&bgr, ColorEncoding::Rgb).unwrap();
/// assert_eq!(rgb.data(), &[0, 0, 255]); // the blue pixel, now tagged RGB
/// ```
pub fn convert(image: &PixelImage, target: ColorEncoding) -> Result<PixelImage, ShapeError> {
    match (image.encoding(), target) {
        (ColorEncoding::Rgb, ColorEncoding::Rgb) | (ColorEncoding::Bgr, ColorEncoding::Bgr) => {
            Ok(image.clone())
        }
        (ColorEncoding::Rgb, ColorEncoding::Bgr) | (ColorEncoding::Bgr, ColorEncoding::Rgb) => {
            Ok(reverse_channels(image, target))
        }
        (ColorEncoding::Rgb | ColorEncoding::Bgr, ColorEncoding::Gray) => Ok(to_gray(image)),
        (ColorEncoding::Gray, _) => Err(ShapeError::ChannelCount {
            expected: 3,
            actual: 1,
        }),
    }
}

/// Reverse the channel order of every pixel (Bgr <-> Rgb).
fn reverse_channels(image: &PixelImage, target: ColorEncoding) -> PixelImage {
    let mut out = Vec::with_capacity(image.data().len());
    for pixel in image.data().chunks_exact(3) {
        out.push(pixel[2]);
        out.push(pixel[1]);
        out.push(pixel[0]);
    }
    PixelImage::new(out, image.width(), image.height(), target)
}

/// Reduce a three-channel image to grayscale via weighted luma.
fn to_gray(image: &PixelImage) -> PixelImage {
    // Safe: convert() only routes three-channel encodings here.
    let [r, g, b] = image
        .encoding()
        .rgb_offsets()
        .expect("grayscale reduction requires a color encoding");

    let mut out = Vec::with_capacity(image.width() * image.height());
    for pixel in image.data().chunks_exact(3) {
        out.push(luma(pixel[r], pixel[g], pixel[b]));
    }
    PixelImage::new(out, image.width(), image.height(), ColorEncoding::Gray)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn rgb_2x2() -> PixelImage {
        // [[red, green], [blue, white]]
        PixelImage::from_raw(
            vec![255, 0, 0, 0, 255, 0, 0, 0, 255, 255, 255, 255],
            2,
            2,
            ColorEncoding::Rgb,
        )
        .unwrap()
    }

    #[test]
    fn test_luma_primaries() {
        assert_eq!(luma(255, 0, 0), 76);
        assert_eq!(luma(0, 255, 0), 150);
        assert_eq!(luma(0, 0, 255), 29);
        assert_eq!(luma(255, 255, 255), 255);
        assert_eq!(luma(0, 0, 0), 0);
    }

    #[test]
    fn test_bgr_rgb_reversal() {
        let rgb = rgb_2x2();
        let bgr = convert(&rgb, ColorEncoding::Bgr).unwrap();
        assert_eq!(bgr.encoding(), ColorEncoding::Bgr);
        assert_eq!(
            bgr.data(),
            &[0, 0, 255, 0, 255, 0, 255, 0, 0, 255, 255, 255]
        );
    }

    /// Reversal is its own inverse: Bgr -> Rgb -> Bgr returns the original
    /// buffer exactly.
    #[test]
    fn test_reversal_round_trip_is_identity() {
        let rgb = rgb_2x2();
        let round_tripped = convert(&convert(&rgb, ColorEncoding::Bgr).unwrap(), ColorEncoding::Rgb)
            .unwrap();
        assert_eq!(round_tripped, rgb);
    }

    #[test]
    fn test_same_encoding_is_copy() {
        let rgb = rgb_2x2();
        let copy = convert(&rgb, ColorEncoding::Rgb).unwrap();
        assert_eq!(copy, rgb);
    }

    #[test]
    fn test_rgb_to_gray_shape_and_values() {
        let gray = convert(&rgb_2x2(), ColorEncoding::Gray).unwrap();
        assert_eq!(gray.shape(), (2, 2, 1), "channel axis must be dropped");
        assert_eq!(gray.data(), &[76, 150, 29, 255]);
    }

    /// The luma weights attach to colors, not byte positions: a BGR image
    /// must produce the same grayscale as its RGB counterpart.
    #[test]
    fn test_bgr_to_gray_matches_rgb_to_gray() {
        let rgb = rgb_2x2();
        let bgr = convert(&rgb, ColorEncoding::Bgr).unwrap();
        assert_eq!(
            convert(&bgr, ColorEncoding::Gray).unwrap().data(),
            convert(&rgb, ColorEncoding::Gray).unwrap().data(),
        );
    }

    #[test]
    fn test_gray_input_is_invalid() {
        let gray = PixelImage::from_raw(vec![0; 4], 2, 2, ColorEncoding::Gray).unwrap();
        for target in [ColorEncoding::Gray, ColorEncoding::Rgb, ColorEncoding::Bgr] {
            let err = convert(&gray, target).unwrap_err();
            assert_eq!(
                err,
                ShapeError::ChannelCount {
                    expected: 3,
                    actual: 1,
                }
            );
        }
    }

    #[test]
    fn test_conversion_does_not_mutate_input() {
        let rgb = rgb_2x2();
        let before = rgb.clone();
        let _ = convert(&rgb, ColorEncoding::Gray).unwrap();
        let _ = convert(&rgb, ColorEncoding::Bgr).unwrap();
        assert_eq!(rgb, before);
    }
}
