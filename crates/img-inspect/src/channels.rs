//! Channel splitting and restacking.
//!
//! [`split()`] slices a three-channel image into three independent
//! `(height, width)` planes along the channel axis; [`stack()`] is the
//! inverse. The planes come back in the input's channel order — the splitter
//! does not know whether index 0 means red or blue, so labelling the result
//! is the caller's responsibility (check [`PixelImage::encoding()`] first).

use crate::encoding::ColorEncoding;
use crate::image::{ChannelPlane, PixelImage, ShapeError};

/// Split a three-channel image into three single-channel planes.
///
/// Each plane preserves pixel positions exactly and equals the selection of
/// one fixed index along the channel axis. Fails with
/// [`ShapeError::ChannelCount`] unless the image has exactly 3 channels.
///
/// # Example
///
/// ```
/// use img_inspect::{channels, ColorEncoding, PixelImage};
///
/// let image = PixelImage::from_raw(
///     vec![255, 0, 0, 0, 255, 0],
///     2,
///     1,
///     ColorEncoding::Rgb,
/// )
/// .unwrap();
///
/// let [r, g, b] = channels::split(&image).unwrap();
/// assert_eq!(r.data(), &[255, 0]);
/// assert_eq!(g.data(), &[0, 255]);
/// assert_eq!(b.data(), &[0, 0]);
/// ```
pub fn split(image: &PixelImage) -> Result<[ChannelPlane; 3], ShapeError> {
    let [c0, c1, c2] =
        split_interleaved(image.data(), image.width(), image.height(), image.channels())?;
    Ok([
        ChannelPlane::new(c0, image.width(), image.height()),
        ChannelPlane::new(c1, image.width(), image.height()),
        ChannelPlane::new(c2, image.width(), image.height()),
    ])
}

/// Split a raw interleaved buffer into three per-channel buffers.
///
/// The lower-level form of [`split()`] for buffers that have not been
/// wrapped in a [`PixelImage`]. `channels` must be exactly 3 and
/// `data.len()` must equal `width * height * channels`.
pub fn split_interleaved(
    data: &[u8],
    width: usize,
    height: usize,
    channels: usize,
) -> Result<[Vec<u8>; 3], ShapeError> {
    if channels != 3 {
        return Err(ShapeError::ChannelCount {
            expected: 3,
            actual: channels,
        });
    }
    let expected = width * height * channels;
    if data.len() != expected {
        return Err(ShapeError::BufferLength {
            width,
            height,
            channels,
            expected,
            actual: data.len(),
        });
    }

    let pixels = width * height;
    let mut c0 = Vec::with_capacity(pixels);
    let mut c1 = Vec::with_capacity(pixels);
    let mut c2 = Vec::with_capacity(pixels);
    for pixel in data.chunks_exact(3) {
        c0.push(pixel[0]);
        c1.push(pixel[1]);
        c2.push(pixel[2]);
    }
    Ok([c0, c1, c2])
}

/// Stack three planes back into one interleaved three-channel image.
///
/// The inverse of [`split()`]: stacking the planes `split()` produced, with
/// the encoding of the image they came from, reproduces that image exactly.
/// All planes must share the same dimensions and `encoding` must be a color
/// encoding.
pub fn stack(
    planes: &[ChannelPlane; 3],
    encoding: ColorEncoding,
) -> Result<PixelImage, ShapeError> {
    if !encoding.is_color() {
        return Err(ShapeError::ChannelCount {
            expected: 3,
            actual: encoding.channels(),
        });
    }

    let (width, height) = (planes[0].width(), planes[0].height());
    for plane in &planes[1..] {
        if plane.width() != width || plane.height() != height {
            return Err(ShapeError::PlaneMismatch {
                expected_width: width,
                expected_height: height,
                actual_width: plane.width(),
                actual_height: plane.height(),
            });
        }
    }

    let mut out = Vec::with_capacity(width * height * 3);
    for i in 0..width * height {
        out.push(planes[0].data()[i]);
        out.push(planes[1].data()[i]);
        out.push(planes[2].data()[i]);
    }
    Ok(PixelImage::new(out, width, height, encoding))
}
