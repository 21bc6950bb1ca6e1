//! Owned pixel buffer with an explicit channel-order tag.

use super::ShapeError;
use crate::convert;
use crate::encoding::ColorEncoding;

/// A decoded image: dense row-major `u8` samples plus dimensions and an
/// explicit [`ColorEncoding`].
///
/// The buffer layout is `height * width * channels` with channels
/// interleaved per pixel. Width and height never change under a color
/// conversion; the channel count changes only when converting to grayscale
/// (3 to 1, the channel axis is dropped) or when splitting into planes.
///
/// Conversions are non-destructive: [`to_rgb()`](Self::to_rgb),
/// [`to_bgr()`](Self::to_bgr) and [`to_gray()`](Self::to_gray) produce a new
/// image and leave the input untouched.
///
/// # Example
///
/// ```
/// use img_inspect::{ColorEncoding, PixelImage};
///
/// // A 1x2 red/green strip in RGB order.
/// let image = PixelImage::from_raw(
///     vec![255, 0, 0, 0, 255, 0],
///     2,
///     1,
///     ColorEncoding::Rgb,
/// )
/// .unwrap();
///
/// assert_eq!(image.shape(), (1, 2, 3));
///
/// let gray = image.to_gray().unwrap();
/// assert_eq!(gray.shape(), (1, 2, 1));
/// assert_eq!(gray.data(), &[76, 150]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelImage {
    /// Interleaved samples, row-major order.
    data: Vec<u8>,
    /// Image width in pixels.
    width: usize,
    /// Image height in pixels.
    height: usize,
    /// Channel layout of `data`.
    encoding: ColorEncoding,
}

impl PixelImage {
    /// Create a `PixelImage` from a buffer whose length is known to match.
    ///
    /// # Panics (debug only)
    ///
    /// Debug-asserts that `data.len() == width * height * channels`.
    pub(crate) fn new(data: Vec<u8>, width: usize, height: usize, encoding: ColorEncoding) -> Self {
        debug_assert_eq!(
            data.len(),
            width * height * encoding.channels(),
            "buffer length ({}) must match {}x{}x{}",
            data.len(),
            width,
            height,
            encoding.channels(),
        );
        Self {
            data,
            width,
            height,
            encoding,
        }
    }

    /// Create a `PixelImage` from an untrusted raw buffer.
    ///
    /// Validates that `data.len() == width * height * channels` for the
    /// given encoding.
    pub fn from_raw(
        data: Vec<u8>,
        width: usize,
        height: usize,
        encoding: ColorEncoding,
    ) -> Result<Self, ShapeError> {
        let channels = encoding.channels();
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
        Ok(Self::new(data, width, height, encoding))
    }

    /// Image width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Channel layout of the buffer.
    #[inline]
    pub fn encoding(&self) -> ColorEncoding {
        self.encoding
    }

    /// Number of interleaved channels per pixel.
    #[inline]
    pub fn channels(&self) -> usize {
        self.encoding.channels()
    }

    /// `(height, width, channels)` — the row-major array shape.
    #[inline]
    pub fn shape(&self) -> (usize, usize, usize) {
        (self.height, self.width, self.channels())
    }

    /// The raw samples as a slice.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Consume the image and return the raw buffer.
    #[inline]
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// The samples of one pixel.
    ///
    /// Returns a slice of length `channels()`.
    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> &[u8] {
        let channels = self.channels();
        let start = (y * self.width + x) * channels;
        &self.data[start..start + channels]
    }

    /// Convert to red-green-blue channel order.
    pub fn to_rgb(&self) -> Result<PixelImage, ShapeError> {
        convert::convert(self, ColorEncoding::Rgb)
    }

    /// Convert to blue-green-red channel order.
    pub fn to_bgr(&self) -> Result<PixelImage, ShapeError> {
        convert::convert(self, ColorEncoding::Bgr)
    }

    /// Reduce to a single-channel grayscale image via weighted luma.
    ///
    /// Fails with [`ShapeError::ChannelCount`] if the image is already
    /// grayscale.
    pub fn to_gray(&self) -> Result<PixelImage, ShapeError> {
        convert::convert(self, ColorEncoding::Gray)
    }
}
