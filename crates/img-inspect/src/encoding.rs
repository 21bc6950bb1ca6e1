//! Color encoding tag.
//!
//! A raw pixel buffer carries no self-describing channel-order information,
//! so every [`PixelImage`](crate::PixelImage) carries a [`ColorEncoding`]
//! alongside its bytes. Operations that depend on channel order (grayscale
//! reduction, rendering) read the tag instead of trusting a caller-side
//! convention.

use std::fmt;

/// The channel layout of a pixel buffer.
///
/// Decoders differ in their default order: most produce red-green-blue,
/// some produce blue-green-red. Mixing the two up swaps red and blue in
/// every downstream operation, so the tag travels with the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorEncoding {
    /// Three interleaved channels, index 0 = red.
    Rgb,
    /// Three interleaved channels, index 0 = blue.
    Bgr,
    /// A single intensity channel.
    Gray,
}

impl ColorEncoding {
    /// Number of interleaved channels per pixel.
    #[inline]
    pub fn channels(self) -> usize {
        match self {
            ColorEncoding::Rgb | ColorEncoding::Bgr => 3,
            ColorEncoding::Gray => 1,
        }
    }

    /// Whether this encoding carries three color channels.
    #[inline]
    pub fn is_color(self) -> bool {
        self.channels() == 3
    }

    /// Byte offsets of the red, green and blue samples within one pixel.
    ///
    /// Returns `None` for [`ColorEncoding::Gray`], which has no color
    /// channels to index.
    #[inline]
    pub fn rgb_offsets(self) -> Option<[usize; 3]> {
        match self {
            ColorEncoding::Rgb => Some([0, 1, 2]),
            ColorEncoding::Bgr => Some([2, 1, 0]),
            ColorEncoding::Gray => None,
        }
    }
}

impl fmt::Display for ColorEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ColorEncoding::Rgb => "rgb",
            ColorEncoding::Bgr => "bgr",
            ColorEncoding::Gray => "gray",
        };
        f.write_str(name)
    }
}
