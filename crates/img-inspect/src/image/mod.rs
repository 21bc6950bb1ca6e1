//! In-memory image values.
//!
//! - [`PixelImage`]: an owned, row-major interleaved `u8` buffer tagged with
//!   its [`ColorEncoding`].
//! - [`ChannelPlane`]: a single `(height, width)` channel extracted from a
//!   three-channel image.
//! - [`ShapeError`]: raised when an operation receives a buffer whose
//!   dimensions or channel count do not match its contract.

mod pixel_image;
mod plane;

pub use pixel_image::PixelImage;
pub use plane::ChannelPlane;

use thiserror::Error;

/// An operation received an array with an unexpected channel count or
/// dimensionality.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ShapeError {
    #[error("expected {expected} channels, got {actual}")]
    ChannelCount { expected: usize, actual: usize },

    #[error("buffer length {actual} does not match {width}x{height}x{channels} = {expected}")]
    BufferLength {
        width: usize,
        height: usize,
        channels: usize,
        expected: usize,
        actual: usize,
    },

    #[error("plane dimensions differ: {expected_width}x{expected_height} vs {actual_width}x{actual_height}")]
    PlaneMismatch {
        expected_width: usize,
        expected_height: usize,
        actual_width: usize,
        actual_height: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_error_messages() {
        let err = ShapeError::ChannelCount {
            expected: 3,
            actual: 1,
        };
        assert_eq!(err.to_string(), "expected 3 channels, got 1");

        let err = ShapeError::BufferLength {
            width: 2,
            height: 2,
            channels: 3,
            expected: 12,
            actual: 11,
        };
        assert_eq!(
            err.to_string(),
            "buffer length 11 does not match 2x2x3 = 12"
        );

        let err = ShapeError::PlaneMismatch {
            expected_width: 4,
            expected_height: 4,
            actual_width: 4,
            actual_height: 2,
        };
        assert_eq!(err.to_string(), "plane dimensions differ: 4x4 vs 4x2");
    }
}
