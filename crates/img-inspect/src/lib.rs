//! img-inspect: image inspection pipeline
//!
//! Load a decoded image from disk, convert between color encodings, split
//! it into channel planes, and render the result — each stage a stateless
//! transform over a [`PixelImage`].
//!
//! # Quick Start
//!
//! ```
//! use img_inspect::{channels, CaptureRenderer, ColorEncoding, PixelImage, Renderer};
//!
//! // A 2x2 RGB image: [[red, green], [blue, white]].
//! let image = PixelImage::from_raw(
//!     vec![255, 0, 0, 0, 255, 0, 0, 0, 255, 255, 255, 255],
//!     2,
//!     2,
//!     ColorEncoding::Rgb,
//! )
//! .unwrap();
//!
//! // Weighted luma reduction drops the channel axis.
//! let gray = image.to_gray().unwrap();
//! assert_eq!(gray.shape(), (2, 2, 1));
//!
//! // Split into independent per-channel planes.
//! let [r, g, b] = channels::split(&image).unwrap();
//! assert_eq!(r.data(), &[255, 0, 0, 255]);
//!
//! // Render through any sink; tests capture instead of displaying.
//! let mut renderer = CaptureRenderer::new();
//! renderer.show("gray", &gray).unwrap();
//! renderer.show("blue", &b.into_gray_image()).unwrap();
//! assert_eq!(renderer.frames().len(), 2);
//! # let _ = g;
//! ```
//!
//! # Pipeline
//!
//! ```text
//! loader ──> (color convert) ──> (channel split) ──> renderer
//! ```
//!
//! Three loader strategies produce the initial image: a high-level
//! [`ImageFile`](loader::ImageFile) handle, a raw RGB buffer, or a raw BGR
//! buffer (see [`loader`]). Everything downstream is synchronous, pure and
//! non-destructive: conversions and splits allocate new buffers and never
//! mutate their input.
//!
//! # Channel order
//!
//! A raw pixel buffer cannot tell you whether byte 0 of a pixel is red or
//! blue. Decoders disagree, and mixing the two conventions up silently
//! swaps colors in every downstream computation. This crate therefore tags
//! every [`PixelImage`] with a [`ColorEncoding`] and lets the conversion
//! and rendering stages read the tag, rather than trusting each call site
//! to remember which loader it used. The one deliberate exception is the
//! renderer, which displays three-channel data in the array's own order:
//! feed it BGR without converting and the colors come out swapped — that
//! pitfall is documented, not corrected.

pub mod channels;
pub mod convert;
pub mod encoding;
pub mod error;
pub mod image;
pub mod loader;
pub mod render;


pub use crate::encoding::ColorEncoding;
pub use crate::error::InspectError;
pub use crate::image::{ChannelPlane, PixelImage, ShapeError};
pub use crate::loader::{ImageFile, LoadError};
pub use crate::render::{CaptureRenderer, PngDirRenderer, RenderError, Renderer};
