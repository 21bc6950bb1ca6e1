//! Image loading strategies.
//!
//! Three interchangeable ways of getting an image off disk, all backed by
//! the `image` crate's decoders:
//!
//! - [`open()`]: a high-level [`ImageFile`] handle for display and
//!   inspection; pixel access requires an explicit
//!   [`into_pixels()`](ImageFile::into_pixels) step.
//! - [`load_rgb()`]: a raw [`PixelImage`] in red-green-blue order.
//! - [`load_bgr()`]: a raw [`PixelImage`] in blue-green-red order, for
//!   call sites written against BGR-native decoders.
//!
//! The file handle is scoped to the call and released on every exit path,
//! including decode failure. Loading has no side effects beyond reading the
//! file.

use std::path::{Path, PathBuf};

use image::{DynamicImage, GenericImageView, ImageReader};
use thiserror::Error;

use crate::encoding::ColorEncoding;
use crate::image::PixelImage;

/// Failure to produce an in-memory image from a path.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The path does not resolve to a readable file.
    #[error("image file not found or unreadable: {}: {source}", path.display())]
    FileNotFound {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The file exists but is not a decodable image.
    #[error("not a decodable image: {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },

    /// An in-memory buffer is not a decodable image.
    #[error("not a decodable image: {source}")]
    DecodeBytes { source: image::ImageError },
}

/// A decoded image behind a high-level handle.
///
/// Wraps the decoder output without exposing the pixel buffer; use it to
/// inspect dimensions, or call [`into_pixels()`](Self::into_pixels) when the
/// raw array is actually needed.
#[derive(Debug, Clone)]
pub struct ImageFile {
    image: DynamicImage,
    path: PathBuf,
}

impl ImageFile {
    /// Image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// The path the image was loaded from.
    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Convert the handle into a raw [`PixelImage`] in RGB order.
    ///
    /// This is the explicit conversion step between "an image I can look at"
    /// and "an array I can compute with".
    pub fn into_pixels(self) -> PixelImage {
        let rgb = self.image.into_rgb8();
        let (width, height) = rgb.dimensions();
        PixelImage::new(
            rgb.into_raw(),
            width as usize,
            height as usize,
            ColorEncoding::Rgb,
        )
    }
}

/// Open an image file as a high-level [`ImageFile`] handle.
pub fn open(path: impl AsRef<Path>) -> Result<ImageFile, LoadError> {
    let path = path.as_ref();
    let image = decode(path)?;
    Ok(ImageFile {
        image,
        path: path.to_path_buf(),
    })
}

/// Load an image file as a raw [`PixelImage`] in red-green-blue order.
pub fn load_rgb(path: impl AsRef<Path>) -> Result<PixelImage, LoadError> {
    Ok(open(path)?.into_pixels())
}

/// Decode an already-read encoded image (an upload body, an embedded
/// fixture) as a raw [`PixelImage`] in red-green-blue order.
///
/// The format is sniffed from the buffer content.
pub fn load_rgb_from_memory(bytes: &[u8]) -> Result<PixelImage, LoadError> {
    let decoded =
        image::load_from_memory(bytes).map_err(|source| LoadError::DecodeBytes { source })?;
    let rgb = decoded.into_rgb8();
    let (width, height) = rgb.dimensions();
    Ok(PixelImage::new(
        rgb.into_raw(),
        width as usize,
        height as usize,
        ColorEncoding::Rgb,
    ))
}

/// Load an image file as a raw [`PixelImage`] in blue-green-red order.
pub fn load_bgr(path: impl AsRef<Path>) -> Result<PixelImage, LoadError> {
    let rgb = load_rgb(path)?;
    let (width, height) = (rgb.width(), rgb.height());
    let mut data = rgb.into_raw();
    for pixel in data.chunks_exact_mut(3) {
        pixel.swap(0, 2);
    }
    Ok(PixelImage::new(data, width, height, ColorEncoding::Bgr))
}

/// Open and decode a file, classifying failures into the load taxonomy.
fn decode(path: &Path) -> Result<DynamicImage, LoadError> {
    let not_found = |source| LoadError::FileNotFound {
        path: path.to_path_buf(),
        source,
    };
    // Format is sniffed from the file content, not the extension.
    let reader = ImageReader::open(path)
        .map_err(not_found)?
        .with_guessed_format()
        .map_err(not_found)?;
    reader.decode().map_err(|source| LoadError::Decode {
        path: path.to_path_buf(),
        source,
    })
}
