//! Rendering: making a pixel array visible.
//!
//! The pipeline ends at a [`Renderer`] with a single `show()` method.
//! Production code renders through PNG sinks ([`PngDirRenderer`], or
//! [`png::encode_png()`] for in-memory consumers like an HTTP response);
//! non-interactive environments substitute [`CaptureRenderer`], which
//! records the images it was shown instead of producing output.
//!
//! The renderer never converts: three-channel input is rendered in the
//! array's own channel order, so BGR data handed over without a prior
//! conversion displays with red and blue swapped. Single-channel input is
//! rendered with the grayscale intensity mapping.

pub mod png;

use std::fs;
use std::path::PathBuf;

use thiserror::Error;

use crate::image::PixelImage;

/// Failure to render an image.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("PNG encode error: {0}")]
    PngEncode(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A display surface for pixel arrays.
///
/// `show()` takes a label so an invocation that displays several images
/// (say, three channel planes) can tell its outputs apart.
pub trait Renderer {
    /// Render one image. The error aborts the current pipeline run; it must
    /// not affect images already shown.
    fn show(&mut self, label: &str, image: &PixelImage) -> Result<(), RenderError>;
}

/// Renderer that writes one numbered PNG per `show()` call into a directory.
///
/// Output files are named `NN-label.png` in call order.
pub struct PngDirRenderer {
    dir: PathBuf,
    frame: usize,
}

impl PngDirRenderer {
    /// Create a renderer writing into `dir`, creating it if needed.
    pub fn create(dir: impl Into<PathBuf>) -> Result<Self, RenderError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir, frame: 0 })
    }

    /// Number of images shown so far.
    #[inline]
    pub fn frames_written(&self) -> usize {
        self.frame
    }
}

impl Renderer for PngDirRenderer {
    fn show(&mut self, label: &str, image: &PixelImage) -> Result<(), RenderError> {
        let bytes = png::encode_png(image)?;
        let path = self.dir.join(format!("{:02}-{label}.png", self.frame));
        fs::write(path, bytes)?;
        self.frame += 1;
        Ok(())
    }
}

/// Capturing stub for tests and other non-interactive environments.
///
/// Records each `(label, image)` pair passed to `show()` instead of opening
/// a visible surface.
#[derive(Debug, Default)]
pub struct CaptureRenderer {
    frames: Vec<(String, PixelImage)>,
}

impl CaptureRenderer {
    /// Create an empty capture renderer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything shown so far, in order.
    #[inline]
    pub fn frames(&self) -> &[(String, PixelImage)] {
        &self.frames
    }
}

impl Renderer for CaptureRenderer {
    fn show(&mut self, label: &str, image: &PixelImage) -> Result<(), RenderError> {
        self.frames.push((label.to_string(), image.clone()));
        Ok(())
    }
}
