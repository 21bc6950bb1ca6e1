//! Unified error type for the img-inspect public API.
//!
//! [`InspectError`] wraps the per-stage error types into a single enum for
//! convenient `?` propagation in application code. No stage retries or
//! recovers: an error surfaces immediately and aborts the current pipeline
//! run, without affecting other independent runs.

use thiserror::Error;

use crate::image::ShapeError;
use crate::loader::LoadError;
use crate::render::RenderError;

/// Any failure the inspection pipeline can produce.
///
/// # Example
///
/// ```no_run
/// use img_inspect::{loader, InspectError, Renderer};
///
/// fn show_gray(path: &str, renderer: &mut dyn Renderer) -> Result<(), InspectError> {
///     let image = loader::load_rgb(path)?;
///     let gray = image.to_gray()?;
///     renderer.show("gray", &gray)?;
///     Ok(())
/// }
/// ```
#[derive(Debug, Error)]
pub enum InspectError {
    /// The loader could not produce an image from the given path.
    #[error("load error: {0}")]
    Load(#[from] LoadError),

    /// An operation received an array of the wrong shape.
    #[error("shape error: {0}")]
    Shape(#[from] ShapeError),

    /// The renderer could not display the image.
    #[error("render error: {0}")]
    Render(#[from] RenderError),
}
