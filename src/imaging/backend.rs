//! Image processing backend trait and shared types.
//!
//! The [`ImageBackend`] trait defines the one operation the batch driver
//! needs: decode, crop, resize and encode a single file.
//!
//! The production implementation is
//! [`RustBackend`](super::rust_backend::RustBackend), built on the `image`
//! crate. Tests use a recording mock.

use super::params::CropResizeParams;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Processing failed: {0}")]
    ProcessingFailed(String),
}

/// Pixel dimensions of a decoded source image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

/// Trait for image processing backends.
pub trait ImageBackend {
    /// Decode `params.source`, center-crop it to the target ratio, resize to
    /// exactly `params.width × params.height` and write a PNG to
    /// `params.output`, replacing any existing file.
    ///
    /// Returns the dimensions of the decoded source.
    fn crop_resize(&self, params: &CropResizeParams) -> Result<Dimensions, BackendError>;
}
