//! Parameter types for image operations.
//!
//! These structs describe *what* to do, not *how* to do it. They are the
//! interface between the batch driver (which decides which files to produce)
//! and the [`backend`](super::backend) (which does the pixel work), so the
//! driver can be exercised against a mock backend.
//!
//! ## Types
//!
//! - [`PngCompression`] — PNG encoder effort. `Best` is the size-optimized default.
//! - [`CropResizeParams`] — Full specification for one preset render: source, output path, target size, compression.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// PNG encoder effort level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PngCompression {
    /// Smallest files, slowest encode.
    #[default]
    Best,
    Default,
    Fast,
}

/// Parameters for a center-crop-and-resize render.
#[derive(Debug, Clone, PartialEq)]
pub struct CropResizeParams {
    pub source: PathBuf,
    pub output: PathBuf,
    /// Exact output dimensions.
    pub width: u32,
    pub height: u32,
    pub compression: PngCompression,
}
