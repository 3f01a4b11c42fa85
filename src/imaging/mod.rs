//! Image processing on the `image` crate.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Crop geometry** | [`crop_window`] (pure integer math) |
//! | **Crop + resize** | `crop_imm` + Lanczos3 `resize` |
//! | **Encode** | `PngEncoder` with configurable compression |
//!
//! The module is split into:
//! - **Calculations**: Pure functions for crop geometry (unit testable)
//! - **Parameters**: Data structures describing image operations
//! - **Backend**: [`ImageBackend`] trait + [`RustBackend`]
//! - **Operations**: In-memory crop/resize and per-preset planning

pub mod backend;
mod calculations;
pub mod operations;
mod params;
pub mod rust_backend;

pub use backend::{BackendError, Dimensions, ImageBackend};
pub use calculations::{CropWindow, crop_window};
pub use operations::{center_crop_and_resize, output_filename, plan_crop_resize};
pub use params::{CropResizeParams, PngCompression};
pub use rust_backend::{RustBackend, SUPPORTED_EXTENSIONS};
