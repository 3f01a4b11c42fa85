//! High-level image operations.
//!
//! These functions combine the crop calculations with pixel work from the
//! `image` crate, and plan backend calls for a preset.

use super::calculations::crop_window;
use super::params::{CropResizeParams, PngCompression};
use crate::presets::Preset;
use image::RgbImage;
use image::imageops::{self, FilterType};
use std::path::Path;

/// Center-crop `img` to the target aspect ratio, then resize it to exactly
/// `target_w × target_h` with Lanczos3.
///
/// Sources smaller than the target are upscaled. Because the crop window
/// already has the target ratio (up to one pixel of truncation), the resize
/// does not distort.
pub fn center_crop_and_resize(img: &RgbImage, target_w: u32, target_h: u32) -> RgbImage {
    let win = crop_window(img.dimensions(), (target_w, target_h));
    let cropped = imageops::crop_imm(img, win.x, win.y, win.width, win.height).to_image();
    imageops::resize(&cropped, target_w, target_h, FilterType::Lanczos3)
}

/// Output file name for a source stem rendered at a preset:
/// `{stem}_{preset_id}_{w}x{h}.png`.
pub fn output_filename(stem: &str, preset: &Preset) -> String {
    format!("{}_{}_{}x{}.png", stem, preset.id, preset.w, preset.h)
}

/// Plan a crop-resize operation without executing it.
pub fn plan_crop_resize(
    source: &Path,
    output_dir: &Path,
    preset: &Preset,
    compression: PngCompression,
) -> CropResizeParams {
    let stem = source
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    CropResizeParams {
        source: source.to_path_buf(),
        output: output_dir.join(output_filename(&stem, preset)),
        width: preset.w,
        height: preset.h,
        compression,
    }
}
