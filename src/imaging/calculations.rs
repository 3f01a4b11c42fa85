//! Pure calculation functions for crop geometry.
//!
//! All functions here are pure and testable without any I/O or images.

/// A rectangular region of the source image, in source pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropWindow {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Calculate the largest centered window of the source that has the target
/// aspect ratio.
///
/// If the source is relatively wider than the target, the full height is kept
/// and the width is truncated to `height * ratio`. Otherwise (including exact
/// equality) the full width is kept and the height is truncated to
/// `width / ratio`. The window is then centered with floor division.
///
/// Evaluated in integer arithmetic so `1920x1080` against a `1920x1080`
/// target yields the full frame rather than losing a row to rounding.
///
/// # Arguments
/// * `source` - Source image dimensions (width, height)
/// * `target` - Target dimensions (width, height), both non-zero
///
/// # Examples
/// ```
/// # use store_crop::imaging::{CropWindow, crop_window};
/// // 2000x1000 into 1024x500: source is narrower, so crop by height
/// assert_eq!(
///     crop_window((2000, 1000), (1024, 500)),
///     CropWindow { x: 0, y: 12, width: 2000, height: 976 }
/// );
/// ```
pub fn crop_window(source: (u32, u32), target: (u32, u32)) -> CropWindow {
    let (src_w, src_h) = source;
    let (tgt_w, tgt_h) = target;
    let (sw, sh, tw, th) = (src_w as u64, src_h as u64, tgt_w as u64, tgt_h as u64);

    let (crop_w, crop_h) = if sw * th > sh * tw {
        // Source is wider: keep height, trim the sides
        ((sh * tw / th) as u32, src_h)
    } else {
        // Source is taller or equal: keep width, trim top and bottom
        (src_w, (sw * th / tw) as u32)
    };

    // A sliver source can truncate to zero; the resize needs at least a pixel.
    let crop_w = crop_w.clamp(1, src_w.max(1));
    let crop_h = crop_h.clamp(1, src_h.max(1));

    CropWindow {
        x: (src_w - crop_w) / 2,
        y: (src_h - crop_h) / 2,
        width: crop_w,
        height: crop_h,
    }
}
