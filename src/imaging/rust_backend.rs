//! Pure Rust image processing backend.
//!
//! Everything is statically linked into the binary.
//!
//! ## Crate mapping
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Decode (JPEG, PNG) | `image::ImageReader`, format sniffed from content |
//! | Normalize | `DynamicImage::to_rgb8` (drops alpha, palette, grayscale) |
//! | Crop | `image::imageops::crop_imm` |
//! | Resize | `image::imageops::resize` with `Lanczos3` filter |
//! | Encode → PNG | `image::codecs::png::PngEncoder`, adaptive filtering |

use super::backend::{BackendError, Dimensions, ImageBackend};
use super::operations::center_crop_and_resize;
use super::params::{CropResizeParams, PngCompression};
use image::codecs::png::{self, PngEncoder};
use image::{ExtendedColorType, ImageEncoder, ImageReader, RgbImage};
use std::path::Path;

/// Source extensions accepted by the batch driver (compared case-insensitively).
pub const SUPPORTED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];

/// Pure Rust backend using the `image` crate.
///
/// See the [module docs](self) for the crate-to-operation mapping.
pub struct RustBackend;

impl RustBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RustBackend {
    fn default() -> Self {
        Self::new()
    }
}

/// Load, decode and normalize an image to 8-bit RGB.
///
/// The format is sniffed from the file header, so a PNG saved as `.jpg`
/// still decodes.
fn load_rgb(path: &Path) -> Result<RgbImage, BackendError> {
    let img = ImageReader::open(path)
        .map_err(BackendError::Io)?
        .with_guessed_format()
        .map_err(BackendError::Io)?
        .decode()
        .map_err(|e| BackendError::ProcessingFailed(format!("cannot decode: {}", e)))?;
    Ok(img.to_rgb8())
}

fn compression_type(compression: PngCompression) -> png::CompressionType {
    match compression {
        PngCompression::Best => png::CompressionType::Best,
        PngCompression::Default => png::CompressionType::Default,
        PngCompression::Fast => png::CompressionType::Fast,
    }
}

/// Encode and save as PNG, truncating any existing file.
fn save_png(img: &RgbImage, path: &Path, compression: PngCompression) -> Result<(), BackendError> {
    let file = std::fs::File::create(path).map_err(BackendError::Io)?;
    let writer = std::io::BufWriter::new(file);
    let encoder = PngEncoder::new_with_quality(
        writer,
        compression_type(compression),
        png::FilterType::Adaptive,
    );
    encoder
        .write_image(
            img.as_raw(),
            img.width(),
            img.height(),
            ExtendedColorType::Rgb8,
        )
        .map_err(|e| BackendError::ProcessingFailed(format!("PNG encode failed: {}", e)))
}

impl ImageBackend for RustBackend {
    fn crop_resize(&self, params: &CropResizeParams) -> Result<Dimensions, BackendError> {
        let img = load_rgb(&params.source)?;
        let source = Dimensions {
            width: img.width(),
            height: img.height(),
        };
        let out = center_crop_and_resize(&img, params.width, params.height);
        save_png(&out, &params.output, params.compression)?;
        Ok(source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{create_test_jpeg, create_test_png};

    fn params(source: &Path, output: &Path, width: u32, height: u32) -> CropResizeParams {
        CropResizeParams {
            source: source.to_path_buf(),
            output: output.to_path_buf(),
            width,
            height,
            compression: PngCompression::Best,
        }
    }

    #[test]
    fn crop_resize_jpeg_to_exact_png() {
        let tmp = tempfile::TempDir::new().unwrap();
        let source = tmp.path().join("shot.jpg");
        create_test_jpeg(&source, 400, 300);

        let output = tmp.path().join("out.png");
        let dims = RustBackend::new()
            .crop_resize(&params(&source, &output, 120, 260))
            .unwrap();

        assert_eq!(dims, Dimensions { width: 400, height: 300 });
        assert_eq!(image::image_dimensions(&output).unwrap(), (120, 260));
    }

    #[test]
    fn crop_resize_drops_alpha() {
        let tmp = tempfile::TempDir::new().unwrap();
        let source = tmp.path().join("icon.png");
        let rgba = image::RgbaImage::from_pixel(64, 64, image::Rgba([255, 0, 0, 40]));
        rgba.save(&source).unwrap();

        let output = tmp.path().join("out.png");
        RustBackend::new()
            .crop_resize(&params(&source, &output, 32, 32))
            .unwrap();

        let decoded = image::open(&output).unwrap();
        assert_eq!(decoded.color(), image::ColorType::Rgb8);
    }

    #[test]
    fn crop_resize_sniffs_mislabelled_extension() {
        let tmp = tempfile::TempDir::new().unwrap();
        let source = tmp.path().join("actually-png.jpg");
        create_test_png(&source, 50, 80);

        let output = tmp.path().join("out.png");
        let dims = RustBackend::new()
            .crop_resize(&params(&source, &output, 20, 20))
            .unwrap();
        assert_eq!(dims.height, 80);
    }

    #[test]
    fn crop_resize_overwrites_existing_output() {
        let tmp = tempfile::TempDir::new().unwrap();
        let source = tmp.path().join("a.png");
        create_test_png(&source, 100, 100);
        let output = tmp.path().join("out.png");
        std::fs::write(&output, b"stale").unwrap();

        RustBackend::new()
            .crop_resize(&params(&source, &output, 10, 10))
            .unwrap();
        assert_eq!(image::image_dimensions(&output).unwrap(), (10, 10));
    }

    #[test]
    fn corrupt_source_errors() {
        let tmp = tempfile::TempDir::new().unwrap();
        let source = tmp.path().join("broken.png");
        std::fs::write(&source, b"not an image at all").unwrap();

        let output = tmp.path().join("out.png");
        let result = RustBackend::new().crop_resize(&params(&source, &output, 10, 10));
        assert!(matches!(result, Err(BackendError::ProcessingFailed(_))));
        assert!(!output.exists());
    }

    #[test]
    fn missing_source_is_io_error() {
        let tmp = tempfile::TempDir::new().unwrap();
        let result = RustBackend::new().crop_resize(&params(
            &tmp.path().join("nope.png"),
            &tmp.path().join("out.png"),
            10,
            10,
        ));
        assert!(matches!(result, Err(BackendError::Io(_))));
    }
}
