//! Batch driver: render every image in a directory at one preset.
//!
//! ## Steps
//!
//! 1. Resolve the preset id (fatal if unknown).
//! 2. Create the output directory and any parents (idempotent).
//! 3. List the source directory, non-recursively (fatal if unreadable).
//! 4. For each `.png` / `.jpg` / `.jpeg` file, in name order: decode,
//!    center-crop, resize, and write
//!    `{output}/{stem}_{preset_id}_{w}x{h}.png`, overwriting.
//!
//! A file that fails at any point in step 4 is reported as skipped and the
//! batch moves on; skipped files do not fail the run.
//!
//! ## Progress
//!
//! Each step reports a [`BatchEvent`] to a caller-supplied callback as soon
//! as it happens. Processing is sequential, so events arrive in file order.

use crate::imaging::{Dimensions, ImageBackend, PngCompression, RustBackend, plan_crop_resize};
use crate::presets::{Preset, PresetError, PresetTable};
use crate::scan::{self, ScanError};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BatchError {
    #[error(transparent)]
    Preset(#[from] PresetError),
    #[error("cannot create output directory {path}: {source}")]
    OutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Scan(#[from] ScanError),
}

/// Progress reported while a batch runs.
#[derive(Debug, Clone, PartialEq)]
pub enum BatchEvent {
    /// Preset resolved and source listed.
    Started { preset: Preset, candidates: usize },
    /// One output file written.
    Written {
        source: PathBuf,
        output: PathBuf,
        source_dims: Dimensions,
    },
    /// One source file could not be processed.
    Skipped { filename: String, reason: String },
}

/// Outcome of a completed batch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchSummary {
    pub written: Vec<PathBuf>,
    pub skipped: Vec<String>,
}

/// Run a batch with the production image backend.
pub fn run_batch(
    source_dir: &Path,
    output_dir: &Path,
    preset_id: &str,
    presets: &PresetTable,
    compression: PngCompression,
    on_event: impl FnMut(BatchEvent),
) -> Result<BatchSummary, BatchError> {
    let backend = RustBackend::new();
    run_batch_with_backend(
        &backend,
        source_dir,
        output_dir,
        preset_id,
        presets,
        compression,
        on_event,
    )
}

/// Run a batch using a specific backend (allows testing with mock).
pub fn run_batch_with_backend(
    backend: &impl ImageBackend,
    source_dir: &Path,
    output_dir: &Path,
    preset_id: &str,
    presets: &PresetTable,
    compression: PngCompression,
    mut on_event: impl FnMut(BatchEvent),
) -> Result<BatchSummary, BatchError> {
    let preset = presets.resolve(preset_id)?;

    std::fs::create_dir_all(output_dir).map_err(|source| BatchError::OutputDir {
        path: output_dir.to_path_buf(),
        source,
    })?;

    let candidates = scan::list_candidates(source_dir)?;
    on_event(BatchEvent::Started {
        preset: preset.clone(),
        candidates: candidates.len(),
    });

    let mut summary = BatchSummary::default();
    for source in candidates {
        let params = plan_crop_resize(&source, output_dir, preset, compression);
        match backend.crop_resize(&params) {
            Ok(source_dims) => {
                summary.written.push(params.output.clone());
                on_event(BatchEvent::Written {
                    source,
                    output: params.output,
                    source_dims,
                });
            }
            Err(e) => {
                let filename = source
                    .file_name()
                    .map(|f| f.to_string_lossy().into_owned())
                    .unwrap_or_else(|| source.display().to_string());
                summary.skipped.push(filename.clone());
                on_event(BatchEvent::Skipped {
                    filename,
                    reason: e.to_string(),
                });
            }
        }
    }

    Ok(summary)
}
