//! Source directory listing.
//!
//! Lists the candidate images of a flat source directory: regular files whose
//! extension is one of [`SUPPORTED_EXTENSIONS`], compared case-insensitively.
//! Subdirectories are not descended into. Whether a candidate actually
//! decodes is only known when the batch driver processes it.
//!
//! Candidates are returned sorted by file name so runs are reproducible.

use crate::imaging::SUPPORTED_EXTENSIONS;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("cannot list {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// List candidate images directly inside `dir`.
pub fn list_candidates(dir: &Path) -> Result<Vec<PathBuf>, ScanError> {
    let read = fs::read_dir(dir).map_err(|source| ScanError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut entries: Vec<PathBuf> = read
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| is_candidate(p))
        .collect();

    entries.sort();
    Ok(entries)
}

fn is_candidate(path: &Path) -> bool {
    path.is_file() && has_supported_extension(path)
}

/// Case-insensitive extension check against [`SUPPORTED_EXTENSIONS`].
pub fn has_supported_extension(path: &Path) -> bool {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    SUPPORTED_EXTENSIONS.contains(&ext.as_str())
}
