//! # Store Crop
//!
//! Batch-resize images into the fixed resolutions the App Store and Google
//! Play require for icons, feature graphics and screenshots.
//!
//! Every output is produced the same way: cut the largest centered window
//! with the target's aspect ratio out of the source, then scale that window
//! to the exact target size with Lanczos3. Nothing is letterboxed or
//! stretched; whatever falls outside the window is discarded.
//!
//! ```text
//! shots/a.png (2000x1000) ──crop 2000x976 @ (0,12)──▶ resize ──▶ out/a_play-feature_1024x500.png
//! ```
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`presets`] | Stock store presets and id lookup |
//! | [`config`] | Optional `store-crop.toml`: PNG compression and extra presets |
//! | [`scan`] | Flat listing of candidate source images |
//! | [`imaging`] | Crop geometry, crop/resize, PNG encoding |
//! | [`batch`] | Directory batch driver with per-file skip-and-continue |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Skip, Don't Abort
//!
//! A batch is a directory of unrelated files. A corrupt or unreadable file
//! is reported and skipped; the rest of the directory is still rendered and
//! the run still succeeds. Only problems that make the whole batch
//! meaningless (unknown preset, unreadable source directory, uncreatable
//! output directory) stop the run.
//!
//! ## Integer Crop Geometry
//!
//! The crop window is computed with exact integer arithmetic
//! ([`imaging::crop_window`]) rather than a floating-point ratio, so sources
//! that already match the target ratio are never trimmed by a rounding
//! error.
//!
//! ## PNG Only
//!
//! Store uploads accept PNG everywhere, and PNG is lossless. Outputs are
//! encoded at maximum compression by default.

pub mod batch;
pub mod config;
pub mod imaging;
pub mod output;
pub mod presets;
pub mod scan;

#[cfg(test)]
pub(crate) mod test_helpers;
