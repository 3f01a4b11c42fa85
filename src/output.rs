//! CLI output formatting.
//!
//! # Output Format
//!
//! ## Batch
//!
//! ```text
//! ==> play-feature: Feature graphic 1024x500 (3 images)
//! Wrote: out/a_play-feature_1024x500.png (2000x1000)
//! Skipped broken.jpg: Processing failed: cannot decode: ...
//! Wrote: out/c_play-feature_1024x500.png (800x600)
//! Done: 2 written, 1 skipped
//! ```
//!
//! ## Preset list
//!
//! ```text
//! ios-icon         1024x1024  iOS      iOS icon — App Store icon
//! android-icon     512x512    Android  Android icon — Play Store icon
//! ```
//!
//! # Architecture
//!
//! Each output has a `format_*` function (returns `Vec<String>` or `String`)
//! for testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure: no I/O, no side effects.

use crate::batch::{BatchEvent, BatchSummary};
use crate::presets::Preset;

// ============================================================================
// Batch output
// ============================================================================

/// Format a single batch progress event as display lines.
pub fn format_batch_event(event: &BatchEvent) -> Vec<String> {
    match event {
        BatchEvent::Started { preset, candidates } => vec![format!(
            "==> {}: {} {}x{} ({} {})",
            preset.id,
            preset.name,
            preset.w,
            preset.h,
            candidates,
            if *candidates == 1 { "image" } else { "images" }
        )],
        BatchEvent::Written {
            output,
            source_dims,
            ..
        } => vec![format!(
            "Wrote: {} ({}x{})",
            output.display(),
            source_dims.width,
            source_dims.height
        )],
        BatchEvent::Skipped { filename, reason } => {
            vec![format!("Skipped {}: {}", filename, reason)]
        }
    }
}

pub fn print_batch_event(event: &BatchEvent) {
    for line in format_batch_event(event) {
        println!("{}", line);
    }
}

pub fn format_summary(summary: &BatchSummary) -> String {
    format!(
        "Done: {} written, {} skipped",
        summary.written.len(),
        summary.skipped.len()
    )
}

pub fn print_summary(summary: &BatchSummary) {
    println!("{}", format_summary(summary));
}

// ============================================================================
// Preset listing
// ============================================================================

/// Format presets as aligned columns: id, size, platform, name and description.
pub fn format_preset_list(presets: &[&Preset]) -> Vec<String> {
    let id_width = presets.iter().map(|p| p.id.len()).max().unwrap_or(0);
    presets
        .iter()
        .map(|p| {
            let size = format!("{}x{}", p.w, p.h);
            let label = if p.desc.is_empty() {
                p.name.clone()
            } else {
                format!("{} \u{2014} {}", p.name, p.desc)
            };
            format!(
                "{:<id_width$}  {:<9}  {:<7}  {}",
                p.id,
                size,
                p.platform.to_string(),
                label
            )
        })
        .collect()
}

pub fn print_preset_list(presets: &[&Preset]) {
    for line in format_preset_list(presets) {
        println!("{}", line);
    }
}

/// Presets as a pretty JSON array, field names matching the web tool's table.
pub fn format_preset_json(presets: &[&Preset]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(presets)
}
