//! App store output presets.
//!
//! Each preset names a target resolution required by the App Store or Google
//! Play: icons, the Play feature banner, and device screenshots. The stock
//! table is fixed at compile time; a config file may append more (see
//! [`crate::config`]).
//!
//! | id | size | platform |
//! |---|---|---|
//! | `ios-icon` | 1024×1024 | iOS |
//! | `android-icon` | 512×512 | Android |
//! | `play-feature` | 1024×500 | Android |
//! | `iphone-se` | 750×1334 | iOS |
//! | `iphone-12` | 1170×2532 | iOS |
//! | `iphone-15-pro` | 1290×2796 | iOS |
//! | `ipad-pro` | 2048×2732 | iOS |
//! | `ipad-10` | 1640×2360 | iOS |
//! | `android-phone` | 1080×1920 | Android |
//! | `android-phone-h` | 1920×1080 | Android |
//! | `android-7` | 1200×1920 | Android |
//! | `android-10` | 1600×2560 | Android |
//!
//! Ids are case-sensitive and unique within a [`PresetTable`]; uniqueness is
//! checked when the table is built.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PresetError {
    #[error("unknown preset: {id} (available: {available})")]
    Unknown { id: String, available: String },
    #[error("duplicate preset id: {0}")]
    DuplicateId(String),
    #[error("preset {0} must have a non-zero width and height")]
    InvalidSize(String),
}

/// Store the preset targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Platform {
    #[serde(rename = "iOS", alias = "ios")]
    Ios,
    #[serde(rename = "Android", alias = "android")]
    Android,
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Platform::Ios => f.write_str("iOS"),
            Platform::Android => f.write_str("Android"),
        }
    }
}

/// A named target resolution.
///
/// Only `id`, `w` and `h` drive processing; the rest is for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Preset {
    pub id: String,
    pub name: String,
    pub w: u32,
    pub h: u32,
    pub platform: Platform,
    #[serde(default)]
    pub desc: String,
}

impl Preset {
    fn stock(id: &str, name: &str, w: u32, h: u32, platform: Platform, desc: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            w,
            h,
            platform,
            desc: desc.to_string(),
        }
    }
}

fn stock_presets() -> Vec<Preset> {
    use Platform::{Android, Ios};
    vec![
        // App icons
        Preset::stock("ios-icon", "iOS icon", 1024, 1024, Ios, "App Store icon"),
        Preset::stock("android-icon", "Android icon", 512, 512, Android, "Play Store icon"),
        // Play Store banner
        Preset::stock("play-feature", "Feature graphic", 1024, 500, Android, "Play Store banner"),
        // iOS screenshots
        Preset::stock("iphone-se", "iPhone SE", 750, 1334, Ios, "Screenshot"),
        Preset::stock("iphone-12", "iPhone 12/13/14", 1170, 2532, Ios, "Screenshot"),
        Preset::stock("iphone-15-pro", "iPhone 15/16 Pro", 1290, 2796, Ios, "Screenshot"),
        Preset::stock("ipad-pro", "iPad Pro 12.9\"", 2048, 2732, Ios, "Screenshot"),
        Preset::stock("ipad-10", "iPad 10", 1640, 2360, Ios, "Screenshot"),
        // Android screenshots
        Preset::stock("android-phone", "Android phone", 1080, 1920, Android, "Portrait screenshot"),
        Preset::stock("android-phone-h", "Android landscape", 1920, 1080, Android, "Landscape screenshot"),
        Preset::stock("android-7", "7\" tablet", 1200, 1920, Android, "Screenshot"),
        Preset::stock("android-10", "10\" tablet", 1600, 2560, Android, "Screenshot"),
    ]
}

/// Ordered, id-unique collection of presets.
#[derive(Debug, Clone)]
pub struct PresetTable {
    presets: Vec<Preset>,
}

impl PresetTable {
    /// The built-in store presets.
    pub fn stock() -> Self {
        Self {
            presets: stock_presets(),
        }
    }

    /// Build a table, rejecting zero sizes and duplicate ids.
    pub fn new(presets: Vec<Preset>) -> Result<Self, PresetError> {
        let mut seen = HashSet::new();
        for preset in &presets {
            if preset.w == 0 || preset.h == 0 {
                return Err(PresetError::InvalidSize(preset.id.clone()));
            }
            if !seen.insert(preset.id.as_str()) {
                return Err(PresetError::DuplicateId(preset.id.clone()));
            }
        }
        Ok(Self { presets })
    }

    /// The stock table followed by `extra`.
    pub fn with_extra(extra: Vec<Preset>) -> Result<Self, PresetError> {
        let mut presets = stock_presets();
        presets.extend(extra);
        Self::new(presets)
    }

    /// Exact, case-sensitive lookup.
    pub fn get(&self, id: &str) -> Option<&Preset> {
        self.presets.iter().find(|p| p.id == id)
    }

    /// Like [`get`](Self::get), but a miss is an error naming the valid ids.
    pub fn resolve(&self, id: &str) -> Result<&Preset, PresetError> {
        self.get(id).ok_or_else(|| PresetError::Unknown {
            id: id.to_string(),
            available: self.ids().join(", "),
        })
    }

    pub fn by_platform(&self, platform: Platform) -> Vec<&Preset> {
        self.presets
            .iter()
            .filter(|p| p.platform == platform)
            .collect()
    }

    pub fn all(&self) -> &[Preset] {
        &self.presets
    }

    pub fn ids(&self) -> Vec<&str> {
        self.presets.iter().map(|p| p.id.as_str()).collect()
    }
}

impl Default for PresetTable {
    fn default() -> Self {
        Self::stock()
    }
}
