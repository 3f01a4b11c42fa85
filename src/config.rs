//! Tool configuration.
//!
//! Loaded from `store-crop.toml` in the working directory, or from the file
//! passed with `--config`. Every key is optional; an absent file means stock
//! defaults.
//!
//! ## Configuration Options
//!
//! ```toml
//! [output]
//! compression = "best"      # PNG effort: best | default | fast
//!
//! # Extra presets, appended after the stock table. Ids must not collide
//! # with stock ids or with each other.
//! [[presets]]
//! id = "watch-ultra"
//! name = "Apple Watch Ultra"
//! w = 410
//! h = 502
//! platform = "iOS"
//! desc = "Screenshot"
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use crate::imaging::PngCompression;
use crate::presets::{Preset, PresetError, PresetTable};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Config file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "store-crop.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(#[from] PresetError),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// PNG output settings.
    pub output: OutputConfig,
    /// User presets appended to the stock table.
    pub presets: Vec<Preset>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    pub compression: PngCompression,
}

impl Config {
    /// Build the preset table: stock presets followed by the user's.
    ///
    /// Fails on duplicate ids or zero sizes.
    pub fn preset_table(&self) -> Result<PresetTable, ConfigError> {
        Ok(PresetTable::with_extra(self.presets.clone())?)
    }
}

/// Parse and validate config text.
pub fn parse_config(content: &str) -> Result<Config, ConfigError> {
    let config: Config = toml::from_str(content)?;
    config.preset_table()?;
    Ok(config)
}

/// Load config from an explicit file. A missing file is an error.
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_config(&content)
}

/// Load `store-crop.toml` from `dir` if present, otherwise stock defaults.
pub fn load_default_config(dir: &Path) -> Result<Config, ConfigError> {
    let path = dir.join(DEFAULT_CONFIG_FILE);
    if !path.exists() {
        return Ok(Config::default());
    }
    load_config(&path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn empty_config_is_stock() {
        let config = parse_config("").unwrap();
        assert_eq!(config.output.compression, PngCompression::Best);
        assert!(config.presets.is_empty());
        assert_eq!(config.preset_table().unwrap().all().len(), 12);
    }

    #[test]
    fn sparse_output_override() {
        let config = parse_config("[output]\ncompression = \"fast\"\n").unwrap();
        assert_eq!(config.output.compression, PngCompression::Fast);
    }

    #[test]
    fn extra_presets_parsed() {
        let config = parse_config(
            r#"
[[presets]]
id = "watch-ultra"
name = "Apple Watch Ultra"
w = 410
h = 502
platform = "iOS"
"#,
        )
        .unwrap();
        let table = config.preset_table().unwrap();
        let watch = table.get("watch-ultra").unwrap();
        assert_eq!((watch.w, watch.h), (410, 502));
        assert_eq!(watch.desc, "");
    }

    #[test]
    fn unknown_keys_rejected() {
        assert!(matches!(
            parse_config("[output]\nquality = 90\n"),
            Err(ConfigError::Toml(_))
        ));
        assert!(matches!(parse_config("anchor = \"top\"\n"), Err(ConfigError::Toml(_))));
    }

    #[test]
    fn colliding_preset_id_rejected() {
        let result = parse_config(
            r#"
[[presets]]
id = "ios-icon"
name = "Mine"
w = 100
h = 100
platform = "iOS"
"#,
        );
        assert!(matches!(
            result,
            Err(ConfigError::Validation(PresetError::DuplicateId(_)))
        ));
    }

    #[test]
    fn zero_sized_preset_rejected() {
        let result = parse_config(
            r#"
[[presets]]
id = "line"
name = "Line"
w = 0
h = 100
platform = "Android"
"#,
        );
        assert!(matches!(
            result,
            Err(ConfigError::Validation(PresetError::InvalidSize(_)))
        ));
    }

    #[test]
    fn default_config_missing_file_is_stock() {
        let tmp = TempDir::new().unwrap();
        let config = load_default_config(tmp.path()).unwrap();
        assert!(config.presets.is_empty());
    }

    #[test]
    fn default_config_read_from_dir() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join(DEFAULT_CONFIG_FILE),
            "[output]\ncompression = \"default\"\n",
        )
        .unwrap();
        let config = load_default_config(tmp.path()).unwrap();
        assert_eq!(config.output.compression, PngCompression::Default);
    }

    #[test]
    fn explicit_missing_file_errors() {
        let tmp = TempDir::new().unwrap();
        assert!(matches!(
            load_config(&tmp.path().join("nope.toml")),
            Err(ConfigError::Io(_))
        ));
    }
}
