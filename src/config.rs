//! Scan configuration.
//!
//! Everything the scanner and generator would otherwise hard-code lives in
//! [`ScanConfig`] and is passed in explicitly. Tests build configs directly;
//! the CLI loads one from an optional `config.toml` in the scan root.
//!
//! ## Config File
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! # File extensions (case-insensitive, no leading dot) treated as images
//! extensions = ["png", "jpg", "jpeg", "webp", "gif", "svg"]
//!
//! # Descriptor written inside every collection folder
//! descriptor_file = "manifest.json"
//!
//! # Aggregate index written directly under the scan root. Sharing the
//! # descriptor's name is fine: the root itself is never a collection.
//! index_file = "manifest.json"
//! ```
//!
//! Unset keys keep their stock default. Unknown keys are rejected to catch
//! typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Name of the optional config file inside the scan root.
pub const CONFIG_FILE: &str = "config.toml";

/// Root directory scanned when none is given on the command line.
pub const DEFAULT_ROOT: &str = "tierlists";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Settings shared by the scan and generate stages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScanConfig {
    /// Image file extensions, compared case-insensitively.
    pub extensions: Vec<String>,
    /// Per-collection descriptor file name.
    pub descriptor_file: String,
    /// Aggregate index file name, written under the scan root.
    pub index_file: String,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            extensions: ["png", "jpg", "jpeg", "webp", "gif", "svg"]
                .into_iter()
                .map(String::from)
                .collect(),
            descriptor_file: "manifest.json".to_string(),
            index_file: "manifest.json".to_string(),
        }
    }
}

impl ScanConfig {
    /// Whether `ext` (without the dot) is a supported image extension.
    pub fn is_image_extension(&self, ext: &str) -> bool {
        self.extensions
            .iter()
            .any(|e| e.eq_ignore_ascii_case(ext))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.extensions.is_empty() {
            return Err(ConfigError::Validation(
                "extensions must not be empty".into(),
            ));
        }
        if let Some(bad) = self
            .extensions
            .iter()
            .find(|e| e.is_empty() || e.starts_with('.'))
        {
            return Err(ConfigError::Validation(format!(
                "extension {bad:?} must be non-empty and written without a leading dot"
            )));
        }
        validate_file_name("descriptor_file", &self.descriptor_file)?;
        validate_file_name("index_file", &self.index_file)?;
        Ok(())
    }
}

fn validate_file_name(key: &str, name: &str) -> Result<(), ConfigError> {
    if name.is_empty() {
        return Err(ConfigError::Validation(format!("{key} must not be empty")));
    }
    if name.contains('/') || name.contains('\\') {
        return Err(ConfigError::Validation(format!(
            "{key} must be a plain file name, got {name:?}"
        )));
    }
    Ok(())
}

/// Load `config.toml` from the scan root.
///
/// Returns stock defaults when the file does not exist. Keys present in the
/// file override the defaults; the merged result is validated.
pub fn load_config(root: &Path) -> Result<ScanConfig, ConfigError> {
    let config_path = root.join(CONFIG_FILE);
    if !config_path.exists() {
        return Ok(ScanConfig::default());
    }
    let content = fs::read_to_string(&config_path)?;
    let config: ScanConfig = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}
