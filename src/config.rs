//! Configuration file
//!
//! Holds the deployment-wide minimum stack version, the label versions are
//! read from, and optional per-family range overrides. Stored at
//! `~/.config/stackver/config.toml` unless a path is given explicitly.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::labels::VERSION_LABEL;
use crate::policy::CompatibilityPolicy;
use crate::range::{ComponentFamily, MinMaxVersion};
use crate::version::Version;

/// Directory under the user config dir
const CONFIG_DIR: &str = "stackver";

/// Config filename
const CONFIG_FILE: &str = "config.toml";

/// Errors that can occur when loading or saving the config
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Reading or writing the file failed
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not valid config TOML
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    /// The config could not be rendered as TOML
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// stackver configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Additional floor applied on top of every family range
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub global_min_stack_version: Option<Version>,
    /// Label versions are read from
    #[serde(default = "default_version_label")]
    pub version_label: String,
    /// Per-family replacements for the built-in ranges
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub ranges: BTreeMap<ComponentFamily, MinMaxVersion>,
}

fn default_version_label() -> String {
    VERSION_LABEL.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            global_min_stack_version: None,
            version_label: default_version_label(),
            ranges: BTreeMap::new(),
        }
    }
}

impl Config {
    /// Default config file path
    #[must_use]
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("~/.config"))
            .join(CONFIG_DIR)
            .join(CONFIG_FILE)
    }

    /// Load config from `path`, or defaults if the file does not exist
    ///
    /// A file that exists but does not parse is an error.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            log::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Save config to `path`, creating parent directories
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Build the compatibility policy this config describes
    #[must_use]
    pub fn policy(&self) -> CompatibilityPolicy {
        let mut policy = CompatibilityPolicy::new();
        for (family, range) in &self.ranges {
            policy = policy.with_range(*family, range.clone());
        }
        match &self.global_min_stack_version {
            Some(min) => policy.with_global_min(min.clone()),
            None => policy,
        }
    }
}
