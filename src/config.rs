//! Configuration management for Devtrail
//!
//! Project-local configuration lives in `.devtrail/config.yaml`, created by
//! `devtrail init`. A missing file means defaults; a malformed file is an
//! error rather than a silent fallback.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{DevtrailError, Result};

/// Project-local configuration directory
pub const CONFIG_DIR: &str = ".devtrail";

/// Configuration file name inside [`CONFIG_DIR`]
pub const CONFIG_FILE: &str = "config.yaml";

/// Main configuration structure for Devtrail
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Config schema version
    #[serde(default = "default_version")]
    pub version: String,

    /// Behavior settings
    #[serde(default)]
    pub settings: Settings,
}

/// Tunable behavior settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Whether sessions are tracked automatically
    #[serde(default = "default_auto_track")]
    pub auto_track: bool,

    /// Report output format; only `html` is supported
    #[serde(default = "default_report_format")]
    pub report_format: String,

    /// Command the publish workflow runs as the test suite
    #[serde(default = "default_test_command")]
    pub test_command: String,
}

fn default_version() -> String {
    "0.2.0".to_string()
}

fn default_auto_track() -> bool {
    true
}

fn default_report_format() -> String {
    "html".to_string()
}

fn default_test_command() -> String {
    "npm test".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            auto_track: default_auto_track(),
            report_format: default_report_format(),
            test_command: default_test_command(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: default_version(),
            settings: Settings::default(),
        }
    }
}

impl Config {
    /// Path of the config file under a project root
    pub fn path(root: &Path) -> PathBuf {
        root.join(CONFIG_DIR).join(CONFIG_FILE)
    }

    /// Load configuration for a project
    ///
    /// A missing file yields defaults. A present but malformed file is a
    /// configuration error.
    pub fn load(root: &Path) -> Result<Self> {
        let path = Self::path(root);
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(&path).map_err(|e| DevtrailError::Filesystem {
            path: path.display().to_string(),
            source: e,
        })?;
        let config: Config = serde_yaml::from_str(&raw)
            .map_err(|e| DevtrailError::Config(format!("{}: {}", path.display(), e)))?;
        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.settings.report_format != "html" {
            return Err(DevtrailError::Config(format!(
                "unsupported report format: {}",
                self.settings.report_format
            ))
            .into());
        }
        if self.settings.test_command.trim().is_empty() {
            return Err(DevtrailError::Config("test command must not be empty".to_string()).into());
        }
        Ok(())
    }
}
