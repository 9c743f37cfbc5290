//! Configuration file handling

use super::{ScoringPolicy, SelectorConfig};
use crate::error::{ConfigError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Configuration file structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Global settings
    #[serde(default)]
    pub settings: Settings,

    /// Scoring policy overrides
    #[serde(default)]
    pub scoring: ScoringPolicy,
}

/// Global settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Per-probe timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,

    /// Probes in flight at once
    #[serde(default = "default_concurrency")]
    pub concurrency: usize,

    /// Endpoints sampled for the reference head
    #[serde(default = "default_head_sample_size")]
    pub head_sample_size: usize,
}

fn default_timeout() -> u64 {
    6
}

fn default_concurrency() -> usize {
    1
}

fn default_head_sample_size() -> usize {
    3
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            timeout_seconds: default_timeout(),
            concurrency: default_concurrency(),
            head_sample_size: default_head_sample_size(),
        }
    }
}

impl Settings {
    /// Per-probe timeout
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    /// Selector settings derived from this file
    pub fn selector_config(&self) -> SelectorConfig {
        SelectorConfig {
            head_sample_size: self.head_sample_size.max(1),
            concurrency: self.concurrency.max(1),
        }
    }
}

impl ConfigFile {
    /// Get the default config file path
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("rollup-rotator")
            .join("config.toml")
    }

    /// Load from default path
    pub fn load_default() -> Result<Option<Self>> {
        Self::load_optional(&Self::default_path())
    }

    /// Load if the file exists
    pub fn load_optional(path: &Path) -> Result<Option<Self>> {
        if path.exists() {
            Ok(Some(Self::load(path)?))
        } else {
            Ok(None)
        }
    }

    /// Load from a specific path
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::InvalidFile(format!("{}: {}", path.display(), e)))?;

        let config: Self = toml::from_str(&content).map_err(ConfigError::from)?;
        config.scoring.validate()?;
        Ok(config)
    }
}
