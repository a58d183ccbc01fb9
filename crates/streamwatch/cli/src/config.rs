//! CLI configuration

use crate::error::{CliError, CliResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use streamwatch_detector::DetectorConfig;
use streamwatch_source::SyntheticConfig;
use tracing::{debug, warn};

/// Effective configuration: file values, then command-line overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct StreamwatchConfig {
    /// Detector parameters
    pub detector: DetectorConfig,

    /// Synthetic source parameters (used by `simulate`)
    pub source: SyntheticConfig,
}

impl StreamwatchConfig {
    /// Load configuration from file.
    ///
    /// A missing file yields the defaults. An explicit path that does not
    /// exist is reported with a warning.
    pub fn load(path: Option<&Path>) -> CliResult<Self> {
        let config_path = match path {
            Some(p) => p.to_path_buf(),
            None => match Self::default_config_path() {
                Some(p) => p,
                None => return Ok(Self::default()),
            },
        };

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path)?;
            let config = Self::parse(&contents)?;
            debug!(path = %config_path.display(), "loaded configuration");
            Ok(config)
        } else {
            if path.is_some() {
                warn!(path = %config_path.display(), "config file not found, using defaults");
            }
            Ok(Self::default())
        }
    }

    /// Parse TOML configuration text.
    pub fn parse(contents: &str) -> CliResult<Self> {
        toml::from_str(contents).map_err(|e| CliError::Config(e.to_string()))
    }

    /// Render as TOML.
    pub fn to_toml(&self) -> CliResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Get the default configuration file path
    fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("streamwatch").join("config.toml"))
    }
}
