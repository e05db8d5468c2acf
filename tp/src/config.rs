//! Tape planner configuration types and loading

use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::render::OutputFormat;
use crate::tapes::InputLimits;

/// Main configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[serde(rename = "log-level", skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,

    /// How plans are printed
    pub output: OutputConfig,

    /// Bounds applied to entered tape lengths
    pub input: InputLimits,
}

/// Project-local config file, looked up in the working directory
pub const LOCAL_CONFIG: &str = ".tapeplanner.yml";

impl Config {
    /// Load configuration
    ///
    /// An explicit path must load. Otherwise the first readable file among
    /// [`Config::search_paths`] wins, falling back to defaults.
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        if let Some(path) = config_path {
            return Self::load_from_file(path).context(format!("Failed to load config from {}", path.display()));
        }

        for path in Self::search_paths().into_iter().filter(|path| path.exists()) {
            match Self::load_from_file(&path) {
                Ok(config) => return Ok(config),
                Err(e) => warn!(path = %path.display(), error = %e, "Config::load: skipping unreadable config"),
            }
        }

        info!("Config::load: no config file found, using defaults");
        Ok(Self::default())
    }

    /// Read only the log level, before logging is set up
    ///
    /// Errors are swallowed; the full load reports them once logging works.
    pub fn load_log_level(config_path: Option<&PathBuf>) -> Option<String> {
        Self::load(config_path).ok().and_then(|config| config.log_level)
    }

    /// Implicit config locations, most specific first:
    /// `./.tapeplanner.yml`, then `<config_dir>/tapeplanner/tapeplanner.yml`
    pub fn search_paths() -> Vec<PathBuf> {
        let user = dirs::config_dir().map(|dir| dir.join("tapeplanner").join("tapeplanner.yml"));
        std::iter::once(PathBuf::from(LOCAL_CONFIG)).chain(user).collect()
    }

    fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).context("Failed to read config file")?;
        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;
        debug!(path = %path.display(), ?config, "Config::load_from_file: loaded");
        Ok(config)
    }
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub format: OutputFormat,

    /// Color Sort 1 / Sort 2 segments in text output
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            color: true,
        }
    }
}
