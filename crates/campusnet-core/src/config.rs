//! Planner configuration for campusnet
//!
//! Read from `--config <path>` when given, otherwise from
//! `~/.config/campusnet/config.toml` (or `$CAMPUSNET_CONFIG_DIR/config.toml`).
//! A missing file means defaults.

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{CampusError, Result};

pub use types::{Config, OutputConfig, WeightKind};

const CONFIG_DIR: &str = "campusnet";
const CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV_VAR: &str = "CAMPUSNET_CONFIG_DIR";

impl Config {
    /// Default location of the configuration file
    pub fn default_path() -> Result<PathBuf> {
        // Allow environment variable override for testing
        let config_dir = if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
            PathBuf::from(env_dir)
        } else {
            dirs::config_dir()
                .ok_or_else(|| {
                    CampusError::Other("unable to determine config directory".to_string())
                })?
                .join(CONFIG_DIR)
        };

        Ok(config_dir.join(CONFIG_FILE))
    }

    /// Load configuration from an explicit path, or the default location.
    ///
    /// An explicit path must exist; the default location may be absent.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load_from(path),
            None => {
                let path = match Self::default_path() {
                    Ok(path) => path,
                    Err(e) => {
                        tracing::debug!(error = %e, "no config directory, using defaults");
                        return Ok(Self::default());
                    }
                };
                if !path.exists() {
                    return Ok(Self::default());
                }
                Self::load_from(&path)
            }
        }
    }

    /// Load configuration from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            CampusError::Other(format!(
                "failed to read config from {}: {}",
                path.display(),
                e
            ))
        })?;

        let config: Config = toml::from_str(&content)?;
        tracing::debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }
}
