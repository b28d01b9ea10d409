//! Configuration for graphwalk
//!
//! Looked up as `graphwalk.toml` in the working directory, then as
//! `config.toml` in the user config directory (`~/.config/graphwalk/`).

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{GraphError, Result};

pub use types::{Config, ReportConfig, RunConfig};

/// File name looked up in the working directory
pub const LOCAL_CONFIG_FILE: &str = "graphwalk.toml";

const CONFIG_DIR: &str = "graphwalk";
const CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV_VAR: &str = "GRAPHWALK_CONFIG_DIR";

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            GraphError::Other(format!(
                "failed to read config from {}: {}",
                path.display(),
                e
            ))
        })?;
        let config: Config = toml::from_str(&content)?;

        if config.run.source == 0 {
            crate::bail_invalid!("run.source", "0 (vertices are numbered from 1)");
        }
        if config.run.algorithms.is_empty() {
            crate::bail_invalid!("run.algorithms", "empty list");
        }
        for (i, algorithm) in config.run.algorithms.iter().enumerate() {
            if config.run.algorithms[..i].contains(algorithm) {
                crate::bail_invalid!("run.algorithms", format!("{} listed more than once", algorithm));
            }
        }

        tracing::debug!(path = %path.display(), "config_loaded");
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| GraphError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Resolve configuration for a run started in `dir`.
    ///
    /// Order: `dir/graphwalk.toml`, then the user config file, then defaults.
    pub fn discover(dir: &Path) -> Result<Self> {
        let local = dir.join(LOCAL_CONFIG_FILE);
        if local.is_file() {
            return Self::load(&local);
        }

        if let Some(user) = Self::user_config_path() {
            if user.is_file() {
                return Self::load(&user);
            }
        }

        tracing::trace!("no config file found, using defaults");
        Ok(Self::default())
    }

    /// Location of the per-user config file, if a config directory exists
    pub fn user_config_path() -> Option<PathBuf> {
        // Allow environment variable override for testing
        let config_dir = match std::env::var(CONFIG_DIR_ENV_VAR) {
            Ok(env_dir) => PathBuf::from(env_dir),
            Err(_) => dirs::config_dir()?.join(CONFIG_DIR),
        };
        Some(config_dir.join(CONFIG_FILE))
    }
}
