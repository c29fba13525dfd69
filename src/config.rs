//! User configuration loaded from TOML.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Log filter used when `RUST_LOG` is unset, e.g. `"debug"`.
    pub log_level: Option<String>,
    pub display: DisplayConfig,
}

#[derive(Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DisplayConfig {
    /// Prompt shown by the interactive session.
    pub prompt: String,
    /// Also print the string handed to the evaluator.
    pub show_evaluable: bool,
    /// Print calculations as JSON objects.
    pub json: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            prompt: "> ".to_string(),
            show_evaluable: false,
            json: false,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config at {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse config at {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl Config {
    /// Load the configuration.
    ///
    /// An explicit path must exist. Otherwise the file in the user config
    /// directory is used when present, and defaults apply when it is not.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => match Self::default_path() {
                Some(path) if path.exists() => path,
                _ => return Ok(Self::default()),
            },
        };

        let content = std::fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;

        toml::from_str(&content).map_err(|source| ConfigError::Parse { path, source })
    }

    /// `<config dir>/calcpad/config.toml`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("calcpad").join("config.toml"))
    }
}
