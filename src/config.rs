//! Native configuration
//!
//! Read from an optional JSON file; every field falls back to its default.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::DEFAULT_DATA_DIR;
use crate::storage::FileStore;

/// Errors that can occur when loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The document is not valid config JSON
    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),

    /// The config file exists but could not be read
    #[error("I/O error reading {path}: {error}")]
    Io {
        /// Path of the config file
        path: PathBuf,
        /// The underlying I/O error
        error: std::io::Error,
    },
}

/// Native settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory holding `highscore.dat`
    pub data_dir: PathBuf,
    /// Log filter used when `RUST_LOG` is unset
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Parse a config document
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a config file; a missing file yields the defaults
    ///
    /// Also returns whether the file existed.
    pub fn load(path: &Path) -> Result<(Self, bool), ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(json) => Ok((Self::from_json(&json)?, true)),
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
                Ok((Self::default(), false))
            }
            Err(error) => Err(ConfigError::Io {
                path: path.to_path_buf(),
                error,
            }),
        }
    }

    /// Store rooted at the configured data directory
    pub fn store(&self) -> FileStore {
        FileStore::new(&self.data_dir)
    }
}
