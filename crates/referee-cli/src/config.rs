//! Configuration file loading for the referee CLI.
//!
//! Settings come from `referee.toml` in the current directory unless another
//! path is given. Every field has a default, so a missing file is not an
//! error.

use referee_core::LayoutError;
use referee_engine::Game;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur when loading or applying configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse the configuration file as valid TOML.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
    /// The configured start layout could not be parsed.
    #[error("Invalid start layout: {0}")]
    LayoutError(#[from] LayoutError),
}

/// Main CLI configuration.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct RefereeConfig {
    /// Log level for the tracing subscriber ("error" through "trace").
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Start layout, e.g. "4k3/8/8/8/8/8/8/4K3 w".
    /// Defaults to the standard setup if not specified.
    #[serde(default)]
    pub layout: Option<String>,
    /// Print file and rank labels around the board.
    #[serde(default = "default_coordinates")]
    pub coordinates: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_coordinates() -> bool {
    true
}

impl Default for RefereeConfig {
    fn default() -> Self {
        RefereeConfig {
            log_level: default_log_level(),
            layout: None,
            coordinates: default_coordinates(),
        }
    }
}

impl RefereeConfig {
    /// Loads the configuration from `path`.
    ///
    /// Returns the default configuration if the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadError`] if the file exists but cannot be read,
    /// or [`ConfigError::ParseError`] if the file contains invalid TOML.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Ok(toml::from_str(&content)?)
        } else {
            Ok(Self::default())
        }
    }

    /// Returns the default configuration path, `referee.toml` in the
    /// current working directory.
    pub fn default_path() -> PathBuf {
        PathBuf::from("referee.toml")
    }

    /// Builds a new game from the configured start layout.
    pub fn new_game(&self) -> Result<Game, ConfigError> {
        match &self.layout {
            Some(layout) => Ok(Game::from_layout(layout)?),
            None => Ok(Game::new()),
        }
    }
}
