//! Configuration loading
//!
//! Settings live in `~/.config/wordle-game/config.toml` (or the platform
//! equivalent). Every field is optional; a missing file means defaults.

use crate::core::DEFAULT_LETTER_LIMIT;
use crate::game::{DEFAULT_EPOCH, DEFAULT_ROWS};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub game: GameConfig,
    pub display: DisplayConfig,
    pub share: ShareConfig,
}

/// Rules of the game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Guesses allowed per game
    pub rows: usize,
    /// Letters per word
    pub letter_limit: usize,
    /// Day zero of the word-of-the-day sequence
    pub epoch: NaiveDate,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            letter_limit: DEFAULT_LETTER_LIMIT,
            epoch: DEFAULT_EPOCH,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Show the hidden word while playing
    pub show_debug_info: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShareConfig {
    /// Base URL for generated links
    pub origin: String,
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            origin: "https://wordle.example".to_string(),
        }
    }
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Falls back to the current directory if the platform has no config dir.
    #[must_use]
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("wordle-game").join("config.toml")
    }

    /// Loads configuration from the default config file.
    ///
    /// # Errors
    /// Returns `ConfigError` if the file exists but cannot be read, parsed or validated.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`, using defaults if it does not exist.
    ///
    /// # Errors
    /// Returns `ConfigError` if the file exists but cannot be read, parsed or validated.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    /// Returns `ConfigError::ValidationError` if rows or letter limit is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.game.rows == 0 {
            return Err(ConfigError::ValidationError {
                message: "game.rows must be at least 1".to_string(),
            });
        }
        if self.game.letter_limit == 0 {
            return Err(ConfigError::ValidationError {
                message: "game.letter_limit must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}
