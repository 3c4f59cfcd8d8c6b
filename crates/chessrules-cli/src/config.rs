//! Configuration file loading for the command-line front end.

use chessrules::{decode, FenError, FenParser};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur when loading or parsing configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse the configuration file as valid TOML.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
    /// The configured start position is not valid FEN.
    #[error("Invalid start position: {0}")]
    InvalidStartFen(#[from] FenError),
}

/// Settings for an interactive session.
///
/// Every field has a default, so a missing file and an empty file behave the
/// same way.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct CliConfig {
    /// Position the session starts from.
    #[serde(default = "default_start_fen")]
    pub start_fen: String,
    /// Draw pieces with Unicode chess glyphs.
    #[serde(default = "default_unicode")]
    pub unicode: bool,
    /// Log filter used when `RUST_LOG` is not set (e.g. "debug").
    #[serde(default)]
    pub log_level: Option<String>,
}

fn default_start_fen() -> String {
    FenParser::STARTPOS.to_string()
}

fn default_unicode() -> bool {
    true
}

impl Default for CliConfig {
    fn default() -> Self {
        CliConfig {
            start_fen: default_start_fen(),
            unicode: default_unicode(),
            log_level: None,
        }
    }
}

impl CliConfig {
    /// Loads the configuration from `path`.
    ///
    /// Returns the defaults if the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadError`] if the file exists but cannot be read,
    /// [`ConfigError::ParseError`] if it contains invalid TOML, or
    /// [`ConfigError::InvalidStartFen`] if `start_fen` does not decode.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parses the configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: CliConfig = toml::from_str(content)?;
        decode(&config.start_fen)?;
        Ok(config)
    }

    /// Returns the default configuration path, `chessrules.toml` in the
    /// current working directory.
    pub fn default_path() -> PathBuf {
        PathBuf::from("chessrules.toml")
    }
}
