//! TOML-based configuration.
//!
//! Supports an optional config file (portal.toml); every field has a
//! default, so a missing file means default settings.
//!
//! Example configuration:
//! ```toml
//! default_domain = "procurement"
//! dialect = "postgres"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::model::Domain;
use crate::sql::Dialect;

/// Error type for settings.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("Config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Portal configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    /// Domain preselected in UIs and CLI.
    pub default_domain: Domain,

    /// Dialect the display SQL is rendered in.
    pub dialect: Dialect,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_domain: Domain::Sales,
            dialect: Dialect::Postgres,
        }
    }
}

impl Settings {
    /// Default config file path, relative to the working directory.
    pub fn default_path() -> PathBuf {
        PathBuf::from("portal.toml")
    }

    /// Load settings from a TOML file.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        if !path.exists() {
            return Err(SettingsError::FileNotFound(path.to_path_buf()));
        }
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load settings from the default path, falling back to defaults when no
    /// config file exists.
    pub fn load_or_default() -> Result<Self, SettingsError> {
        let path = Self::default_path();
        if path.exists() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }
}
