//! Configuration file support.
//!
//! Settings are read from a TOML file, by default
//! `$XDG_CONFIG_HOME/tabcalc/config.toml`. A missing default file is not an
//! error; every setting has a default.
//!
//! ```toml
//! [logging]
//! level = "debug"
//!
//! [[units]]
//! id = "kg"
//! label = "Kilogram"
//! rate = 1
//!
//! [[units]]
//! id = "g"
//! label = "Gram"
//! rate = 1000
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::calculator::{Unit, UnitTable, UnitTableError};

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid unit table: {0}")]
    Units(#[from] UnitTableError),
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub logging: LoggingConfig,
    /// Conversion units. Empty means the built-in mass table.
    pub units: Vec<Unit>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive such as `warn` or `tabcalc=debug`.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

impl Config {
    /// Default location of the config file.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("tabcalc").join("config.toml"))
    }

    /// Parse configuration from TOML text and validate it.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.unit_table()?;
        Ok(config)
    }

    /// Load configuration from a file that must exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Load from an explicit path, or from the default path if it exists.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = path {
            return Self::load(path);
        }

        match Self::default_path() {
            Some(path) if path.is_file() => Self::load(&path),
            _ => Ok(Self::default()),
        }
    }

    /// The unit table to convert with.
    pub fn unit_table(&self) -> Result<UnitTable, ConfigError> {
        if self.units.is_empty() {
            return Ok(UnitTable::default());
        }
        Ok(UnitTable::new(self.units.clone())?)
    }
}
