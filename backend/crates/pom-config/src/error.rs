use std::panic::Location;
use std::path::PathBuf;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error as ThisError;

#[derive(ThisError, Debug)]
pub enum ConfigError {
    /// A setting failed validation. `key` is its dotted TOML path.
    #[error("Invalid {key}: {message} {location}")]
    Invalid {
        key: &'static str,
        message: String,
        location: ErrorLocation,
    },

    #[error("Cannot resolve config directory: {source} {location}")]
    ConfigDir {
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("IO error accessing {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parse error in {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl ConfigError {
    #[track_caller]
    pub fn invalid<S: Into<String>>(key: &'static str, message: S) -> Self {
        ConfigError::Invalid {
            key,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Dotted key of the offending setting, for validation failures
    pub fn key(&self) -> Option<&'static str> {
        match self {
            ConfigError::Invalid { key, .. } => Some(*key),
            _ => None,
        }
    }
}

pub type ConfigErrorResult<T> = StdResult<T, ConfigError>;
