use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_DATABASE_BUSY_TIMEOUT_SECS,
    DEFAULT_DATABASE_FILENAME, DEFAULT_DATABASE_MAX_CONNECTIONS, MAX_DATABASE_BUSY_TIMEOUT_SECS,
    MAX_DATABASE_MAX_CONNECTIONS, MIN_DATABASE_MAX_CONNECTIONS,
};

use std::path::Path;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Database file, relative to the config directory
    pub path: String,
    pub max_connections: u32,
    pub busy_timeout_secs: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: String::from(DEFAULT_DATABASE_FILENAME),
            max_connections: DEFAULT_DATABASE_MAX_CONNECTIONS,
            busy_timeout_secs: DEFAULT_DATABASE_BUSY_TIMEOUT_SECS,
        }
    }
}

impl DatabaseConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        // Keep the database inside the config dir
        if self.path.is_empty() || Path::new(&self.path).is_absolute() || self.path.contains("..")
        {
            return Err(ConfigError::invalid(
                "database.path",
                "must be a non-empty relative path and cannot contain '..'",
            ));
        }

        if self.max_connections < MIN_DATABASE_MAX_CONNECTIONS
            || self.max_connections > MAX_DATABASE_MAX_CONNECTIONS
        {
            return Err(ConfigError::invalid(
                "database.max_connections",
                format!(
                    "must be {}-{}, got {}",
                    MIN_DATABASE_MAX_CONNECTIONS, MAX_DATABASE_MAX_CONNECTIONS, self.max_connections
                ),
            ));
        }

        if self.busy_timeout_secs > MAX_DATABASE_BUSY_TIMEOUT_SECS {
            return Err(ConfigError::invalid(
                "database.busy_timeout_secs",
                format!(
                    "must be <= {}, got {}",
                    MAX_DATABASE_BUSY_TIMEOUT_SECS, self.busy_timeout_secs
                ),
            ));
        }

        Ok(())
    }
}
