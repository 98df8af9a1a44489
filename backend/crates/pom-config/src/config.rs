use crate::{
    CONFIG_DIR_ENV, CONFIG_FILENAME, ConfigError, ConfigErrorResult, DEFAULT_CONFIG_DIR,
    DatabaseConfig, LoggingConfig, ServerConfig,
};

use std::panic::Location;
use std::path::{Path, PathBuf};
use std::time::Duration;

use error_location::ErrorLocation;
use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for POM_CONFIG_DIR env var, else use ./.pom/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load a `.env` file from the working directory, if any
    /// 4. Load config.toml if it exists, else use defaults
    /// 5. Apply POM_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        // Development convenience; a missing .env is not an error
        let _ = dotenvy::dotenv();

        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: POM_CONFIG_DIR env var > ./.pom/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir().map_err(|e| ConfigError::ConfigDir {
            source: e,
            location: ErrorLocation::from(Location::caller()),
        })?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.database.validate()?;
        self.logging.validate()?;

        Ok(())
    }

    /// Get absolute path to database file.
    pub fn database_path(&self) -> ConfigErrorResult<PathBuf> {
        let config_dir = Self::config_dir()?;
        Ok(config_dir.join(&self.database.path))
    }

    /// Get absolute path to the log file, if file logging is configured.
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        let Some(ref filename) = self.logging.file else {
            return Ok(None);
        };

        let config_dir = Self::config_dir()?;
        Ok(Some(config_dir.join(&self.logging.dir).join(filename)))
    }

    pub fn busy_timeout(&self) -> Duration {
        Duration::from_secs(self.database.busy_timeout_secs)
    }

    /// Get bind address as string.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary.
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  server: {}:{}", self.server.host, self.server.port);
        info!(
            "  database: {} (max {} connections, busy timeout {}s)",
            self.database.path, self.database.max_connections, self.database.busy_timeout_secs
        );
        info!(
            "  logging: {} (colored: {}, file: {})",
            *self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("stdout")
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("POM_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("POM_SERVER_PORT", &mut self.server.port);

        // Database
        Self::apply_env_string("POM_DATABASE_PATH", &mut self.database.path);
        Self::apply_env_parse(
            "POM_DATABASE_MAX_CONNECTIONS",
            &mut self.database.max_connections,
        );
        Self::apply_env_parse(
            "POM_DATABASE_BUSY_TIMEOUT_SECS",
            &mut self.database.busy_timeout_secs,
        );

        // Logging
        Self::apply_env_parse("POM_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("POM_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("POM_LOG_FILE", &mut self.logging.file);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
