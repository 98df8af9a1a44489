use std::path::PathBuf;

use thiserror::Error;

/// Startup and teardown failures
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Config error: {0}")]
    Config(#[from] pom_config::ConfigError),

    #[error("Store error: {0}")]
    Store(#[from] pom_db::DbError),

    #[error("Failed to prepare {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Logger error: {message}")]
    Logger { message: String },
}

pub type Result<T> = std::result::Result<T, ServerError>;
