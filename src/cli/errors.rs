//! CLI-specific error types

use std::path::PathBuf;

use thiserror::Error;

use crate::config::ConfigError;
use crate::db::DbError;

/// Result type for CLI commands
pub type CliResult<T> = Result<T, CliError>;

/// CLI error
#[derive(Debug, Error)]
pub enum CliError {
    #[error("config file already exists: {0}")]
    AlreadyInitialized(PathBuf),

    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("cannot write config file: {0}")]
    WriteConfig(#[from] serde_json::Error),

    #[error("database error: {0}")]
    Database(#[from] DbError),

    #[error("{0}")]
    Io(#[from] std::io::Error),
}
