//! Error types for the `bl` front end.

use std::path::PathBuf;

use booklend_lib::LendingError;
use thiserror::Error;

/// Errors raised outside the lending core.
#[derive(Error, Debug)]
pub enum AppError {
    /// Catalog or ledger refused an operation.
    #[error(transparent)]
    Lending(#[from] LendingError),

    // === Configuration Errors ===
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Explicit config file does not exist.
    #[error("Config file not found: {0}")]
    ConfigNotFound(PathBuf),

    /// YAML config parse error.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // === I/O Errors ===
    /// Terminal I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Input stream ended while a prompt was waiting.
    #[error("Input closed")]
    InputClosed,
}

impl AppError {
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

/// Result type using `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
