//! CLI error types.

use std::path::PathBuf;

use immo_storage::StorageError;
use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration file missing or malformed.
    #[error("Configuration error in {path}: {message}")]
    Config {
        /// File that failed to load.
        path: PathBuf,
        /// What went wrong.
        message: String,
    },

    /// Storage failure propagated in strict mode or by a write command.
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// A dataset already exists and `--force` was not given.
    #[error("A dataset is already stored under '{key}'. Use --force to overwrite.")]
    AlreadySeeded {
        /// Storage key.
        key: String,
    },

    /// Validation found errors.
    #[error("{errors} validation error(s) found")]
    ValidationFailed {
        /// Number of error-severity issues.
        errors: usize,
    },
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
