//! Error types for st-writer

use st_core::CoreError;
use thiserror::Error;

/// Errors raised while producing a migration SQL file
#[derive(Error, Debug)]
pub enum WriteError {
    /// W001: No destination path was given
    #[error("[W001] Destination file must be specified")]
    MissingDestination,

    /// W002: IO error with file path context
    #[error("[W002] Failed to write migration file '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    /// W003: Invalid core value (config, version, direction)
    #[error("[W003] {0}")]
    Core(#[from] CoreError),
}

/// Result type alias for WriteError
pub type WriteResult<T> = Result<T, WriteError>;
