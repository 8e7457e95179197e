//! Error types for st-core

use thiserror::Error;

/// Core error type for Stratum
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// C001: Invalid configuration value
    #[error("[C001] Invalid migrations config: {message}")]
    ConfigInvalid { message: String },

    /// C002: Version identifier could not be constructed
    #[error("[C002] Invalid migration version: {reason}")]
    InvalidVersion { reason: String },

    /// C003: Unknown migration direction
    #[error("[C003] Invalid migration direction '{value}': expected 'up' or 'down'")]
    InvalidDirection { value: String },
}

/// Result type alias for CoreError
pub type CoreResult<T> = Result<T, CoreError>;
