//! Error types for shiftdraft.

use thiserror::Error;

/// Errors that can occur in shiftdraft operations.
#[derive(Error, Debug)]
pub enum DraftError {
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    #[error("Storage quota exceeded: slot '{slot}' needs {needed} bytes, quota is {quota}")]
    QuotaExceeded {
        slot: String,
        needed: usize,
        quota: usize,
    },

    #[error("Malformed data in slot '{slot}': {reason}")]
    MalformedStoredData { slot: String, reason: String },

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Invalid storage slot name '{0}'")]
    InvalidSlot(String),

    #[error("Invalid draft key '{0}'")]
    InvalidKey(String),

    #[error("Invalid time '{0}'. Expected HH:MM")]
    InvalidTime(String),

    #[error("Draft '{key}' is not a shift edit: {reason}")]
    InvalidDraft { key: String, reason: String },

    #[error("Year {0} is outside the supported calendar range")]
    YearOutOfRange(i64),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for shiftdraft operations.
pub type DraftResult<T> = Result<T, DraftError>;
