//! Error types for Keepsake

use thiserror::Error;

/// Main error type for Keepsake
#[derive(Error, Debug)]
pub enum KeepsakeError {
    // ============ Memento Errors ============
    #[error("No memento stored under key {0:?}")]
    NotFound(String),

    #[error("Memento decoding failed: {0}")]
    DecodingFailure(String),

    #[error("State encoding failed: {0}")]
    EncodingFailure(String),

    #[error("Invalid key: {0}")]
    InvalidKey(String),

    // ============ Storage Errors ============
    #[error("Storage error: {0}")]
    StorageError(String),

    // ============ Configuration Errors ============
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl KeepsakeError {
    /// True when no memento exists under the requested key
    pub fn is_not_found(&self) -> bool {
        matches!(self, KeepsakeError::NotFound(_))
    }

    /// True when a stored memento is present but unreadable
    pub fn is_corrupt(&self) -> bool {
        matches!(self, KeepsakeError::DecodingFailure(_))
    }
}

/// Result type for Keepsake operations
pub type KeepsakeResult<T> = Result<T, KeepsakeError>;
