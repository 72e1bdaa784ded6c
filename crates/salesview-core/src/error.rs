//! Error types for salesview-core

use thiserror::Error;

/// Failure reported by the storage collaborator
///
/// Reads are never retried here; a failed read surfaces to the caller
/// with the collaborator's message string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("{message}")]
    Backend { message: String },
}

impl StoreError {
    /// Wrap a backend failure message
    pub fn backend(message: impl Into<String>) -> Self {
        StoreError::Backend {
            message: message.into(),
        }
    }
}

/// Core-level error type
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Storage error: {0}")]
    Store(#[from] StoreError),
}

/// Result type with CoreError
pub type CoreResult<T> = Result<T, CoreError>;
