//! Error types for wayfare-core

use thiserror::Error;

/// Result type alias using wayfare-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in wayfare-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// Field-level validation failure; the message is user-facing
    #[error("{0}")]
    Validation(String),

    /// Guest email already present in the invite list
    #[error("{0} has already been invited")]
    DuplicateGuest(String),

    /// Opaque remote service failure
    #[error("Remote service error: {0}")]
    Remote(String),

    /// Local persistence error
    #[error("Storage error: {0}")]
    Storage(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
