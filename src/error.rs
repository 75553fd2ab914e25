//! Error types for the cache and gateway layers
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Storage Error Enum ==
/// Failure while writing to the persistence layer.
///
/// Reads never produce this error: a corrupt or missing value is a miss.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Backing file could not be written
    #[error("Storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// Value could not be serialized for persistence
    #[error("Storage serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

// == Transport Error Enum ==
/// Failure of a single HTTP exchange with the remote API.
#[derive(Error, Debug)]
pub enum TransportError {
    /// Request could not be sent or the connection broke
    #[error("Request to {url} failed: {message}")]
    Request { url: String, message: String },

    /// Response body was not the JSON we expected
    #[error("Invalid response body from {url}: {message}")]
    InvalidBody { url: String, message: String },
}

// == Gateway Error Enum ==
/// Errors surfaced to callers of the gateway.
#[derive(Error, Debug)]
pub enum GatewayError {
    /// Label is not part of the generation table
    #[error("Unknown generation: {0}")]
    UnknownGeneration(String),

    /// Roster request failed or returned a non-success status
    #[error("Failed to load generation {label}: {reason}")]
    GenerationFetch { label: String, reason: String },
}

impl GatewayError {
    pub(crate) fn generation_fetch(label: &str, reason: impl ToString) -> Self {
        GatewayError::GenerationFetch {
            label: label.to_string(),
            reason: reason.to_string(),
        }
    }
}

// == Result Type Alias ==
/// Convenience Result type for gateway operations.
pub type Result<T> = std::result::Result<T, GatewayError>;
