//! Error types for protector core operations.
//!
//! Errors are descriptive at the core level except for authentication
//! failures, which deliberately carry no detail. The CLI layer maps these to
//! exit codes and user-facing messages.

use thiserror::Error;

/// Result type alias for protector operations.
pub type Result<T> = std::result::Result<T, ProtectorError>;

/// Core error type for protector operations.
#[derive(Debug, Error)]
pub enum ProtectorError {
    /// Missing or malformed caller input (empty plaintext, empty password,
    /// bad salt or iteration count)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The transport string or payload record cannot be read
    #[error("Invalid payload format: {0}")]
    Format(String),

    /// Tag verification failed. Wrong password and tampered data are
    /// indistinguishable.
    #[error("Authentication failed")]
    Authentication,

    /// A cryptographic primitive failed for a reason unrelated to the input
    #[error("Encryption error: {0}")]
    Crypto(String),
}

impl From<serde_json::Error> for ProtectorError {
    fn from(err: serde_json::Error) -> Self {
        ProtectorError::Format(err.to_string())
    }
}

impl From<base64::DecodeError> for ProtectorError {
    fn from(err: base64::DecodeError) -> Self {
        ProtectorError::Format(err.to_string())
    }
}
