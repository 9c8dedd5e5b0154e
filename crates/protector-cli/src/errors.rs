//! CLI error types for structured error handling.
//!
//! This module provides typed errors that map to specific exit codes,
//! enabling consistent error handling across the CLI.

use std::fmt;

use protector_core::ProtectorError;

/// CLI-specific errors with associated exit codes.
#[derive(Debug)]
pub enum CliError {
    /// Resource not found (input file, password file, config)
    NotFound { message: String, hint: String },

    /// Decryption failed. The message never says why.
    AuthFailed {
        message: String,
        hint: Option<String>,
    },

    /// Invalid user input
    InvalidInput(String),

    /// Payload could not be read or produced
    PayloadUnreadable(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::NotFound { message, .. } => write!(f, "{}", message),
            CliError::AuthFailed { message, .. } => write!(f, "{}", message),
            CliError::InvalidInput(message) => write!(f, "{}", message),
            CliError::PayloadUnreadable(message) => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for CliError {}

impl CliError {
    /// Create a NotFound error with message and hint.
    pub fn not_found(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::NotFound {
            message: message.into(),
            hint: hint.into(),
        }
    }

    /// Create an AuthFailed error with message and hint.
    pub fn auth_failed_with_hint(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::AuthFailed {
            message: message.into(),
            hint: Some(hint.into()),
        }
    }

    /// Create an InvalidInput error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        CliError::InvalidInput(message.into())
    }

    /// Hint shown under the error message, if any.
    pub fn hint(&self) -> Option<&str> {
        match self {
            CliError::NotFound { hint, .. } => Some(hint),
            CliError::AuthFailed { hint, .. } => hint.as_deref(),
            CliError::InvalidInput(_) | CliError::PayloadUnreadable(_) => None,
        }
    }

    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        use super::constants::exit_codes;
        match self {
            CliError::NotFound { .. } => exit_codes::NOT_FOUND,
            CliError::AuthFailed { .. } => exit_codes::AUTH_FAILED,
            CliError::InvalidInput(_) => exit_codes::INVALID_INPUT,
            CliError::PayloadUnreadable(_) => exit_codes::PAYLOAD_UNREADABLE,
        }
    }
}

impl From<ProtectorError> for CliError {
    fn from(err: ProtectorError) -> Self {
        match err {
            ProtectorError::InvalidInput(message) => CliError::InvalidInput(message),
            ProtectorError::Authentication => CliError::AuthFailed {
                message: "Unable to decrypt payload".to_string(),
                hint: None,
            },
            other => CliError::PayloadUnreadable(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::exit_codes;

    #[test]
    fn test_exit_codes() {
        assert_eq!(
            CliError::not_found("x", "y").exit_code(),
            exit_codes::NOT_FOUND
        );
        assert_eq!(
            CliError::invalid_input("x").exit_code(),
            exit_codes::INVALID_INPUT
        );
        assert_eq!(
            CliError::auth_failed_with_hint("x", "y").exit_code(),
            exit_codes::AUTH_FAILED
        );
    }

    #[test]
    fn test_from_protector_error() {
        let err = CliError::from(ProtectorError::InvalidInput("empty".into()));
        assert!(matches!(err, CliError::InvalidInput(_)));

        let err = CliError::from(ProtectorError::Authentication);
        assert_eq!(err.to_string(), "Unable to decrypt payload");

        let err = CliError::from(ProtectorError::Crypto("rng".into()));
        assert_eq!(err.exit_code(), exit_codes::PAYLOAD_UNREADABLE);
    }

    #[test]
    fn test_hint() {
        assert_eq!(CliError::not_found("x", "do y").hint(), Some("do y"));
        assert_eq!(CliError::invalid_input("x").hint(), None);
    }
}
