//! Error types for the campus chatbot.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use thiserror::Error;

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Errors that can occur when reading or writing the Q&A store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Filesystem access failed
    #[error("Store I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Store contents are not valid JSON
    #[error("Store JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors surfaced by the chat and admin operations.
#[derive(Error, Debug)]
pub enum ChatError {
    /// Message exceeds the configured maximum length
    #[error("Message too long ({length} characters, max {max})")]
    MessageTooLong { length: usize, max: usize },

    /// Request body missing or not the expected JSON
    #[error("Invalid request body: {0}")]
    BadRequest(String),

    /// Submitted Q&A pair failed validation
    #[error("Invalid Q&A pair: {0}")]
    InvalidPair(String),

    /// Question already exists in the corpus
    #[error("Question already exists: {0}")]
    DuplicateQuestion(String),

    /// Admin token missing or wrong
    #[error("Unauthorized")]
    Unauthorized,

    /// Underlying storage failed
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with StoreError
pub type StoreResult<T> = Result<T, StoreError>;

/// Convenience type alias for Results with ChatError
pub type ChatResult<T> = Result<T, ChatError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ConfigError::InvalidValue {
            var: "CHATBOT_PORT".to_string(),
            reason: "Must be a number, got: abc".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid value for CHATBOT_PORT: Must be a number, got: abc"
        );

        let err = ChatError::MessageTooLong {
            length: 600,
            max: 500,
        };
        assert_eq!(err.to_string(), "Message too long (600 characters, max 500)");

        let err = ChatError::DuplicateQuestion("where is the library".to_string());
        assert!(err.to_string().contains("where is the library"));
    }

    #[test]
    fn test_store_error_is_transparent() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: ChatError = StoreError::from(io).into();
        assert!(err.to_string().starts_with("Store I/O error"));
    }
}
