//! Error types for the chat core

use thiserror::Error;

/// Main error type for the chat core and its reply-service collaborators
#[derive(Error, Debug)]
pub enum ChatError {
    /// Transport-level failure reaching the reply service
    #[error("connection error: {0}")]
    Connection(String),

    /// Reply service answered with a non-success HTTP status
    #[error("reply service returned HTTP {status}")]
    Http {
        /// Status code of the failed response
        status: u16,
    },

    /// Configured endpoint could not be parsed into a usable URL
    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(String),
}

/// Result type alias using `ChatError`
pub type Result<T> = std::result::Result<T, ChatError>;
