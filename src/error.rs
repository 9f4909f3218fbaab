//! Error types for the trivia service
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using TriviaError
pub type Result<T> = std::result::Result<T, TriviaError>;

/// Unified error type for trivia operations
#[derive(Debug, Error)]
pub enum TriviaError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Question Validation Errors (fatal at load time)
    // -------------------------------------------------------------------------
    #[error("Question field '{0}' cannot be empty")]
    EmptyField(&'static str),

    #[error("Question field '{0}' was never set")]
    MissingField(&'static str),

    #[error("Id can't be less than 0, got {0}")]
    NegativeId(i64),

    #[error("Correct answer must be 'A', 'B', 'C' or 'D', got '{0}'")]
    InvalidChoice(String),

    #[error("Duplicate question id {0}")]
    DuplicateId(u64),

    // -------------------------------------------------------------------------
    // Lookup Errors
    // -------------------------------------------------------------------------
    #[error("Question {0} not found")]
    NotFound(u64),

    #[error("Malformed question identifier: '{0}'")]
    MalformedRequest(String),

    #[error("No questions loaded")]
    EmptyStore,

    // -------------------------------------------------------------------------
    // Serialization Errors
    // -------------------------------------------------------------------------
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    // -------------------------------------------------------------------------
    // Network Errors
    // -------------------------------------------------------------------------
    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] axum::http::header::InvalidHeaderValue),
}

impl TriviaError {
    /// True for errors caused by a client request rather than by the server
    pub fn is_client_error(&self) -> bool {
        matches!(self, TriviaError::NotFound(_) | TriviaError::MalformedRequest(_))
    }
}
