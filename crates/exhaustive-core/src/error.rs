//! Error types for exhaustive searches

use thiserror::Error;

/// Main error type for search operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// Caller-supplied input violates a precondition
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Search was cancelled by a termination condition before completion
    #[error("Search was cancelled")]
    Cancelled,

    /// Error in search configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

impl SearchError {
    /// Shorthand for building an [`SearchError::InvalidInput`].
    pub fn invalid_input(message: impl Into<String>) -> Self {
        SearchError::InvalidInput(message.into())
    }
}

/// Result type alias for search operations
pub type Result<T> = std::result::Result<T, SearchError>;
