//! Domain error types

use thiserror::Error;

/// Domain-level errors that can occur while building requests.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The request path is empty or absolute.
    #[error("invalid request path: {0}")]
    InvalidPath(String),

    /// The request body could not be encoded as JSON, or was attached to
    /// a method that sends none.
    #[error("invalid body: {0}")]
    InvalidBody(String),

    /// A status value is not part of the dashboard vocabulary.
    #[error("unknown status value: {0}")]
    UnknownStatus(String),
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
