//! Execute Request Use Case
//!
//! Wraps the `HttpClient` port so that every call against the dashboard
//! ends in a [`CallOutcome`]: the parsed JSON payload when the expected
//! status came back with a JSON body, or a [`CallFailure`] describing what
//! went wrong. Nothing escapes as a panic.

use std::sync::Arc;

use probe_domain::{ApiRequest, DomainError};
use serde_json::Value;
use thiserror::Error;

use crate::ports::{HttpClient, HttpClientError};

/// Number of body characters quoted in failure messages.
pub const EXCERPT_CHARS: usize = 100;

/// Result type for a wrapped call.
pub type CallOutcome = Result<Value, CallFailure>;

/// Why a wrapped call did not produce a payload.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CallFailure {
    /// The request never got a response.
    #[error("Request failed: {0}")]
    Transport(#[from] HttpClientError),

    /// A response arrived with a different status than expected.
    #[error("Expected status {expected}, got {actual}: {excerpt}")]
    UnexpectedStatus {
        /// Expected status code.
        expected: u16,
        /// Received status code.
        actual: u16,
        /// Start of the response body.
        excerpt: String,
    },

    /// The expected status arrived but the body is not JSON.
    #[error("Invalid JSON response: {excerpt}")]
    InvalidJson {
        /// Start of the response body.
        excerpt: String,
    },

    /// The request could not be built.
    #[error("Invalid request: {0}")]
    InvalidRequest(#[from] DomainError),
}

/// Use case for executing one dashboard call.
pub struct ExecuteRequest<C: HttpClient> {
    client: Arc<C>,
}

impl<C: HttpClient> ExecuteRequest<C> {
    /// Creates a new `ExecuteRequest` use case with the given HTTP client.
    pub const fn new(client: Arc<C>) -> Self {
        Self { client }
    }

    /// Executes the request and checks status and body.
    ///
    /// # Errors
    ///
    /// Returns `CallFailure` when the request cannot be built or sent, when
    /// the status differs from `request.expected_status`, or when the body
    /// is not valid JSON.
    pub async fn execute(&self, request: &ApiRequest) -> CallOutcome {
        request.validate()?;

        let response = self.client.execute(request).await?;

        if response.status != request.expected_status {
            return Err(CallFailure::UnexpectedStatus {
                expected: request.expected_status,
                actual: response.status,
                excerpt: response.excerpt(EXCERPT_CHARS),
            });
        }

        response.parse_json().map_err(|_| CallFailure::InvalidJson {
            excerpt: response.excerpt(EXCERPT_CHARS),
        })
    }
}
