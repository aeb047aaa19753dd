//! HTTP Client port

use std::future::Future;

use probe_domain::{ApiRequest, ResponseSpec};
use thiserror::Error;

/// Transport-level failures.
///
/// These cover everything that prevents a status code from being received.
/// A received response, whatever its status, is never an `HttpClientError`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HttpClientError {
    /// The target URL could not be built.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// No response arrived within the timeout.
    #[error("timed out after {timeout_ms}ms")]
    Timeout {
        /// Timeout that elapsed, in milliseconds.
        timeout_ms: u64,
    },

    /// The host name could not be resolved.
    #[error("DNS resolution failed for {host}: {message}")]
    DnsError {
        /// Host that failed to resolve.
        host: String,
        /// Underlying error message.
        message: String,
    },

    /// The remote end refused the connection.
    #[error("connection refused by {host}:{port}")]
    ConnectionRefused {
        /// Target host.
        host: String,
        /// Target port.
        port: u16,
    },

    /// The connection failed for another reason.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// The redirect limit was exceeded.
    #[error("too many redirects (max {max})")]
    TooManyRedirects {
        /// Redirect limit.
        max: usize,
    },

    /// Any other transport error.
    #[error("{0}")]
    Other(String),
}

/// Port for executing HTTP requests against the dashboard API.
///
/// Implementations resolve the request path against their configured base
/// URL and apply their own timeout. The returned future yields the response
/// for any status code; only transport problems are errors.
pub trait HttpClient: Send + Sync {
    /// Executes `request` and returns the raw response.
    ///
    /// # Errors
    ///
    /// Returns an error if no response was received.
    fn execute(
        &self,
        request: &ApiRequest,
    ) -> impl Future<Output = Result<ResponseSpec, HttpClientError>> + Send;
}
