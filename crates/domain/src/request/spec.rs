//! Request specification type

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{HttpMethod, QueryParam};
use crate::error::{DomainError, DomainResult};

/// Specification of one call against the dashboard API.
///
/// The path is relative to the configured base URL (for example
/// `merchants/42/kyc`). The expected status defaults to what the dashboard
/// answers for the method on success.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiRequest {
    /// HTTP method
    pub method: HttpMethod,
    /// Path relative to the base URL, without a leading slash
    pub path: String,
    /// Query parameters, in the order they are appended
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub query: Vec<QueryParam>,
    /// JSON body, sent for POST and PATCH
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<Value>,
    /// Status code that counts as success for this call
    pub expected_status: u16,
}

impl ApiRequest {
    /// Creates a request for the given method and path.
    #[must_use]
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into().trim_start_matches('/').to_string(),
            query: Vec::new(),
            body: None,
            expected_status: method.success_status(),
        }
    }

    /// Creates a GET request expecting 200.
    #[must_use]
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Get, path)
    }

    /// Creates a POST request expecting 201.
    #[must_use]
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Post, path)
    }

    /// Creates a PATCH request expecting 200.
    #[must_use]
    pub fn patch(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Patch, path)
    }

    /// Appends a query parameter (builder pattern).
    #[must_use]
    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push(QueryParam::new(key, value));
        self
    }

    /// Overrides the expected status code (builder pattern).
    #[must_use]
    pub const fn expecting(mut self, status: u16) -> Self {
        self.expected_status = status;
        self
    }

    /// Attaches a JSON body encoded from `body`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidBody` if `body` cannot be represented as JSON.
    pub fn with_json<T: Serialize>(mut self, body: &T) -> DomainResult<Self> {
        let value =
            serde_json::to_value(body).map_err(|e| DomainError::InvalidBody(e.to_string()))?;
        self.body = Some(value);
        Ok(self)
    }

    /// Checks that the request can be sent under a base URL.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidPath` for empty paths or paths that carry
    /// their own scheme, and `DomainError::InvalidBody` for a body on a
    /// method that sends none.
    pub fn validate(&self) -> DomainResult<()> {
        if self.path.trim().is_empty() {
            return Err(DomainError::InvalidPath("path is empty".to_string()));
        }
        if self.path.contains("://") {
            return Err(DomainError::InvalidPath(format!(
                "path must be relative: {}",
                self.path
            )));
        }
        if self.body.is_some() && !self.method.has_body() {
            return Err(DomainError::InvalidBody(format!(
                "{} requests carry no body",
                self.method
            )));
        }
        Ok(())
    }

    /// Returns the full URL for this request under `base_url`, without query.
    #[must_use]
    pub fn url_under(&self, base_url: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), self.path)
    }
}
