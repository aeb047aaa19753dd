//! HTTP Client implementation using reqwest.
//!
//! This adapter implements the `HttpClient` port using the reqwest library.
//! Request paths are resolved against the configured base URL.

use std::future::Future;
use std::time::{Duration, Instant};

use probe_application::ports::{HttpClient, HttpClientError};
use probe_domain::{ApiRequest, HttpMethod, ResponseSpec};
use reqwest::{Client, Method, Url};

use crate::config::HarnessConfig;

const MAX_REDIRECTS: usize = 10;

/// HTTP client implementation using reqwest.
///
/// Wraps a `reqwest::Client` together with the base URL and timeout of the
/// run. Any status code is returned as a response; only transport failures
/// become errors.
pub struct ReqwestHttpClient {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl ReqwestHttpClient {
    /// Creates a client for the configured base URL.
    ///
    /// Redirects are followed up to 10 times and TLS certificates are
    /// verified.
    ///
    /// # Errors
    ///
    /// Returns an error if the client cannot be created.
    pub fn new(config: &HarnessConfig) -> Result<Self, HttpClientError> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
            .build()
            .map_err(|e| HttpClientError::Other(e.to_string()))?;

        Ok(Self::with_client(client, config))
    }

    /// Creates a client around a preconfigured reqwest client.
    #[must_use]
    pub fn with_client(client: Client, config: &HarnessConfig) -> Self {
        Self {
            client,
            base_url: config.base_url.clone(),
            timeout: config.timeout(),
        }
    }

    const fn to_reqwest_method(method: HttpMethod) -> Method {
        match method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
            HttpMethod::Patch => Method::PATCH,
        }
    }

    /// Full URL of `request`, query parameters included.
    fn build_url(&self, request: &ApiRequest) -> Result<Url, HttpClientError> {
        let raw = request.url_under(&self.base_url);
        let mut url =
            Url::parse(&raw).map_err(|e| HttpClientError::InvalidUrl(format!("{e}: {raw}")))?;
        if !request.query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for param in &request.query {
                let (key, value) = param.as_pair();
                pairs.append_pair(key, value);
            }
        }
        Ok(url)
    }

    /// Maps reqwest errors to `HttpClientError`.
    fn map_error(error: &reqwest::Error, timeout: Duration) -> HttpClientError {
        if error.is_timeout() {
            return HttpClientError::Timeout {
                timeout_ms: u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
            };
        }

        let host = || {
            error
                .url()
                .and_then(Url::host_str)
                .unwrap_or("unknown")
                .to_string()
        };

        if error.is_connect() {
            let message = error_chain(error);
            let lower = message.to_lowercase();
            if lower.contains("dns") || lower.contains("resolve") {
                return HttpClientError::DnsError {
                    host: host(),
                    message,
                };
            }
            if lower.contains("refused") {
                return HttpClientError::ConnectionRefused {
                    host: host(),
                    port: error
                        .url()
                        .and_then(Url::port_or_known_default)
                        .unwrap_or(80),
                };
            }
            return HttpClientError::ConnectionFailed(message);
        }

        if error.is_redirect() {
            return HttpClientError::TooManyRedirects { max: MAX_REDIRECTS };
        }

        HttpClientError::Other(error_chain(error))
    }
}

/// Joins an error with its sources, since reqwest keeps the useful
/// detail (refused, dns) in the innermost one.
fn error_chain(error: &(dyn std::error::Error + 'static)) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

impl HttpClient for ReqwestHttpClient {
    fn execute(
        &self,
        request: &ApiRequest,
    ) -> impl Future<Output = Result<ResponseSpec, HttpClientError>> + Send {
        let method = request.method;
        let url = self.build_url(request);
        let body = request.body.clone();
        let timeout = self.timeout;

        async move {
            let url = url?;
            tracing::debug!(%method, %url, "sending request");
            let start = Instant::now();

            let mut builder = self
                .client
                .request(Self::to_reqwest_method(method), url.clone())
                .timeout(timeout);
            if let Some(body) = &body {
                builder = builder.json(body);
            }

            let response = builder.send().await.map_err(|e| {
                let mapped = Self::map_error(&e, timeout);
                tracing::warn!(%method, %url, error = %mapped, "request failed");
                mapped
            })?;

            let status = response.status().as_u16();
            let bytes = response
                .bytes()
                .await
                .map_err(|e| HttpClientError::Other(format!("Failed to read body: {e}")))?;
            let response = ResponseSpec::new(status, &bytes, start.elapsed());

            tracing::debug!(
                %method,
                %url,
                status,
                elapsed_ms = response.duration.as_millis(),
                "response received"
            );
            Ok(response)
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use axum::extract::{Path, Query};
    use axum::http::StatusCode;
    use axum::routing::{get, patch};
    use axum::{Json, Router};
    use pretty_assertions::assert_eq;
    use serde_json::{Value, json};
    use std::collections::HashMap;
    use std::net::SocketAddr;
    use tokio::net::TcpListener;

    async fn serve(router: Router) -> SocketAddr {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        addr
    }

    fn client_for(addr: SocketAddr) -> ReqwestHttpClient {
        ReqwestHttpClient::new(&HarnessConfig::for_base_url(format!("http://{addr}/api"))).unwrap()
    }

    fn echo_router() -> Router {
        Router::new()
            .route(
                "/api/alerts",
                get(|Query(q): Query<HashMap<String, String>>| async move {
                    Json(json!({ "data": q }))
                }),
            )
            .route(
                "/api/alerts/{id}",
                patch(|Path(id): Path<String>, Json(body): Json<Value>| async move {
                    Json(json!({ "data": { "id": id, "received": body } }))
                }),
            )
    }

    #[test]
    fn test_to_reqwest_method() {
        assert_eq!(
            ReqwestHttpClient::to_reqwest_method(HttpMethod::Get),
            Method::GET
        );
        assert_eq!(
            ReqwestHttpClient::to_reqwest_method(HttpMethod::Post),
            Method::POST
        );
        assert_eq!(
            ReqwestHttpClient::to_reqwest_method(HttpMethod::Patch),
            Method::PATCH
        );
    }

    #[test]
    fn test_build_url_appends_path_and_query() {
        let client =
            ReqwestHttpClient::new(&HarnessConfig::for_base_url("http://dashboard.test/api/"))
                .unwrap();
        let request = ApiRequest::get("merchants")
            .with_query("kyc_status", "approved")
            .with_query("q", "a b");
        let url = client.build_url(&request).unwrap();
        assert_eq!(
            url.as_str(),
            "http://dashboard.test/api/merchants?kyc_status=approved&q=a+b"
        );
    }

    #[tokio::test]
    async fn test_query_reaches_server() {
        let client = client_for(serve(echo_router()).await);
        let request = ApiRequest::get("alerts").with_query("severity", "high");

        let response = client.execute(&request).await.unwrap();
        assert_eq!(response.status, 200);
        assert_eq!(
            response.parse_json().unwrap(),
            json!({ "data": { "severity": "high" } })
        );
    }

    #[tokio::test]
    async fn test_json_body_is_sent() {
        let client = client_for(serve(echo_router()).await);
        let request = ApiRequest::patch("alerts/a1")
            .with_json(&json!({ "status": "resolved" }))
            .unwrap();

        let response = client.execute(&request).await.unwrap();
        assert_eq!(
            response.parse_json().unwrap(),
            json!({ "data": { "id": "a1", "received": { "status": "resolved" } } })
        );
    }

    #[tokio::test]
    async fn test_error_status_is_a_response() {
        let router = echo_router().fallback(|| async {
            (StatusCode::NOT_FOUND, Json(json!({ "error": "Not found" })))
        });
        let client = client_for(serve(router).await);

        let response = client
            .execute(&ApiRequest::get("invalid-endpoint"))
            .await
            .unwrap();
        assert_eq!(response.status, 404);
        assert_eq!(response.body, r#"{"error":"Not found"}"#);
    }

    #[tokio::test]
    async fn test_closed_port_is_a_transport_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = client_for(addr)
            .execute(&ApiRequest::get("merchants"))
            .await
            .unwrap_err();
        assert!(
            matches!(
                err,
                HttpClientError::ConnectionRefused { .. } | HttpClientError::ConnectionFailed(_)
            ),
            "unexpected error: {err:?}"
        );
    }

    #[tokio::test]
    async fn test_slow_server_times_out() {
        let router = Router::new().route(
            "/api/slow",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                Json(json!({}))
            }),
        );
        let addr = serve(router).await;
        let client = ReqwestHttpClient::with_client(
            Client::new(),
            &HarnessConfig::for_base_url(format!("http://{addr}/api")),
        );
        let client = ReqwestHttpClient {
            timeout: Duration::from_millis(100),
            ..client
        };

        let err = client.execute(&ApiRequest::get("slow")).await.unwrap_err();
        assert_eq!(err, HttpClientError::Timeout { timeout_ms: 100 });
    }
}
