//! VTEX REST transport implementation.
//!
//! The [`VtexHttpClient`] attaches the application key/token headers to every
//! request, builds URLs from the store base URL, and treats anything other
//! than `200 OK` as a failed request.
//!
//! # Example
//!
//! ```rust,ignore
//! use vtex_sdk::api::{Transport, VtexHttpClient};
//! use vtex_sdk::auth::AppCredentials;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = VtexHttpClient::new(
//!         "https://mystore.vtexcommercestable.com.br",
//!         AppCredentials::new("key", "token"),
//!     )?;
//!
//!     let product = client.get("/api/catalog/pvt/product/1", &[]).await?;
//!     println!("{}", product);
//!
//!     Ok(())
//! }
//! ```

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT};
use reqwest::{Client, StatusCode};
use serde_json::Value;

use crate::api::error::{ApiError, ApiResult};
use crate::api::transport::{build_url, QueryParams, Transport};
use crate::auth::AppCredentials;
use crate::config::{VtexConfig, DEFAULT_TIMEOUT_SECS};

/// Builder for configuring [`VtexHttpClient`].
#[derive(Debug, Clone)]
pub struct VtexHttpClientBuilder {
    base_url: String,
    credentials: AppCredentials,
    timeout: Duration,
    default_headers: Vec<(String, String)>,
}

impl VtexHttpClientBuilder {
    /// Create a new builder with the given base URL and credentials.
    pub fn new(base_url: impl Into<String>, credentials: AppCredentials) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            credentials,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            default_headers: Vec::new(),
        }
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the timeout in seconds.
    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.timeout = Duration::from_secs(secs);
        self
    }

    /// Add a default header to all requests.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.push((name.into(), value.into()));
        self
    }

    /// Build the client.
    pub fn build(self) -> ApiResult<VtexHttpClient> {
        if self.base_url.is_empty() {
            return Err(ApiError::InvalidParameter("base_url cannot be empty".to_string()));
        }

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let auth_headers = self
            .credentials
            .headers()
            .map(|(name, value)| (name.to_string(), value.to_string()));

        for (name, value) in self.default_headers.into_iter().chain(auth_headers) {
            let header_name = HeaderName::try_from(name.as_str())
                .map_err(|e| ApiError::InvalidParameter(format!("Invalid header name '{}': {}", name, e)))?;
            let mut header_value = HeaderValue::from_str(&value)
                .map_err(|e| ApiError::InvalidParameter(format!("Invalid header value for '{}': {}", name, e)))?;
            if header_name.as_str().contains("apptoken") {
                header_value.set_sensitive(true);
            }
            headers.insert(header_name, header_value);
        }

        // Redirects are surfaced as failed requests, never followed
        let http_client = Client::builder()
            .timeout(self.timeout)
            .redirect(reqwest::redirect::Policy::none())
            .default_headers(headers)
            .build()?;

        Ok(VtexHttpClient {
            http_client,
            base_url: self.base_url,
        })
    }
}

/// VTEX REST API transport.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct VtexHttpClient {
    http_client: Client,
    base_url: String,
}

impl VtexHttpClient {
    /// Create a new client with the given base URL and credentials.
    ///
    /// Uses default settings (30s timeout).
    ///
    /// # Errors
    ///
    /// Returns an error if the credentials are not valid header values or the
    /// HTTP client cannot be initialized.
    pub fn new(base_url: impl Into<String>, credentials: AppCredentials) -> ApiResult<Self> {
        VtexHttpClientBuilder::new(base_url, credentials).build()
    }

    /// Create a client from a full [`VtexConfig`].
    pub fn from_config(config: &VtexConfig) -> ApiResult<Self> {
        VtexHttpClientBuilder::new(config.base_url.clone(), config.credentials.clone())
            .timeout(config.timeout)
            .build()
    }

    /// Create a new client builder for custom configuration.
    pub fn builder(base_url: impl Into<String>, credentials: AppCredentials) -> VtexHttpClientBuilder {
        VtexHttpClientBuilder::new(base_url, credentials)
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // =========================================================================
    // Internal helpers
    // =========================================================================

    /// Turn a response into a JSON value, or a `RequestFailed` error for any
    /// status other than 200.
    async fn handle_response(response: reqwest::Response) -> ApiResult<Value> {
        let status = response.status();

        if status != StatusCode::OK {
            let body = match response.text().await {
                Ok(text) => text,
                Err(e) => {
                    tracing::warn!(%status, error = %e, "Failed to read error response body");
                    String::new()
                }
            };
            return Err(ApiError::RequestFailed {
                status: status.as_u16(),
                body,
            });
        }

        let text = response.text().await?;
        decode_body(&text)
    }
}

/// Decode a successful response body. An empty body decodes to `null`.
pub(crate) fn decode_body(text: &str) -> ApiResult<Value> {
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(text)
        .map_err(|e| ApiError::Deserialize(format!("Failed to deserialize response: {}", e)))
}

#[async_trait]
impl Transport for VtexHttpClient {
    async fn get(&self, path: &str, query: &QueryParams) -> ApiResult<Value> {
        let url = build_url(&self.base_url, path, query)?;
        tracing::debug!(method = "GET", %url, "sending request");

        let response = self.http_client.get(&url).send().await?;
        tracing::debug!(method = "GET", %url, status = %response.status(), "received response");
        Self::handle_response(response).await
    }

    async fn post(&self, path: &str, body: Option<&Value>) -> ApiResult<Value> {
        let url = build_url(&self.base_url, path, &[])?;
        tracing::debug!(method = "POST", %url, has_body = body.is_some(), "sending request");

        let mut request = self.http_client.post(&url);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        tracing::debug!(method = "POST", %url, status = %response.status(), "received response");
        Self::handle_response(response).await
    }
}
