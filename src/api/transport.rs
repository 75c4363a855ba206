//! Transport capability used by [`VtexRepository`](crate::repository::VtexRepository).
//!
//! The repository only ever needs two verbs. Keeping them behind a trait lets
//! callers and tests swap the real HTTP client for any other implementation.

use async_trait::async_trait;
use serde_json::Value;

use crate::api::error::{ApiError, ApiResult};

/// Ordered query parameters, encoded as `application/x-www-form-urlencoded`.
pub type QueryParams = [(String, String)];

/// Minimal GET/POST capability over the VTEX REST API.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Issue a GET to `path` with the given query parameters and return the
    /// decoded JSON body.
    async fn get(&self, path: &str, query: &QueryParams) -> ApiResult<Value>;

    /// Issue a POST to `path`. `body` is sent as JSON when present; no
    /// payload is sent otherwise.
    async fn post(&self, path: &str, body: Option<&Value>) -> ApiResult<Value>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for std::sync::Arc<T> {
    async fn get(&self, path: &str, query: &QueryParams) -> ApiResult<Value> {
        (**self).get(path, query).await
    }

    async fn post(&self, path: &str, body: Option<&Value>) -> ApiResult<Value> {
        (**self).post(path, body).await
    }
}

/// Build the query string for `query`, or an empty string if there is none.
pub fn encode_query(query: &QueryParams) -> ApiResult<String> {
    if query.is_empty() {
        return Ok(String::new());
    }
    serde_urlencoded::to_string(query)
        .map_err(|e| ApiError::InvalidParameter(format!("Invalid query: {}", e)))
}

/// Join a base URL, a path and optional query parameters into a full URL.
pub fn build_url(base_url: &str, path: &str, query: &QueryParams) -> ApiResult<String> {
    let mut url = String::with_capacity(base_url.len() + path.len());
    url.push_str(base_url.trim_end_matches('/'));
    if !path.starts_with('/') {
        url.push('/');
    }
    url.push_str(path);

    let qs = encode_query(query)?;
    if !qs.is_empty() {
        url.push('?');
        url.push_str(&qs);
    }
    Ok(url)
}
