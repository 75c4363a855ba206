//! API error types for the VTEX REST client.

use thiserror::Error;

use crate::config::ConfigError;

/// API-specific error type for the VTEX REST client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP/network error from reqwest
    #[cfg(feature = "http")]
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with anything other than 200 OK
    #[error("API request failed with HTTP code {status}: {body}")]
    RequestFailed {
        /// HTTP status code
        status: u16,
        /// Raw response text
        body: String,
    },

    /// Response body was not valid JSON
    #[error("Deserialization error: {0}")]
    Deserialize(String),

    /// Request body could not be serialized
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// Invalid parameter provided
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl ApiError {
    /// HTTP status code of a failed request, if the server answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::RequestFailed { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result type alias for API operations.
pub type ApiResult<T> = Result<T, ApiError>;
