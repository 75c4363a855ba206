//! REST transport layer for the VTEX API.
//!
//! This module provides the [`Transport`] capability (GET/POST returning JSON)
//! and its reqwest-backed implementation, [`VtexHttpClient`].
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use vtex_sdk::api::{Transport, VtexHttpClient};
//! use vtex_sdk::auth::AppCredentials;
//!
//! let client = VtexHttpClient::new(
//!     "https://mystore.vtexcommercestable.com.br",
//!     AppCredentials::new("vtexappkey-mystore-ABCDEF", "token"),
//! )?;
//!
//! let orders = client
//!     .get("/api/oms/pvt/orders/search", &[("f_status".into(), "invoiced".into())])
//!     .await?;
//! ```
//!
//! # Client Configuration
//!
//! ```rust,ignore
//! use std::time::Duration;
//!
//! let client = VtexHttpClient::builder(base_url, credentials)
//!     .timeout(Duration::from_secs(60))
//!     .header("X-Custom-Header", "value")
//!     .build()?;
//! ```
//!
//! # Error Handling
//!
//! Every status other than `200 OK` becomes [`ApiError::RequestFailed`],
//! carrying the status code and the raw body:
//!
//! ```rust,ignore
//! match client.get("/api/catalog/pvt/product/42", &[]).await {
//!     Ok(product) => println!("{}", product),
//!     Err(ApiError::RequestFailed { status, body }) => println!("{}: {}", status, body),
//!     Err(e) => println!("Other error: {}", e),
//! }
//! ```

#[cfg(feature = "http")]
pub mod client;
pub mod error;
pub mod transport;
pub mod types;

// Re-export main types for convenience
#[cfg(feature = "http")]
pub use client::{VtexHttpClient, VtexHttpClientBuilder};
pub use error::{ApiError, ApiResult};
pub use transport::{build_url, encode_query, QueryParams, Transport};
pub use types::*;
