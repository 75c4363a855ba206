//! # VTEX Rust SDK
//!
//! A Rust client for the VTEX commerce REST API.
//!
//! ## Modules
//!
//! - [`api`]: Transport layer (`Transport` trait, reqwest-backed `VtexHttpClient`,
//!   errors and request types)
//! - [`repository`]: Catalog, price/stock simulation and order operations
//!
//! Plus supporting modules:
//! - [`config`]: Connection configuration and store context
//! - [`auth`]: Application key/token credentials
//! - [`network`]: Store URL and header constants
//! - [`shared`]: Page accumulation helpers
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use vtex_sdk::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = VtexConfig::new(
//!         "https://mystore.vtexcommercestable.com.br",
//!         AppCredentials::new("vtexappkey-mystore-ABCDEF", "token"),
//!         StoreContext::new("1", "AFF", "1"),
//!     );
//!     let repo = VtexRepository::new(&config)?;
//!
//!     // First page of products available in the sales channel
//!     let products = repo
//!         .search_products(ProductSearchParams::new().single_page())
//!         .await?;
//!     println!("Found {} products", products.len());
//!
//!     // Authorize an order
//!     repo.authorize_order("1234567890-01").await?;
//!
//!     Ok(())
//! }
//! ```

// ============================================================================
// MODULES
// ============================================================================

/// Store URL and header constants.
pub mod network;

/// Application key/token credentials.
pub mod auth;

/// Connection configuration and store context.
pub mod config;

/// Shared page accumulation helpers.
pub mod shared;

/// REST transport layer.
pub mod api;

/// Catalog, simulation and order operations.
pub mod repository;

// ============================================================================
// PRELUDE
// ============================================================================

/// Prelude module for convenient imports.
///
/// ```rust,ignore
/// use vtex_sdk::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        ApiError, ApiResult, OrderSearchFilters, ProductListParams, ProductSearchParams,
        QueryParams, SimulationItem, SimulationOptions, SimulationRequest, Transport,
    };

    #[cfg(feature = "http")]
    pub use crate::api::{VtexHttpClient, VtexHttpClientBuilder};

    pub use crate::auth::AppCredentials;
    pub use crate::config::{ConfigError, StoreContext, VtexConfig};
    pub use crate::network::{store_url, APP_KEY_HEADER, APP_TOKEN_HEADER};
    pub use crate::repository::VtexRepository;
}
