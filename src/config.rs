//! Connection configuration and store context.
//!
//! A [`VtexConfig`] is captured once at construction and never mutated. It
//! carries everything a request needs: the store base URL, the
//! [`AppCredentials`] and the [`StoreContext`] used to tag simulation items
//! and filter searches.

use std::time::Duration;

use thiserror::Error;

use crate::auth::AppCredentials;
use crate::network::store_url;

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A required environment variable is missing or empty
    #[error("Missing environment variable: {0}")]
    MissingVar(&'static str),

    /// An environment variable holds a value that cannot be used
    #[error("Invalid value for {name}: {reason}")]
    InvalidVar {
        /// Variable name
        name: &'static str,
        /// Why the value was rejected
        reason: String,
    },
}

/// Seller, affiliate and sales channel this client operates for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreContext {
    /// Seller id attached to every simulation item
    pub seller_id: String,
    /// Affiliate id
    pub affiliate_id: String,
    /// Sales channel (`sc`) used for simulation and availability filters
    pub sales_channel: String,
}

impl StoreContext {
    /// Create a new store context.
    pub fn new(
        seller_id: impl Into<String>,
        affiliate_id: impl Into<String>,
        sales_channel: impl Into<String>,
    ) -> Self {
        Self {
            seller_id: seller_id.into(),
            affiliate_id: affiliate_id.into(),
            sales_channel: sales_channel.into(),
        }
    }
}

/// Full client configuration.
#[derive(Debug, Clone)]
pub struct VtexConfig {
    /// Store base URL, without trailing slash
    pub base_url: String,
    /// Application credentials
    pub credentials: AppCredentials,
    /// Seller / affiliate / sales channel
    pub store: StoreContext,
    /// Request timeout
    pub timeout: Duration,
}

impl VtexConfig {
    /// Create a configuration with the default timeout.
    pub fn new(base_url: impl Into<String>, credentials: AppCredentials, store: StoreContext) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            credentials,
            store,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Load configuration from the process environment.
    ///
    /// Reads `VTEX_BASE_URL` (or `VTEX_ACCOUNT_NAME` with an optional
    /// `VTEX_ENVIRONMENT`), `VTEX_APP_KEY`, `VTEX_APP_TOKEN`,
    /// `VTEX_SELLER_ID`, `VTEX_AFFILIATE_ID`, `VTEX_SALES_CHANNEL` and the
    /// optional `VTEX_TIMEOUT_SECS`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a required variable is missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let require = |name: &'static str| get(name).ok_or(ConfigError::MissingVar(name));

        let base_url = match get("VTEX_BASE_URL") {
            Some(url) => url,
            None => {
                let account = get("VTEX_ACCOUNT_NAME")
                    .ok_or(ConfigError::MissingVar("VTEX_BASE_URL"))?;
                store_url(&account, get("VTEX_ENVIRONMENT").as_deref())
            }
        };

        let credentials = AppCredentials::new(require("VTEX_APP_KEY")?, require("VTEX_APP_TOKEN")?);
        let store = StoreContext::new(
            require("VTEX_SELLER_ID")?,
            require("VTEX_AFFILIATE_ID")?,
            require("VTEX_SALES_CHANNEL")?,
        );

        let mut config = Self::new(base_url, credentials, store);

        if let Some(raw) = get("VTEX_TIMEOUT_SECS") {
            let secs = raw.trim().parse::<u64>().map_err(|e| ConfigError::InvalidVar {
                name: "VTEX_TIMEOUT_SECS",
                reason: e.to_string(),
            })?;
            config.timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }
}
