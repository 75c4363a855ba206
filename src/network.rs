//! Network URL and header constants for the VTEX REST API.

/// Default VTEX environment for store hosts.
pub const DEFAULT_ENVIRONMENT: &str = "vtexcommercestable";

/// Header carrying the application key.
pub const APP_KEY_HEADER: &str = "X-VTEX-API-AppKey";

/// Header carrying the application token.
pub const APP_TOKEN_HEADER: &str = "X-VTEX-API-AppToken";

/// Build the base URL for a store account, e.g.
/// `https://mystore.vtexcommercestable.com.br`.
pub fn store_url(account_name: &str, environment: Option<&str>) -> String {
    format!(
        "https://{}.{}.com.br",
        account_name,
        environment.unwrap_or(DEFAULT_ENVIRONMENT)
    )
}
