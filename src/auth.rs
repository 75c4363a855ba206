//! Application key/token credentials for the VTEX API.
//!
//! VTEX authenticates server-to-server calls with a fixed pair of headers,
//! [`APP_KEY_HEADER`] and [`APP_TOKEN_HEADER`], sent on every request.

use std::fmt;

use crate::network::{APP_KEY_HEADER, APP_TOKEN_HEADER};

/// Application key and token used to authenticate every request.
#[derive(Clone, PartialEq, Eq)]
pub struct AppCredentials {
    /// Application key (`X-VTEX-API-AppKey`)
    pub app_key: String,
    /// Application token (`X-VTEX-API-AppToken`)
    pub app_token: String,
}

impl AppCredentials {
    /// Create a new credential pair.
    pub fn new(app_key: impl Into<String>, app_token: impl Into<String>) -> Self {
        Self {
            app_key: app_key.into(),
            app_token: app_token.into(),
        }
    }

    /// The fixed authentication headers, as `(name, value)` pairs.
    pub fn headers(&self) -> [(&'static str, &str); 2] {
        [
            (APP_KEY_HEADER, self.app_key.as_str()),
            (APP_TOKEN_HEADER, self.app_token.as_str()),
        ]
    }
}

impl fmt::Debug for AppCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppCredentials")
            .field("app_key", &self.app_key)
            .field("app_token", &"<redacted>")
            .finish()
    }
}
