//! Runtime configuration.

use std::env;

/// Where the API lives. The only knob the client has.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    pub const DEFAULT_BASE_URL: &'static str = "http://localhost:3000";

    /// Read `MEDWARE_BASE_URL` from the environment, falling back to
    /// [`Self::DEFAULT_BASE_URL`].
    pub fn from_env() -> Self {
        let base_url =
            env::var("MEDWARE_BASE_URL").unwrap_or_else(|_| Self::DEFAULT_BASE_URL.to_string());
        Self { base_url }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: Self::DEFAULT_BASE_URL.to_string(),
        }
    }
}
