//! Frontend configuration.
//!
//! The API base URL is injected through a Yew context at the root instead
//! of being embedded at each call site, so tests and alternate deployments
//! can point the dashboard at a different bot instance.

use yew::prelude::*;

/// Where the bot's local HTTP API lives.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL without a trailing slash.
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new("http://localhost:8080")
    }
}

impl ApiConfig {
    /// Build a config from a base URL, normalizing away a trailing slash.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    /// URL of the bot status endpoint.
    pub fn status_url(&self) -> String {
        format!("{}/api/status", self.base_url)
    }

    /// URL of the Welcome Wagon member listing endpoint.
    pub fn new_members_url(&self) -> String {
        format!("{}/api/welcome-wagon/new-members", self.base_url)
    }
}

/// The ambient API configuration, falling back to the default localhost
/// instance when no provider is mounted above the caller.
#[hook]
pub fn use_api_config() -> ApiConfig {
    use_context::<ApiConfig>().unwrap_or_default()
}
