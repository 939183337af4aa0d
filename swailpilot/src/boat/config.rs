//! Configuration for the boat-control HTTP client.

use std::time::Duration;

/// Default swail.io API root.
pub const DEFAULT_BASE_URL: &str = "http://swail.io/api/v1";

/// Default HTTP timeout for a single request.
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;

/// Configuration for [`SwailClient`](super::SwailClient).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoatClientConfig {
    /// API root, without trailing slash.
    pub base_url: String,

    /// Bound on every request so a stalled endpoint cannot stall the autopilot.
    pub timeout: Duration,
}

impl BoatClientConfig {
    /// Create a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the API root. A trailing slash is dropped.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let url: String = base_url.into();
        self.base_url = url.trim_end_matches('/').to_string();
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for BoatClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
        }
    }
}
