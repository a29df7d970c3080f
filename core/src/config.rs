//! Client configuration.

use std::time::Duration;

/// Base URL of the hosted analysis API.
pub const DEFAULT_BASE_URL: &str = "https://api.example.com/poker-hand-analysis";

/// Settings shared by `AnalysisClient` and `ReqwestTransport`.
///
/// `timeout` is off by default: a request waits as long as the underlying
/// connection does. Callers that want a deadline either set it here or wrap
/// the action future in `tokio::time::timeout`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
        }
    }
}

impl ClientConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}
