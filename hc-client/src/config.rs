//! Client configuration

use crate::{ClientResult, HcClient, NetworkHttpClient};

/// Default backend API root
pub const DEFAULT_BASE_URL: &str = "http://localhost:5084/api";

/// Client configuration for connecting to the booking backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// API root (e.g., "http://localhost:5084/api")
    pub base_url: String,

    /// Request timeout in seconds; `None` waits indefinitely
    pub timeout: Option<u64>,
}

impl ClientConfig {
    /// Create a new client configuration without a timeout
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: None,
        }
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = Some(seconds);
        self
    }

    /// Create an HTTP client from this configuration
    pub fn build_http_client(&self) -> ClientResult<NetworkHttpClient> {
        NetworkHttpClient::new(self)
    }

    /// Create a resource client from this configuration
    pub fn build(&self) -> ClientResult<HcClient<NetworkHttpClient>> {
        Ok(HcClient::new(self.build_http_client()?))
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
