//! Console configuration
//!
//! Environment variables (optionally from `.env`):
//!
//! | Variable | Default |
//! |---|---|
//! | `HC_API_BASE_URL` | `http://localhost:5084/api` |
//! | `HC_REQUEST_TIMEOUT_SECS` | unset (no timeout) |
//! | `LOG_LEVEL` | `info` |
//! | `LOG_DIR` | unset (stderr only) |
//! | `LOG_JSON` | `false` |

use hc_client::ClientConfig;
use hc_client::config::DEFAULT_BASE_URL;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleConfig {
    pub api_base_url: String,
    pub request_timeout_secs: Option<u64>,
    pub log_level: String,
    pub log_dir: Option<String>,
    pub log_json: bool,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout_secs: None,
            log_level: "info".to_string(),
            log_dir: None,
            log_json: false,
        }
    }
}

impl ConsoleConfig {
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unparseable values fall back to defaults
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            api_base_url: var("HC_API_BASE_URL")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.api_base_url),
            request_timeout_secs: var("HC_REQUEST_TIMEOUT_SECS")
                .and_then(|v| v.trim().parse().ok())
                .filter(|secs| *secs > 0),
            log_level: var("LOG_LEVEL").unwrap_or(defaults.log_level),
            log_dir: var("LOG_DIR").filter(|v| !v.trim().is_empty()),
            log_json: var("LOG_JSON")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.log_json),
        }
    }

    pub fn client_config(&self) -> ClientConfig {
        let config = ClientConfig::new(&self.api_base_url);
        match self.request_timeout_secs {
            Some(secs) => config.with_timeout(secs),
            None => config,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn from(pairs: &[(&str, &str)]) -> ConsoleConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ConsoleConfig::from_vars(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = from(&[]);
        assert_eq!(config, ConsoleConfig::default());
        assert_eq!(config.client_config().timeout, None);
    }

    #[test]
    fn test_overrides() {
        let config = from(&[
            ("HC_API_BASE_URL", "https://booking.example.org/api"),
            ("HC_REQUEST_TIMEOUT_SECS", "15"),
            ("LOG_LEVEL", "debug"),
            ("LOG_DIR", "/var/log/hc"),
        ]);
        assert_eq!(config.api_base_url, "https://booking.example.org/api");
        assert_eq!(config.client_config().timeout, Some(15));
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.log_dir.as_deref(), Some("/var/log/hc"));
    }

    #[test]
    fn test_bad_timeout_means_none() {
        assert_eq!(from(&[("HC_REQUEST_TIMEOUT_SECS", "soon")]).request_timeout_secs, None);
        assert_eq!(from(&[("HC_REQUEST_TIMEOUT_SECS", "0")]).request_timeout_secs, None);
    }
}
