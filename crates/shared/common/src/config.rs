//! Shared configuration structures.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// HTTP client connection configuration for calls to a sibling service.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HttpClientConfig {
    /// Service base URL (e.g., "http://localhost:8080")
    pub base_url: String,
    /// Connection timeout in milliseconds
    pub connect_timeout_ms: u64,
    /// Request timeout in milliseconds
    pub request_timeout_ms: u64,
}

impl HttpClientConfig {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.connect_timeout_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            connect_timeout_ms: 2000,
            request_timeout_ms: 5000,
        }
    }
}

/// Read an environment variable and parse it, falling back to `default`
/// when it is unset or unparsable.
pub fn env_parse<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

/// Read the first set environment variable among `keys`.
pub fn env_first(keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| env::var(key).ok())
}
