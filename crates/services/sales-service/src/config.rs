//! Sales service configuration.

use std::env;

use common::{env_first, env_parse, HttpClientConfig};
use domain::{DomainResult, SaleStatus, SalesPolicy};

/// Sales service configuration.
#[derive(Debug, Clone)]
pub struct SalesServiceConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Connection to the user service for the remote existence check
    pub user_service: HttpClientConfig,
    /// Comma separated override of the initial status set
    pub initial_statuses: Option<String>,
}

impl SalesServiceConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let client_defaults = defaults.user_service;
        Self {
            host: env::var("SALES_SERVICE_HOST").unwrap_or(defaults.host),
            port: env_parse("SALES_SERVICE_PORT", defaults.port),
            user_service: HttpClientConfig {
                base_url: env_first(&["SALES_SERVICE_USER_SERVICE_URL", "USER_SERVICE_URL"])
                    .unwrap_or(client_defaults.base_url),
                connect_timeout_ms: env_parse(
                    "SALES_SERVICE_USER_CONNECT_TIMEOUT_MS",
                    client_defaults.connect_timeout_ms,
                ),
                request_timeout_ms: env_parse(
                    "SALES_SERVICE_USER_TIMEOUT_MS",
                    client_defaults.request_timeout_ms,
                ),
            },
            initial_statuses: env::var("SALES_SERVICE_INITIAL_STATUSES").ok(),
        }
    }

    /// Apply the configured initial status override, if any, to `base`.
    pub fn policy(&self, base: SalesPolicy) -> DomainResult<SalesPolicy> {
        match self.initial_statuses.as_deref() {
            Some(raw) => base.with_initial_statuses(parse_statuses(raw)?),
            None => Ok(base),
        }
    }
}

impl Default for SalesServiceConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8081,
            user_service: HttpClientConfig::default(),
            initial_statuses: None,
        }
    }
}

/// Parse "pending, rejected" style lists. Blank entries are skipped.
fn parse_statuses(raw: &str) -> DomainResult<Vec<SaleStatus>> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::parse)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_without_override() {
        let config = SalesServiceConfig::default();

        assert_eq!(config.policy(SalesPolicy::remote()).unwrap(), SalesPolicy::remote());
    }

    #[test]
    fn test_policy_override() {
        let config = SalesServiceConfig {
            initial_statuses: Some("pending, approved".to_string()),
            ..Default::default()
        };

        let policy = config.policy(SalesPolicy::remote()).unwrap();
        assert_eq!(
            policy.initial_statuses,
            vec![SaleStatus::Pending, SaleStatus::Approved]
        );
        assert!(policy.strict_terminal_requests);
    }

    #[test]
    fn test_policy_override_rejects_bad_values() {
        for raw in ["pending,shipped", " , "] {
            let config = SalesServiceConfig {
                initial_statuses: Some(raw.to_string()),
                ..Default::default()
            };
            assert!(config.policy(SalesPolicy::co_located()).is_err());
        }
    }
}
