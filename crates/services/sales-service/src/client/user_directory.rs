//! HTTP client for user-service.

use async_trait::async_trait;
use reqwest::{Client, Url};
use tracing::{debug, error, warn};

use common::HttpClientConfig;
use domain::{DomainError, DomainResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Answers whether a sale may be registered for a user.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Succeed only if the user exists and is not deleted.
    ///
    /// Fails with `UserNotFound` otherwise, or with `RemoteCallFailed` when
    /// the answer could not be obtained.
    async fn ensure_user(&self, user_id: &str) -> DomainResult<()>;
}

/// Checks users with `GET {base}/users/{id}` against a running user service.
pub struct HttpUserDirectory {
    client: Client,
    base_url: Url,
}

impl HttpUserDirectory {
    /// Build the client. No connection is made until the first check.
    pub fn new(config: &HttpClientConfig) -> DomainResult<Self> {
        debug!("Connecting to user-service at {}", config.base_url);

        let base_url = Url::parse(&config.base_url).map_err(|e| {
            DomainError::invalid_input(format!("user service url '{}': {}", config.base_url, e))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(DomainError::invalid_input(format!(
                "user service url '{}' cannot be a base",
                config.base_url
            )));
        }

        let client = Client::builder()
            .connect_timeout(config.connect_timeout())
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| DomainError::remote_call_failed(e.to_string()))?;

        Ok(Self { client, base_url })
    }

    fn user_url(&self, user_id: &str) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push("users").push(user_id);
        }
        url
    }
}

#[async_trait]
impl UserDirectory for HttpUserDirectory {
    async fn ensure_user(&self, user_id: &str) -> DomainResult<()> {
        let url = self.user_url(user_id);
        debug!(%url, "checking user existence");

        let response = self.client.get(url).send().await.map_err(|e| {
            error!(user_id = %user_id, error = %e, "user service call failed");
            DomainError::remote_call_failed(e.to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!(user_id = %user_id, %status, "user rejected by user service");
            return Err(DomainError::user_not_found(user_id));
        }

        Ok(())
    }
}
