//! HTTP implementation of the DiscoveryResolver port.
//!
//! Fetches an OpenID Connect discovery document and extracts the four
//! endpoints the instance needs. Transient failures (transport errors,
//! 429, 5xx) are retried with exponential backoff until the configured
//! time budget runs out; anything else fails immediately.

use std::time::Duration;

use async_trait::async_trait;
use backoff::ExponentialBackoffBuilder;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::domain::errors::DiscoveryError;
use crate::domain::models::{DiscoveryConfig, OidcEndpoints};
use crate::domain::ports::DiscoveryResolver;

/// Subset of the provider metadata document this tool consumes.
#[derive(Debug, Deserialize)]
struct DiscoveryDocument {
    authorization_endpoint: Option<String>,
    token_endpoint: Option<String>,
    userinfo_endpoint: Option<String>,
    end_session_endpoint: Option<String>,
}

impl DiscoveryDocument {
    fn into_endpoints(self, url: &str) -> Result<OidcEndpoints, DiscoveryError> {
        let require = |value: Option<String>, field: &str| {
            value.filter(|v| !v.trim().is_empty()).ok_or_else(|| DiscoveryError::MalformedDocument {
                url: url.to_string(),
                reason: format!("missing {field}"),
            })
        };

        Ok(OidcEndpoints {
            authorization_url: require(self.authorization_endpoint, "authorization_endpoint")?,
            token_url: require(self.token_endpoint, "token_endpoint")?,
            userinfo_url: require(self.userinfo_endpoint, "userinfo_endpoint")?,
            end_session_url: require(self.end_session_endpoint, "end_session_endpoint")?,
        })
    }
}

/// Discovery client backed by reqwest.
#[derive(Debug, Clone)]
pub struct HttpDiscoveryResolver {
    client: reqwest::Client,
    initial_backoff: Duration,
    max_backoff: Duration,
    max_elapsed: Duration,
}

impl HttpDiscoveryResolver {
    pub fn new(config: &DiscoveryConfig) -> Result<Self, DiscoveryError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("instance-config/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| DiscoveryError::Client(e.to_string()))?;

        Ok(Self {
            client,
            initial_backoff: Duration::from_millis(config.initial_backoff_ms),
            max_backoff: Duration::from_millis(config.max_backoff_ms),
            max_elapsed: Duration::from_millis(config.max_elapsed_ms),
        })
    }

    async fn fetch(&self, url: &str) -> Result<OidcEndpoints, DiscoveryError> {
        let response = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| {
                if e.is_builder() {
                    DiscoveryError::Client(format!("invalid discovery URL {url}: {e}"))
                } else {
                    DiscoveryError::Unreachable {
                        url: url.to_string(),
                        reason: e.to_string(),
                    }
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(DiscoveryError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(|e| DiscoveryError::Unreachable {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

        let document: DiscoveryDocument =
            serde_json::from_str(&body).map_err(|e| DiscoveryError::MalformedDocument {
                url: url.to_string(),
                reason: e.to_string(),
            })?;

        document.into_endpoints(url)
    }
}

#[async_trait]
impl DiscoveryResolver for HttpDiscoveryResolver {
    async fn discover(&self, discovery_url: &str) -> Result<OidcEndpoints, DiscoveryError> {
        let policy = ExponentialBackoffBuilder::new()
            .with_initial_interval(self.initial_backoff)
            .with_max_interval(self.max_backoff)
            .with_max_elapsed_time(Some(self.max_elapsed))
            .build();

        let operation = || async move {
            self.fetch(discovery_url).await.map_err(|err| {
                if err.is_transient() {
                    backoff::Error::transient(err)
                } else {
                    backoff::Error::permanent(err)
                }
            })
        };

        let result = backoff::future::retry_notify(policy, operation, |err: DiscoveryError, wait: Duration| {
            warn!(url = %discovery_url, error = %err, retry_in = ?wait, "discovery attempt failed, retrying");
        })
        .await;

        if result.is_ok() {
            debug!(url = %discovery_url, "discovery document resolved");
        }
        result
    }
}
