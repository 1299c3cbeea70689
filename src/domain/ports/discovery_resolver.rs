//! OIDC discovery resolver port.

use async_trait::async_trait;

use crate::domain::errors::DiscoveryError;
use crate::domain::models::OidcEndpoints;

/// Maps a provider discovery URL to its endpoint set.
#[async_trait]
pub trait DiscoveryResolver: Send + Sync {
    /// Resolve all four endpoints or fail; partial results are never returned.
    async fn discover(&self, discovery_url: &str) -> Result<OidcEndpoints, DiscoveryError>;
}
