//! Common test utilities for integration tests
//!
//! Provides shared fixtures and helpers used across multiple integration
//! test files.

use std::path::PathBuf;

use instance_config::domain::models::DiscoveryConfig;
use tempfile::TempDir;

pub const DISCOVERY_PATH: &str = "/.well-known/openid-configuration";

/// Create a temporary test database
///
/// Returns the `sqlite:` URL of a database file in a temporary directory.
/// Keep the `TempDir` alive for as long as the database is used.
#[allow(dead_code)]
pub fn temp_db_url() -> (TempDir, String) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let db_path: PathBuf = dir.path().join("instance.db");
    let url = format!("sqlite:{}", db_path.display());
    (dir, url)
}

/// Discovery settings with short timeouts so retry tests finish quickly.
#[allow(dead_code)]
pub fn fast_discovery_config() -> DiscoveryConfig {
    DiscoveryConfig {
        timeout_secs: 2,
        initial_backoff_ms: 10,
        max_backoff_ms: 20,
        max_elapsed_ms: 200,
    }
}

/// A provider metadata document rooted at `issuer`.
#[allow(dead_code)]
pub fn discovery_document(issuer: &str) -> String {
    serde_json::json!({
        "issuer": issuer,
        "authorization_endpoint": format!("{issuer}/oauth2/authorize"),
        "token_endpoint": format!("{issuer}/oauth2/token"),
        "userinfo_endpoint": format!("{issuer}/oauth2/userinfo"),
        "end_session_endpoint": format!("{issuer}/oauth2/logout"),
        "jwks_uri": format!("{issuer}/oauth2/keys"),
        "response_types_supported": ["code"]
    })
    .to_string()
}

/// Setup test logging
///
/// Initializes tracing subscriber for test output.
#[allow(dead_code)]
pub fn setup_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}
