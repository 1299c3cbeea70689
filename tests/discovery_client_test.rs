//! Integration tests for the HTTP OIDC discovery client
//!
//! Runs the client against a mock provider and checks:
//! - Successful resolution of all four endpoints
//! - Rejection of incomplete or non-JSON documents
//! - Retry on transient (5xx) errors and no retry on 4xx

mod common;

use common::{discovery_document, fast_discovery_config, DISCOVERY_PATH};
use instance_config::domain::errors::DiscoveryError;
use instance_config::domain::models::DiscoveryConfig;
use instance_config::domain::ports::DiscoveryResolver;
use instance_config::infrastructure::oidc::HttpDiscoveryResolver;
use mockito::Server;

fn resolver() -> HttpDiscoveryResolver {
    HttpDiscoveryResolver::new(&fast_discovery_config()).expect("Failed to create resolver")
}

#[tokio::test]
async fn test_discover_success() {
    let mut server = Server::new_async().await;
    let issuer = server.url();
    let mock = server
        .mock("GET", DISCOVERY_PATH)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(discovery_document(&issuer))
        .expect(1)
        .create_async()
        .await;

    let endpoints = resolver()
        .discover(&format!("{issuer}{DISCOVERY_PATH}"))
        .await
        .expect("discovery should succeed");

    assert_eq!(endpoints.authorization_url, format!("{issuer}/oauth2/authorize"));
    assert_eq!(endpoints.token_url, format!("{issuer}/oauth2/token"));
    assert_eq!(endpoints.userinfo_url, format!("{issuer}/oauth2/userinfo"));
    assert_eq!(endpoints.end_session_url, format!("{issuer}/oauth2/logout"));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_discover_missing_endpoint_is_malformed() {
    let mut server = Server::new_async().await;
    let issuer = server.url();
    let body = serde_json::json!({
        "issuer": issuer,
        "authorization_endpoint": format!("{issuer}/authorize"),
        "token_endpoint": format!("{issuer}/token"),
        "userinfo_endpoint": format!("{issuer}/userinfo"),
    });
    let mock = server
        .mock("GET", DISCOVERY_PATH)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body.to_string())
        .expect(1)
        .create_async()
        .await;

    let err = resolver()
        .discover(&format!("{issuer}{DISCOVERY_PATH}"))
        .await
        .unwrap_err();

    match err {
        DiscoveryError::MalformedDocument { reason, .. } => assert!(reason.contains("end_session_endpoint")),
        other => panic!("expected MalformedDocument, got {other:?}"),
    }
    mock.assert_async().await;
}

#[tokio::test]
async fn test_discover_non_json_body_is_malformed() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", DISCOVERY_PATH)
        .with_status(200)
        .with_body("<html>login</html>")
        .expect(1)
        .create_async()
        .await;

    let err = resolver()
        .discover(&format!("{}{DISCOVERY_PATH}", server.url()))
        .await
        .unwrap_err();

    assert!(matches!(err, DiscoveryError::MalformedDocument { .. }));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_discover_not_found_is_not_retried() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", DISCOVERY_PATH)
        .with_status(404)
        .expect(1)
        .create_async()
        .await;

    let err = resolver()
        .discover(&format!("{}{DISCOVERY_PATH}", server.url()))
        .await
        .unwrap_err();

    assert!(matches!(err, DiscoveryError::HttpStatus { status: 404, .. }));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_discover_server_error_is_retried() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", DISCOVERY_PATH)
        .with_status(503)
        .expect_at_least(2)
        .create_async()
        .await;

    let err = resolver()
        .discover(&format!("{}{DISCOVERY_PATH}", server.url()))
        .await
        .unwrap_err();

    assert!(matches!(err, DiscoveryError::HttpStatus { status: 503, .. }));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_discover_unreachable_host() {
    let config = DiscoveryConfig {
        max_elapsed_ms: 0,
        ..fast_discovery_config()
    };
    let resolver = HttpDiscoveryResolver::new(&config).unwrap();

    let err = resolver
        .discover("http://127.0.0.1:1/.well-known/openid-configuration")
        .await
        .unwrap_err();

    assert!(matches!(err, DiscoveryError::Unreachable { .. }));
}

#[tokio::test]
async fn test_discover_invalid_url() {
    let err = resolver().discover("not a url").await.unwrap_err();
    assert!(matches!(err, DiscoveryError::Client(_)));
}
