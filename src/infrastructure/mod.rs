//! Infrastructure layer module
//!
//! Adapters for everything outside the process boundary:
//! - Configuration management (figment)
//! - Logging infrastructure (tracing)
//! - Encryption at rest (AES-256-GCM)
//! - OIDC discovery over HTTP (reqwest)
//! - Process environment access
//!
//! Infrastructure implementations satisfy the port traits defined in the domain layer.

pub mod config;
pub mod crypto;
pub mod environment;
pub mod logging;
pub mod oidc;

pub use environment::ProcessEnvironment;
