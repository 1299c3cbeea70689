//! Instance configuration seeding.
//!
//! Populates an instance's persistent configuration store from environment
//! variables on first deployment, encrypting sensitive values at rest and
//! resolving OIDC endpoints from a provider discovery document. Keys that
//! already exist are never overwritten, so seeding is safe to run on every
//! start.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain`): models, the seed catalog and port traits
//! - **Service Layer** (`services`): the seeder
//! - **Adapters** (`adapters`): SQLite persistence
//! - **Infrastructure Layer** (`infrastructure`): config, logging, crypto, HTTP discovery
//! - **CLI Layer** (`cli`): command-line interface
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use instance_config::adapters::sqlite::{initialize_database, SqliteInstanceConfigRepository};
//! use instance_config::infrastructure::{oidc::HttpDiscoveryResolver, ProcessEnvironment};
//! use instance_config::services::{ConfigSeeder, SeedOptions};
//!
//! let pool = initialize_database("sqlite:instance.db", None).await?;
//! let repository = Arc::new(SqliteInstanceConfigRepository::new(pool));
//! let discovery = Arc::new(HttpDiscoveryResolver::new(&Default::default())?);
//! let seeder = ConfigSeeder::new(repository, None, discovery);
//! let report = seeder.seed(&ProcessEnvironment, SeedOptions::default()).await;
//! ```

pub mod adapters;
pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::models::{
    Config, ConfigCategory, ConfigItem, InstanceConfiguration, OidcEndpoints, SeedCatalogEntry,
    SEED_CATALOG,
};
pub use domain::ports::{DiscoveryResolver, Environment, InstanceConfigRepository, SecretCipher};
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use services::{ConfigSeeder, SeedOptions, SeedReport, SeedStatus, SeedStatusKind};
