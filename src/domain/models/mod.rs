pub mod catalog;
pub mod config;
pub mod instance_config;
pub mod oidc;

pub use catalog::{OidcDiscoveryKeys, SeedCatalogEntry, SEED_CATALOG};
pub use config::{Config, DatabaseConfig, DiscoveryConfig, LoggingConfig};
pub use instance_config::{ConfigCategory, ConfigItem, InstanceConfiguration};
pub use oidc::OidcEndpoints;
