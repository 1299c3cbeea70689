//! Port trait definitions (Hexagonal Architecture)
//!
//! This module defines the interfaces the seeder is written against:
//! - InstanceConfigRepository: keyed configuration store
//! - Environment: named variable lookup
//! - SecretCipher: encryption of sensitive values
//! - DiscoveryResolver: OIDC endpoint discovery
//!
//! Infrastructure adapters implement these traits so the seeding logic
//! stays independent of SQLite, the process environment and HTTP.

pub mod discovery_resolver;
pub mod environment;
pub mod in_memory_config;
pub mod instance_config_repository;
pub mod secret_cipher;

pub use discovery_resolver::DiscoveryResolver;
pub use environment::{Environment, MapEnvironment};
pub use in_memory_config::InMemoryInstanceConfigRepository;
pub use instance_config_repository::InstanceConfigRepository;
pub use secret_cipher::SecretCipher;
