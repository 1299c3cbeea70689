//! Domain layer for instance configuration seeding
//!
//! This module contains the configuration models, the seed catalog and
//! the port traits the seeder is written against.

pub mod errors;
pub mod models;
pub mod ports;

pub use errors::{CipherError, DiscoveryError, DomainError, DomainResult};
