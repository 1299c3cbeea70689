//! OpenID Connect provider discovery.

pub mod discovery;

pub use discovery::HttpDiscoveryResolver;
