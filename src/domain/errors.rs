//! Domain errors for instance configuration seeding.

use thiserror::Error;

/// OIDC endpoint discovery failed.
///
/// Any variant aborts the whole endpoint substitution for the run.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DiscoveryError {
    #[error("discovery request to {url} failed: {reason}")]
    Unreachable { url: String, reason: String },

    #[error("discovery endpoint {url} returned HTTP {status}")]
    HttpStatus { url: String, status: u16 },

    #[error("malformed discovery document from {url}: {reason}")]
    MalformedDocument { url: String, reason: String },

    #[error("failed to build discovery client: {0}")]
    Client(String),
}

impl DiscoveryError {
    /// Whether a retry might succeed: transport failures, 429 and 5xx.
    pub const fn is_transient(&self) -> bool {
        match self {
            Self::Unreachable { .. } => true,
            Self::HttpStatus { status, .. } => *status == 429 || *status >= 500,
            Self::MalformedDocument { .. } | Self::Client(_) => false,
        }
    }
}

/// Encrypting or decrypting a sensitive value failed.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CipherError {
    #[error("no secret key configured; set SECRET_KEY to encrypt sensitive values")]
    MissingKey,

    #[error("encryption failed: {0}")]
    EncryptFailed(String),

    #[error("decryption failed: {0}")]
    DecryptFailed(String),
}

/// Domain-level errors that can occur while seeding or reading configuration.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Configuration not found: {0}")]
    ConfigNotFound(String),

    #[error("Discovery error: {0}")]
    Discovery(#[from] DiscoveryError),

    #[error("Encryption error: {0}")]
    Encryption(#[from] CipherError),

    #[error("Store error: {0}")]
    StoreError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Validation failed: {0}")]
    ValidationFailed(String),
}

pub type DomainResult<T> = Result<T, DomainError>;

impl From<sqlx::Error> for DomainError {
    fn from(err: sqlx::Error) -> Self {
        DomainError::StoreError(err.to_string())
    }
}

impl From<serde_json::Error> for DomainError {
    fn from(err: serde_json::Error) -> Self {
        DomainError::SerializationError(err.to_string())
    }
}
