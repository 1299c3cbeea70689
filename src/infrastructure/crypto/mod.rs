//! Encryption at rest for sensitive configuration values.

pub mod aes_gcm;

pub use self::aes_gcm::AesGcmCipher;
