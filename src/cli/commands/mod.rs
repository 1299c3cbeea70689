//! CLI command implementations.

pub mod catalog;
pub mod get;
pub mod list;
pub mod seed;

use std::sync::Arc;

use anyhow::{Context, Result};

use crate::adapters::sqlite::{initialize_database, PoolConfig, SqliteInstanceConfigRepository};
use crate::domain::errors::CipherError;
use crate::domain::models::{Config, InstanceConfiguration};
use crate::domain::ports::SecretCipher;
use crate::infrastructure::crypto::AesGcmCipher;

/// Shown in place of encrypted values that are not revealed.
pub const MASK: &str = "********";

/// Open the configured database, applying pending migrations.
pub async fn open_repository(config: &Config) -> Result<SqliteInstanceConfigRepository> {
    let pool_config = PoolConfig {
        max_connections: config.database.max_connections,
        ..PoolConfig::default()
    };
    let pool = initialize_database(&config.database.url(), Some(pool_config))
        .await
        .with_context(|| format!("Failed to open database at {}", config.database.path))?;
    Ok(SqliteInstanceConfigRepository::new(pool))
}

/// Cipher for the configured secret key, if one is set.
pub fn build_cipher(config: &Config) -> Result<Option<Arc<dyn SecretCipher>>> {
    config
        .secret_key
        .as_deref()
        .map(|secret| {
            AesGcmCipher::from_secret(secret)
                .map(|cipher| Arc::new(cipher) as Arc<dyn SecretCipher>)
                .context("Failed to initialize encryption")
        })
        .transpose()
}

/// Value as it should be displayed.
///
/// Blank values are shown as stored. Encrypted values are masked unless
/// `reveal` is set, in which case a cipher is required.
pub fn display_value(
    record: &InstanceConfiguration,
    cipher: Option<&dyn SecretCipher>,
    reveal: bool,
) -> Result<Option<String>> {
    let value = match record.value.as_deref() {
        Some(value) if record.is_encrypted && !value.is_empty() => value,
        _ => return Ok(record.value.clone()),
    };

    if !reveal {
        return Ok(Some(MASK.to_string()));
    }

    let cipher = cipher.ok_or(CipherError::MissingKey)?;
    let plaintext = cipher
        .decrypt(value)
        .with_context(|| format!("Failed to decrypt {}", record.key))?;
    Ok(Some(plaintext))
}
