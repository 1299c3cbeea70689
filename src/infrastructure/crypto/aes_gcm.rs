//! AES-256-GCM implementation of the SecretCipher port.
//!
//! Ciphertext is `base64(nonce || sealed)` with a fresh 96-bit nonce per
//! call, so encrypting the same value twice yields different output.

use std::fmt;

use aes_gcm::aead::{Aead, AeadCore, KeyInit, OsRng};
use aes_gcm::{Aes256Gcm, Nonce};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use sha2::{Digest, Sha256};

use crate::domain::errors::CipherError;
use crate::domain::ports::SecretCipher;

const NONCE_LEN: usize = 12;

/// Cipher keyed from the instance secret.
#[derive(Clone)]
pub struct AesGcmCipher {
    cipher: Aes256Gcm,
}

impl AesGcmCipher {
    /// Derive the 256-bit key as SHA-256 of `secret`.
    pub fn from_secret(secret: &str) -> Result<Self, CipherError> {
        if secret.is_empty() {
            return Err(CipherError::MissingKey);
        }
        let key = Sha256::digest(secret.as_bytes());
        Ok(Self {
            cipher: Aes256Gcm::new(&key),
        })
    }
}

impl fmt::Debug for AesGcmCipher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AesGcmCipher").field("key", &"[REDACTED]").finish()
    }
}

impl SecretCipher for AesGcmCipher {
    fn encrypt(&self, plaintext: &str) -> Result<String, CipherError> {
        let nonce = Aes256Gcm::generate_nonce(&mut OsRng);
        let sealed = self
            .cipher
            .encrypt(&nonce, plaintext.as_bytes())
            .map_err(|e| CipherError::EncryptFailed(e.to_string()))?;

        let mut payload = Vec::with_capacity(NONCE_LEN + sealed.len());
        payload.extend_from_slice(&nonce);
        payload.extend_from_slice(&sealed);
        Ok(STANDARD.encode(payload))
    }

    fn decrypt(&self, ciphertext: &str) -> Result<String, CipherError> {
        let payload = STANDARD
            .decode(ciphertext.trim())
            .map_err(|e| CipherError::DecryptFailed(format!("invalid base64: {e}")))?;
        if payload.len() <= NONCE_LEN {
            return Err(CipherError::DecryptFailed("ciphertext too short".to_string()));
        }

        let (nonce, sealed) = payload.split_at(NONCE_LEN);
        let plaintext = self
            .cipher
            .decrypt(Nonce::from_slice(nonce), sealed)
            .map_err(|_| CipherError::DecryptFailed("authentication failed".to_string()))?;

        String::from_utf8(plaintext).map_err(|e| CipherError::DecryptFailed(e.to_string()))
    }
}
