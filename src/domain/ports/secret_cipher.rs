//! Secret cipher port.

use crate::domain::errors::CipherError;

/// Reversible encryption of sensitive configuration values.
///
/// Implementations may be non-deterministic; callers must only rely on
/// `decrypt(encrypt(x)) == x`.
pub trait SecretCipher: Send + Sync {
    fn encrypt(&self, plaintext: &str) -> Result<String, CipherError>;

    fn decrypt(&self, ciphertext: &str) -> Result<String, CipherError>;
}
