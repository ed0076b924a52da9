//! Authenticated encryption of secret values.
//!
//! Provides the encryption/decryption abstraction and the default
//! AES-256-GCM implementation. Encryption is deliberately non-deterministic:
//! a fresh random nonce is drawn per call, so encrypting the same value
//! twice with the same key yields different tokens.
//!
//! ## Adding a New Backend
//!
//! 1. Implement the `Cipher` trait
//! 2. Add the implementation in a new file (e.g., `chacha.rs`)
//! 3. Re-export from this module

use crate::core::keys::MasterKey;
use crate::error::Result;

mod gcm;

pub use gcm::Gcm;

/// Cryptographic backend trait.
///
/// Abstracts encryption and decryption of a single value so alternative
/// constructions can be swapped in without touching the vault.
pub trait Cipher {
    /// Encrypt one plaintext value into a self-contained token.
    ///
    /// The token embeds everything needed to decrypt except the key itself.
    ///
    /// # Errors
    ///
    /// Returns `CipherError` if encryption fails.
    fn encrypt(&self, plaintext: &str, key: &MasterKey) -> Result<String>;

    /// Decrypt a token produced by [`Cipher::encrypt`]. All-or-nothing:
    /// there is no partial or best-effort decryption.
    ///
    /// # Errors
    ///
    /// Returns `CipherError::Format` if the token cannot be parsed, and
    /// `CipherError::Integrity` if the authentication tag does not verify
    /// (wrong key or tampered ciphertext).
    fn decrypt(&self, token: &str, key: &MasterKey) -> Result<String>;

    /// Backend name for display/config.
    fn name(&self) -> &'static str;
}

// Convenience functions using the default AES-256-GCM backend
/// Encrypt a plaintext value with the default backend.
pub fn encrypt(plaintext: &str, key: &MasterKey) -> Result<String> {
    Gcm.encrypt(plaintext, key)
}

/// Decrypt a token with the default backend.
pub fn decrypt(token: &str, key: &MasterKey) -> Result<String> {
    Gcm.decrypt(token, key)
}
