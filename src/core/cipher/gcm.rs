//! AES-256-GCM token backend.
//!
//! Token layout before base64 encoding:
//!
//! ```text
//! version (1) || unix timestamp, big-endian (8) || nonce (12) || ciphertext + tag
//! ```
//!
//! The header (version + timestamp) is bound as AEAD associated data, so the
//! authentication tag covers the whole token. The result is URL-safe base64
//! without padding, safe to embed in JSON or YAML.

use aes_gcm::aead::{Aead, Payload};
use aes_gcm::{Aes256Gcm, KeyInit, Nonce};
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use chrono::Utc;
use rand::rngs::OsRng;
use rand::RngCore;
use tracing::trace;

use super::Cipher;
use crate::core::keys::MasterKey;
use crate::error::{CipherError, Result};

/// Token format version.
const VERSION: u8 = 0x01;

/// Version byte plus big-endian timestamp.
const HEADER_SIZE: usize = 9;

/// AES-GCM nonce length.
const NONCE_SIZE: usize = 12;

/// GCM authentication tag length.
const TAG_SIZE: usize = 16;

/// AES-256-GCM cryptographic backend.
pub struct Gcm;

impl Cipher for Gcm {
    fn name(&self) -> &'static str {
        "aes-256-gcm"
    }

    fn encrypt(&self, plaintext: &str, key: &MasterKey) -> Result<String> {
        trace!(plaintext_len = plaintext.len(), "encrypting");

        let mut header = [0u8; HEADER_SIZE];
        header[0] = VERSION;
        let timestamp = Utc::now().timestamp().max(0) as u64;
        header[1..].copy_from_slice(&timestamp.to_be_bytes());

        let mut nonce_bytes = [0u8; NONCE_SIZE];
        OsRng.fill_bytes(&mut nonce_bytes);

        let cipher = Aes256Gcm::new_from_slice(key.bytes())
            .map_err(|e| CipherError::EncryptionFailed(e.to_string()))?;
        let ciphertext = cipher
            .encrypt(
                Nonce::from_slice(&nonce_bytes),
                Payload {
                    msg: plaintext.as_bytes(),
                    aad: &header,
                },
            )
            .map_err(|e| CipherError::EncryptionFailed(e.to_string()))?;

        let mut token = Vec::with_capacity(HEADER_SIZE + NONCE_SIZE + ciphertext.len());
        token.extend_from_slice(&header);
        token.extend_from_slice(&nonce_bytes);
        token.extend_from_slice(&ciphertext);

        trace!(token_len = token.len(), "encrypted");

        Ok(URL_SAFE_NO_PAD.encode(token))
    }

    fn decrypt(&self, token: &str, key: &MasterKey) -> Result<String> {
        trace!(token_len = token.len(), "decrypting");

        let raw = URL_SAFE_NO_PAD
            .decode(token)
            .map_err(|e| CipherError::Format(format!("base64 decode failed: {}", e)))?;

        if raw.len() < HEADER_SIZE + NONCE_SIZE + TAG_SIZE {
            return Err(CipherError::Format("token too short".to_string()).into());
        }
        if raw[0] != VERSION {
            return Err(
                CipherError::Format(format!("unknown token version {:#04x}", raw[0])).into(),
            );
        }

        let (header, rest) = raw.split_at(HEADER_SIZE);
        let (nonce_bytes, ciphertext) = rest.split_at(NONCE_SIZE);

        let cipher = Aes256Gcm::new_from_slice(key.bytes())
            .map_err(|e| CipherError::Format(e.to_string()))?;
        let plaintext = cipher
            .decrypt(
                Nonce::from_slice(nonce_bytes),
                Payload {
                    msg: ciphertext,
                    aad: header,
                },
            )
            .map_err(|_| CipherError::Integrity)?;

        trace!(plaintext_len = plaintext.len(), "decrypted");

        String::from_utf8(plaintext)
            .map_err(|_| CipherError::Format("decrypted payload is not valid UTF-8".to_string()).into())
    }
}
