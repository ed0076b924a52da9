//! Master key generation, persistence, and resolution.
//!
//! Keys are always machine-generated from the OS CSPRNG; the library never
//! accepts a human-chosen master key. Resolution reads a previously
//! persisted key back from a file or an environment variable.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use rand::rngs::OsRng;
use rand::RngCore;
use tracing::debug;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::core::constants;
use crate::error::{KeyError, Result};

/// Master key length in bytes (256-bit).
pub const KEY_SIZE: usize = 32;

/// Symmetric master key material.
///
/// Opaque 32-byte secret, zeroized on drop. Held in memory only for the
/// duration of an operation; the vault never caches it across calls.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct MasterKey([u8; KEY_SIZE]);

impl MasterKey {
    /// Generate a new random master key from the OS CSPRNG.
    pub fn generate() -> Self {
        let mut bytes = [0u8; KEY_SIZE];
        OsRng.fill_bytes(&mut bytes);
        debug!("generated new master key");
        Self(bytes)
    }

    /// Decode a key from its textual (URL-safe base64) encoding.
    ///
    /// # Errors
    ///
    /// Returns `KeyError::InvalidEncoding` if the input is not valid base64
    /// or does not decode to exactly [`KEY_SIZE`] bytes.
    pub fn from_encoded(encoded: &str) -> Result<Self> {
        let decoded = URL_SAFE_NO_PAD
            .decode(encoded.trim())
            .map_err(|e| KeyError::InvalidEncoding(e.to_string()))?;
        let bytes: [u8; KEY_SIZE] = decoded
            .try_into()
            .map_err(|_| KeyError::InvalidEncoding(format!("expected {} bytes", KEY_SIZE)))?;
        Ok(Self(bytes))
    }

    /// Textual encoding of the key (URL-safe base64, no padding).
    pub fn encoded(&self) -> String {
        URL_SAFE_NO_PAD.encode(self.0)
    }

    /// Write the key's textual encoding to `destination`, overwriting any
    /// existing content. The file is restricted to `0600` on Unix.
    ///
    /// Excluding the file from version control is the caller's job.
    ///
    /// # Errors
    ///
    /// Returns `KeyError::WriteFailed` if the destination cannot be written.
    pub fn persist(&self, destination: &Path) -> Result<()> {
        fs::write(destination, format!("{}\n", self.encoded())).map_err(|source| {
            KeyError::WriteFailed {
                path: destination.to_path_buf(),
                source,
            }
        })?;

        // Restrict permissions on key file (Unix only)
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(destination, fs::Permissions::from_mode(0o600)).map_err(
                |source| KeyError::WriteFailed {
                    path: destination.to_path_buf(),
                    source,
                },
            )?;
        }

        debug!(path = %destination.display(), "master key persisted");
        Ok(())
    }

    pub(crate) fn bytes(&self) -> &[u8; KEY_SIZE] {
        &self.0
    }
}

impl fmt::Debug for MasterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("MasterKey(..)")
    }
}

/// Where a master key is resolved from when the caller does not supply one.
#[derive(Debug, Clone)]
pub enum KeySource {
    /// Read the key's textual encoding from a file.
    File(PathBuf),
    /// Read the key's textual encoding from a process environment variable.
    Env(String),
}

impl Default for KeySource {
    fn default() -> Self {
        Self::File(PathBuf::from(constants::DEFAULT_KEY_FILE))
    }
}

impl KeySource {
    /// Resolve a master key from this source.
    ///
    /// # Errors
    ///
    /// Returns `KeyError::FileMissing` / `KeyError::EnvMissing` when there is
    /// no key at the source. Callers decide whether that is fatal.
    pub fn resolve(&self) -> Result<MasterKey> {
        match self {
            Self::File(path) => {
                if !path.exists() {
                    return Err(KeyError::FileMissing(path.clone()).into());
                }
                let contents =
                    fs::read_to_string(path).map_err(|source| KeyError::ReadFailed {
                        path: path.clone(),
                        source,
                    })?;
                debug!(path = %path.display(), "master key resolved from file");
                MasterKey::from_encoded(&contents)
            }
            Self::Env(name) => {
                let value =
                    std::env::var(name).map_err(|_| KeyError::EnvMissing(name.clone()))?;
                debug!(var = %name, "master key resolved from environment");
                MasterKey::from_encoded(&value)
            }
        }
    }
}
