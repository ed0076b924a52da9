use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type wrapping the per-component taxonomies.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Key(#[from] KeyError),

    #[error(transparent)]
    Cipher(#[from] CipherError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Master key generation, persistence, and resolution failures.
///
/// `FileMissing` and `EnvMissing` mean "no key there" rather than a broken
/// filesystem; callers decide whether that is fatal. The vault operations
/// treat it as fatal and never substitute a fallback key.
#[derive(Error, Debug)]
pub enum KeyError {
    #[error("master key file not found: {}", .0.display())]
    FileMissing(PathBuf),

    #[error("environment variable not set: {0}")]
    EnvMissing(String),

    #[error("invalid master key encoding: {0}")]
    InvalidEncoding(String),

    #[error("failed to read master key file {}: {source}", .path.display())]
    ReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write master key file {}: {source}", .path.display())]
    WriteFailed {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Encryption and decryption failures.
#[derive(Error, Debug)]
pub enum CipherError {
    /// The authentication tag did not verify: wrong key, or the token was
    /// tampered with or corrupted. Decryption is all-or-nothing.
    #[error("integrity check failed: wrong key or tampered ciphertext")]
    Integrity,

    /// The token could not be parsed into its fields.
    #[error("malformed encrypted record: {0}")]
    Format(String),

    #[error("encryption failed: {0}")]
    EncryptionFailed(String),
}

/// Secret mapping load/save failures.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The mapping file does not exist. The vault maps this to an empty
    /// mapping; it is only an error at the store layer.
    #[error("secrets file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("unsupported secrets file format: {}", .0.display())]
    UnsupportedFormat(PathBuf),

    #[error("failed to read secrets file {}: {source}", .path.display())]
    ReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write secrets file {}: {source}", .path.display())]
    WriteFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("malformed secrets file {}: {reason}", .path.display())]
    Parse { path: PathBuf, reason: String },

    #[error("failed to serialize secrets: {0}")]
    Serialize(String),
}

pub type Result<T> = std::result::Result<T, Error>;
