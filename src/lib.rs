//! Lockbox - local encrypted secret storage for developers.
//!
//! Keeps credentials out of source control: values are encrypted with a
//! machine-generated symmetric master key and persisted in a keyed mapping
//! file (JSON or YAML) that is safe to commit.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── error             # Error taxonomy
//! └── core/             # Core library components
//!     ├── keys          # Master key generation, persistence, resolution
//!     ├── cipher/       # Authenticated encryption
//!     │   ├── mod       # Cipher trait
//!     │   └── gcm       # AES-256-GCM token implementation
//!     ├── store/        # Mapping persistence
//!     │   ├── mod       # DictionaryStore trait
//!     │   ├── json      # JSON backend
//!     │   └── yaml      # YAML backend (feature `yaml`)
//!     └── vault         # Top-level operations
//! ```
//!
//! # Features
//!
//! - Machine-generated 256-bit master keys, resolved from a file or an
//!   environment variable
//! - AES-256-GCM authenticated encryption with a fresh nonce per value
//! - Merge-on-write persistence: each save rewrites the whole mapping file
//!   atomically
//! - JSON and YAML mapping formats, selected by file extension
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! use lockbox::core::keys::KeySource;
//! use lockbox::core::vault::Vault;
//!
//! # fn main() -> lockbox::error::Result<()> {
//! let vault = Vault::open(KeySource::default(), "secrets.json")?;
//! let key = vault.create_master_key(Some(Path::new("secret.txt")))?;
//!
//! vault.save_secret("db_password", "s3cr3t", Some(&key))?;
//! let value = vault.get_secret("db_password", Some(&key))?;
//! assert_eq!(value.as_deref(), Some("s3cr3t"));
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod error;
