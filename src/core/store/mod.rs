//! Secret mapping persistence.
//!
//! Defines the [`DictionaryStore`] trait and selects a backend from the
//! mapping file's extension: `.json` is always available, `.yml`/`.yaml`
//! require the `yaml` cargo feature. Without the feature, YAML paths fail
//! with `StoreError::UnsupportedFormat` at first use rather than at load
//! time.
//!
//! Saves rewrite the whole file through a temp-file-then-rename sequence so
//! a reader never observes a half-written mapping.
//!
//! ## Adding a New Backend
//!
//! 1. Implement the `DictionaryStore` trait
//! 2. Add the implementation in a new file (e.g., `toml.rs`)
//! 3. Wire its extension(s) into [`for_path`]

use std::io::Write;
use std::path::Path;

use crate::core::types::SecretMapping;
use crate::error::{Result, StoreError};

mod json;

#[cfg(feature = "yaml")]
mod yaml;

pub use json::Json;

#[cfg(feature = "yaml")]
pub use yaml::Yaml;

/// Mapping storage trait.
///
/// Abstracts loading and saving the key-to-ciphertext mapping so formats
/// can be added without touching the vault.
pub trait DictionaryStore {
    /// Load the full mapping from `path`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` when the path does not exist; callers
    /// that want "missing file means empty mapping" map it themselves.
    fn load(&self, path: &Path) -> Result<SecretMapping>;

    /// Overwrite `path` with the full serialized mapping.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if serialization or the atomic write fails.
    fn save(&self, mapping: &SecretMapping, path: &Path) -> Result<()>;

    /// Backend name for display/config.
    fn name(&self) -> &'static str;
}

/// Select a storage backend from a path's extension.
///
/// # Errors
///
/// Returns `StoreError::UnsupportedFormat` for unrecognized extensions, and
/// for `.yml`/`.yaml` when the `yaml` feature is disabled.
pub fn for_path(path: &Path) -> Result<Box<dyn DictionaryStore>> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => Ok(Box::new(Json)),
        #[cfg(feature = "yaml")]
        Some("yml") | Some("yaml") => Ok(Box::new(Yaml)),
        _ => Err(StoreError::UnsupportedFormat(path.to_path_buf()).into()),
    }
}

/// Write `contents` to `path` via a temp file in the same directory followed
/// by a rename, keeping the file internally consistent at every instant.
pub(crate) fn write_atomic(path: &Path, contents: &[u8]) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(|source| {
        StoreError::WriteFailed {
            path: path.to_path_buf(),
            source,
        }
    })?;
    tmp.write_all(contents).map_err(|source| StoreError::WriteFailed {
        path: path.to_path_buf(),
        source,
    })?;
    tmp.persist(path).map_err(|e| StoreError::WriteFailed {
        path: path.to_path_buf(),
        source: e.error,
    })?;

    Ok(())
}
