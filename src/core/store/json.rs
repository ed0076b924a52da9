//! JSON mapping backend.

use std::fs;
use std::path::Path;

use tracing::debug;

use super::{write_atomic, DictionaryStore};
use crate::core::types::SecretMapping;
use crate::error::{Result, StoreError};

/// JSON-backed secret mapping store.
pub struct Json;

impl DictionaryStore for Json {
    fn name(&self) -> &'static str {
        "json"
    }

    fn load(&self, path: &Path) -> Result<SecretMapping> {
        if !path.exists() {
            return Err(StoreError::NotFound(path.to_path_buf()).into());
        }

        let contents = fs::read_to_string(path).map_err(|source| StoreError::ReadFailed {
            path: path.to_path_buf(),
            source,
        })?;
        let mapping: SecretMapping =
            serde_json::from_str(&contents).map_err(|e| StoreError::Parse {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;

        debug!(path = %path.display(), entries = mapping.len(), "mapping loaded");
        Ok(mapping)
    }

    fn save(&self, mapping: &SecretMapping, path: &Path) -> Result<()> {
        let contents = serde_json::to_string_pretty(mapping)
            .map_err(|e| StoreError::Serialize(e.to_string()))?;
        write_atomic(path, contents.as_bytes())?;

        debug!(path = %path.display(), entries = mapping.len(), "mapping saved");
        Ok(())
    }
}
