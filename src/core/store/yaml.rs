//! YAML mapping backend (feature `yaml`).

use std::fs;
use std::path::Path;

use tracing::debug;

use super::{write_atomic, DictionaryStore};
use crate::core::types::SecretMapping;
use crate::error::{Result, StoreError};

/// YAML-backed secret mapping store.
pub struct Yaml;

impl DictionaryStore for Yaml {
    fn name(&self) -> &'static str {
        "yaml"
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
            serde_yaml::from_str(&contents).map_err(|e| StoreError::Parse {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;

        debug!(path = %path.display(), entries = mapping.len(), "mapping loaded");
        Ok(mapping)
    }

    fn save(&self, mapping: &SecretMapping, path: &Path) -> Result<()> {
        let contents =
            serde_yaml::to_string(mapping).map_err(|e| StoreError::Serialize(e.to_string()))?;
        write_atomic(path, contents.as_bytes())?;

        debug!(path = %path.display(), entries = mapping.len(), "mapping saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::TempDir;

    #[test]
    fn test_save_load_roundtrip() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("secrets.yaml");

        let mut mapping = SecretMapping::new();
        mapping.insert("a".to_string(), "token-a".to_string());
        mapping.insert("b".to_string(), "token-b".to_string());

        Yaml.save(&mapping, &path).unwrap();
        let loaded = Yaml.load(&path).unwrap();

        assert_eq!(loaded, mapping);
    }

    #[test]
    fn test_load_missing_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("absent.yaml");

        let result = Yaml.load(&path);
        assert!(
            matches!(result, Err(Error::Store(StoreError::NotFound(p))) if p == path)
        );
    }

    #[test]
    fn test_load_malformed_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("secrets.yaml");
        fs::write(&path, "key: [unclosed").unwrap();

        let result = Yaml.load(&path);
        assert!(matches!(result, Err(Error::Store(StoreError::Parse { .. }))));
    }
}
