//! Shared helpers for integration tests.
#![allow(dead_code)]

pub mod fixtures;

use std::path::PathBuf;

use lockbox::core::keys::{KeySource, MasterKey};
use lockbox::core::vault::Vault;
use tempfile::TempDir;

/// A vault rooted in its own temp directory, with a persisted master key.
pub struct VaultContext {
    pub tmp: TempDir,
    pub key_file: PathBuf,
    pub secrets_file: PathBuf,
    pub key: MasterKey,
}

impl VaultContext {
    /// Set up a vault context using the given secrets file name.
    pub fn new(secrets_name: &str) -> Self {
        let tmp = TempDir::new().unwrap();
        let key_file = tmp.path().join("secret.txt");
        let secrets_file = tmp.path().join(secrets_name);

        let key = MasterKey::generate();
        key.persist(&key_file).unwrap();

        Self {
            tmp,
            key_file,
            secrets_file,
            key,
        }
    }

    /// Open a fresh vault over this context's files, as a new process would.
    pub fn vault(&self) -> Vault {
        Vault::open(KeySource::File(self.key_file.clone()), &self.secrets_file).unwrap()
    }
}
