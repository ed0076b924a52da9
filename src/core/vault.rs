//! Top-level vault operations.
//!
//! Orchestrates key resolution, encryption, and mapping persistence. Every
//! operation is an independent load-mutate-save sequence: the vault holds no
//! session state and never caches the master key between calls.
//!
//! Two `save_secret` calls against the same mapping path must not interleave
//! their load/mutate/save sequences: the later writer's load would predate
//! the earlier writer's save and drop its update. Concurrent use requires an
//! external lock scoped to the mapping path.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::core::cipher;
use crate::core::keys::{KeySource, MasterKey};
use crate::core::store::{self, DictionaryStore};
use crate::core::types::{SecretKey, SecretMapping};
use crate::error::{Error, Result, StoreError};

/// A secret vault over one mapping file.
pub struct Vault {
    key_source: KeySource,
    secrets_path: PathBuf,
    store: Box<dyn DictionaryStore>,
}

impl Vault {
    /// Open a vault over `secrets_path`, picking the storage backend from
    /// the file extension. The file itself does not need to exist yet.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::UnsupportedFormat` if the extension is not
    /// recognized (or requires a disabled cargo feature).
    pub fn open(key_source: KeySource, secrets_path: impl Into<PathBuf>) -> Result<Self> {
        let secrets_path = secrets_path.into();
        let store = store::for_path(&secrets_path)?;
        Ok(Self {
            key_source,
            secrets_path,
            store,
        })
    }

    /// Generate a new master key, optionally persisting it to `destination`.
    ///
    /// Always returns the key: callers that skip persistence are expected to
    /// record it themselves.
    ///
    /// # Errors
    ///
    /// Returns `KeyError::WriteFailed` if persistence was requested and the
    /// destination cannot be written.
    pub fn create_master_key(&self, destination: Option<&Path>) -> Result<MasterKey> {
        let key = MasterKey::generate();
        if let Some(path) = destination {
            key.persist(path)?;
        }
        Ok(key)
    }

    /// Encrypt `value` and store it under `key`, overwriting any prior value
    /// for the same key (last-write-wins) and leaving other entries intact.
    ///
    /// The whole mapping file is rewritten even when only one key changed; a
    /// missing file starts as an empty mapping.
    ///
    /// # Errors
    ///
    /// Key resolution failures are fatal to the call; no fallback key is
    /// ever substituted. Store and cipher failures propagate unchanged.
    pub fn save_secret(&self, key: &str, value: &str, master: Option<&MasterKey>) -> Result<()> {
        let master = self.resolve_key(master)?;
        let mut mapping = self.load_mapping()?;

        let record = cipher::encrypt(value, &master)?;
        mapping.insert(key.to_string(), record);
        self.store.save(&mapping, &self.secrets_path)?;

        debug!(key, path = %self.secrets_path.display(), "secret saved");
        Ok(())
    }

    /// Decrypt and return the secret stored under `key`.
    ///
    /// Returns `Ok(None)` when the key is absent from the mapping (or the
    /// mapping file does not exist). Absence is a normal outcome, not an
    /// error, and callers must check for it.
    ///
    /// # Errors
    ///
    /// Key resolution failures are fatal to the call. A present-but-
    /// undecryptable entry propagates `CipherError::Integrity`.
    pub fn get_secret(&self, key: &str, master: Option<&MasterKey>) -> Result<Option<String>> {
        let master = self.resolve_key(master)?;
        let mapping = self.load_mapping()?;

        let record = match mapping.get(key) {
            Some(record) => record,
            None => {
                debug!(key, path = %self.secrets_path.display(), "secret not present");
                return Ok(None);
            }
        };

        let plaintext = cipher::decrypt(record, &master)?;
        Ok(Some(plaintext))
    }

    /// List all secret keys (names only, no decryption).
    pub fn list_secrets(&self) -> Result<Vec<SecretKey>> {
        Ok(self.load_mapping()?.keys().cloned().collect())
    }

    /// Remove the secret stored under `key`.
    ///
    /// Returns `Ok(false)` when the key was absent, mirroring the
    /// absent-result shape of [`Vault::get_secret`].
    pub fn remove_secret(&self, key: &str) -> Result<bool> {
        let mut mapping = self.load_mapping()?;
        if mapping.remove(key).is_none() {
            return Ok(false);
        }
        self.store.save(&mapping, &self.secrets_path)?;

        debug!(key, path = %self.secrets_path.display(), "secret removed");
        Ok(true)
    }

    /// A caller-supplied key wins; otherwise resolve from the configured
    /// source, freshly on every call.
    fn resolve_key(&self, master: Option<&MasterKey>) -> Result<MasterKey> {
        match master {
            Some(key) => Ok(key.clone()),
            None => self.key_source.resolve(),
        }
    }

    /// A missing mapping file is an empty mapping, never an error here.
    fn load_mapping(&self) -> Result<SecretMapping> {
        match self.store.load(&self.secrets_path) {
            Ok(mapping) => Ok(mapping),
            Err(Error::Store(StoreError::NotFound(_))) => Ok(SecretMapping::new()),
            Err(e) => Err(e),
        }
    }
}
