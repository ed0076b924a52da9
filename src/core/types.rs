//! Type aliases for domain concepts.
//!
//! Provides semantic type aliases to make function signatures more descriptive.

use std::collections::BTreeMap;

/// A secret's identifier within the mapping (e.g., "db_password").
pub type SecretKey = String;

/// A self-contained encrypted record for one value.
///
/// Base64 token carrying everything needed to decrypt except the key itself.
pub type EncryptedValue = String;

/// The full persisted key-to-ciphertext collection.
///
/// `BTreeMap` keeps the serialized file deterministic across saves.
pub type SecretMapping = BTreeMap<SecretKey, EncryptedValue>;
