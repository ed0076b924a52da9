//! Constants used throughout lockbox.
//!
//! Centralizes default file names.

/// Default master key file name.
///
/// Must be excluded from version control by the user.
pub const DEFAULT_KEY_FILE: &str = "secret.txt";

/// Default secrets mapping file name.
pub const DEFAULT_SECRETS_FILE: &str = "secrets.json";
