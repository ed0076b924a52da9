//! Tests for cryptographic operations.

use lockbox::core::cipher;
use lockbox::core::keys::MasterKey;
use lockbox::error::{CipherError, Error};
use proptest::prelude::*;

mod support;

use support::fixtures::AWKWARD_PLAINTEXT;

#[test]
fn test_encrypt_decrypt_roundtrip() {
    let key = MasterKey::generate();

    let plaintext = "super secret password 123!";
    let token = cipher::encrypt(plaintext, &key).unwrap();

    // Transport-safe token, never the plaintext
    assert!(!token.contains(plaintext));

    let decrypted = cipher::decrypt(&token, &key).unwrap();
    assert_eq!(decrypted, plaintext);
}

#[test]
fn test_repeated_encryption_yields_distinct_tokens() {
    let key = MasterKey::generate();

    let first = cipher::encrypt("secret", &key).unwrap();
    let second = cipher::encrypt("secret", &key).unwrap();

    assert_ne!(first, second);
    assert_eq!(cipher::decrypt(&first, &key).unwrap(), "secret");
    assert_eq!(cipher::decrypt(&second, &key).unwrap(), "secret");
}

#[test]
fn test_decrypt_with_wrong_key_fails() {
    let key1 = MasterKey::generate();
    let key2 = MasterKey::generate();

    let token = cipher::encrypt("secret", &key1).unwrap();

    let result = cipher::decrypt(&token, &key2);
    assert!(matches!(result, Err(Error::Cipher(CipherError::Integrity))));
}

#[test]
fn test_decrypt_garbage_fails_as_format_error() {
    let key = MasterKey::generate();

    let result = cipher::decrypt("definitely not a token", &key);
    assert!(matches!(result, Err(Error::Cipher(CipherError::Format(_)))));
}

#[test]
fn test_encrypt_empty_string() {
    let key = MasterKey::generate();

    let token = cipher::encrypt("", &key).unwrap();
    assert_eq!(cipher::decrypt(&token, &key).unwrap(), "");
}

#[test]
fn test_encrypt_awkward_plaintext() {
    let key = MasterKey::generate();

    let token = cipher::encrypt(AWKWARD_PLAINTEXT, &key).unwrap();
    assert_eq!(cipher::decrypt(&token, &key).unwrap(), AWKWARD_PLAINTEXT);
}

proptest! {
    #[test]
    fn prop_roundtrip_preserves_any_plaintext(plaintext in ".{0,256}") {
        let key = MasterKey::generate();
        let token = cipher::encrypt(&plaintext, &key).unwrap();
        prop_assert_eq!(cipher::decrypt(&token, &key).unwrap(), plaintext);
    }
}
