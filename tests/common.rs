//! tests/common.rs
//! Shared helpers and fixtures for the integration tests.

use ctrcrypt_rs::{decrypt_stream, encrypt_stream, Aes128Key, Iv};
use std::io::Cursor;

/// All-zero key, matching the concrete scenario fixtures.
#[allow(dead_code)] // Used across multiple test files
pub fn zero_key() -> Aes128Key {
    Aes128Key::new([0u8; 16])
}

/// All-zero IV, matching the concrete scenario fixtures.
#[allow(dead_code)] // Used across multiple test files
pub fn zero_iv() -> Iv {
    Iv::new([0u8; 16])
}

/// One-shot in-memory encryption.
#[allow(dead_code)] // Used across multiple test files
pub fn encrypt_to_vec(key: &Aes128Key, iv: &Iv, plaintext: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(plaintext.len());
    encrypt_stream(key, iv, Cursor::new(plaintext), &mut out).expect("in-memory encrypt");
    out
}

/// One-shot in-memory decryption.
#[allow(dead_code)] // Used across multiple test files
pub fn decrypt_to_vec(key: &Aes128Key, iv: &Iv, ciphertext: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(ciphertext.len());
    decrypt_stream(key, iv, Cursor::new(ciphertext), &mut out).expect("in-memory decrypt");
    out
}
