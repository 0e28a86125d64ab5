//! Key and IV generation from the operating system's secure RNG.
//!
//! Kept separate from the cipher core: the engine accepts any
//! [`Aes128Key`]/[`Iv`], these helpers just produce fresh ones.

use rand::rngs::OsRng;
use rand::RngCore;

use crate::aliases::{Aes128Key, Iv};
use crate::consts::{IV_SIZE, KEY_SIZE};

/// Generates a random 128-bit AES key.
pub fn generate_key() -> Aes128Key {
    let mut bytes = [0u8; KEY_SIZE];
    OsRng.fill_bytes(&mut bytes);
    Aes128Key::new(bytes)
}

/// Generates a random 16-byte IV.
///
/// Must be called freshly for every distinct plaintext encrypted under a
/// given key. Reusing a key/IV pair across two plaintexts leaks their
/// XOR — CTR mode offers no protection against this and neither does
/// this crate.
pub fn generate_iv() -> Iv {
    let mut bytes = [0u8; IV_SIZE];
    OsRng.fill_bytes(&mut bytes);
    Iv::new(bytes)
}
