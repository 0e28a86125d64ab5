//! # Cipher and Key Material Types
//!
//! Type alias for the concrete CTR instantiation, plus owned wrappers for
//! key and IV material.
//!
//! ## Type Categories
//!
//! - [`Aes128Ctr`] - AES-128 in CTR mode with a full-width 128-bit
//!   big-endian counter
//! - [`Aes128Key`] - 16-byte symmetric key, zeroized on drop
//! - [`Iv`] - 16-byte initialization vector (not secret, not zeroized)
//!
//! The key type never exposes its bytes through `Debug`, and both types
//! reject wrong-sized input in [`from_slice`](Aes128Key::from_slice)
//! before any I/O happens.

use aes::Aes128;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::consts::{IV_SIZE, KEY_SIZE};
use crate::error::CtrcryptError;

/// AES-128-CTR with the entire 16-byte block treated as one big-endian
/// counter. This is the layout assumed by [`crate::counter_for_block`]:
/// the counter for block `i` is `iv + i` over the full 128-bit width.
pub type Aes128Ctr = ctr::Ctr128BE<Aes128>;

/// An owned 128-bit AES key.
///
/// Wiped from memory on drop. One key may encrypt many artifacts, but
/// each artifact must get a fresh [`Iv`] — that pairing rule is the
/// caller's responsibility and is not enforceable here.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Aes128Key([u8; KEY_SIZE]);

impl Aes128Key {
    pub fn new(bytes: [u8; KEY_SIZE]) -> Self {
        Self(bytes)
    }

    /// Build a key from a variable-length slice, rejecting wrong sizes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, CtrcryptError> {
        let arr: [u8; KEY_SIZE] = bytes.try_into().map_err(|_| {
            CtrcryptError::Config(format!(
                "key must be {KEY_SIZE} bytes, got {}",
                bytes.len()
            ))
        })?;
        Ok(Self(arr))
    }

    pub fn as_bytes(&self) -> &[u8; KEY_SIZE] {
        &self.0
    }
}

impl std::fmt::Debug for Aes128Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Aes128Key(<redacted>)")
    }
}

/// A 16-byte initialization vector.
///
/// Interpreted as raw bytes when seeding block 0, and as an unsigned
/// big-endian integer by the counter arithmetic. IVs are public values
/// and may be persisted alongside the ciphertext they belong to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Iv([u8; IV_SIZE]);

impl Iv {
    pub fn new(bytes: [u8; IV_SIZE]) -> Self {
        Self(bytes)
    }

    /// Build an IV from a variable-length slice, rejecting wrong sizes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, CtrcryptError> {
        let arr: [u8; IV_SIZE] = bytes.try_into().map_err(|_| {
            CtrcryptError::Config(format!(
                "IV must be {IV_SIZE} bytes, got {}",
                bytes.len()
            ))
        })?;
        Ok(Self(arr))
    }

    pub fn as_bytes(&self) -> &[u8; IV_SIZE] {
        &self.0
    }
}
