//! src/decryptor/stream.rs
//! Whole-stream CTR decryption.

use std::io::{Read, Write};

use crate::aliases::{Aes128Key, Iv};
use crate::encryptor::stream::encrypt_stream;
use crate::error::CtrcryptError;

/// Decrypts `source` into `destination` with AES-128-CTR, returning the
/// number of bytes processed.
///
/// CTR combines keystream and data with XOR, so decryption is the same
/// transform as encryption. Kept as a separate entry point for API
/// clarity; a single shared implementation means the two directions
/// cannot drift apart.
pub fn decrypt_stream<R, W>(
    key: &Aes128Key,
    iv: &Iv,
    source: R,
    destination: W,
) -> Result<u64, CtrcryptError>
where
    R: Read,
    W: Write,
{
    encrypt_stream(key, iv, source, destination)
}
