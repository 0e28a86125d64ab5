//! src/encryptor/stream.rs
//! Whole-stream CTR encryption — chunked, length-preserving.

use ctr::cipher::{KeyIvInit, StreamCipher};
use std::io::{Read, Write};

use crate::aliases::{Aes128Ctr, Aes128Key, Iv};
use crate::consts::STREAM_BUF_SIZE;
use crate::error::CtrcryptError;

/// Encrypts `source` into `destination` with AES-128-CTR, returning the
/// number of bytes processed.
///
/// Block 0 is keyed by the raw IV; the cipher advances the counter
/// itself as bytes flow through, so chunk boundaries never affect the
/// output. CTR produces no padding or tag: the ciphertext has exactly
/// the length of the plaintext, and there is no finalization step.
///
/// I/O errors abort immediately and leave the destination in an
/// undefined, possibly truncated state.
pub fn encrypt_stream<R, W>(
    key: &Aes128Key,
    iv: &Iv,
    mut source: R,
    mut destination: W,
) -> Result<u64, CtrcryptError>
where
    R: Read,
    W: Write,
{
    let mut cipher = Aes128Ctr::new(key.as_bytes().into(), iv.as_bytes().into());

    let mut buf = [0u8; STREAM_BUF_SIZE];
    let mut total: u64 = 0;

    loop {
        let n = source.read(&mut buf)?;
        if n == 0 {
            break;
        }
        cipher.apply_keystream(&mut buf[..n]);
        destination.write_all(&buf[..n])?;
        total += n as u64;
    }

    destination.flush()?;
    Ok(total)
}
