//! src/decryptor/partial.rs
//! Random-access decryption of an interior run of blocks.
//!
//! This is the seek path: instead of replaying the keystream from the
//! start of the stream, the cipher is initialized with the counter value
//! encryption would have reached at the requested block, so cost scales
//! with `block_count` and not with `block_index`.

use ctr::cipher::{KeyIvInit, StreamCipher};
use std::io::{Read, Seek, SeekFrom};

use crate::aliases::{Aes128Ctr, Aes128Key, Iv};
use crate::consts::BLOCK_SIZE;
use crate::counter::counter_for_block;
use crate::error::CtrcryptError;

/// Decrypts blocks `[block_index, block_index + block_count)` from a
/// seekable ciphertext source.
///
/// Returns up to `block_count * 16` bytes of plaintext, byte-identical
/// to the corresponding slice of a full-stream decryption with the same
/// key and IV. A source that ends inside the window yields a shorter
/// result, and a window entirely past the end yields an empty one —
/// neither is an error, so callers must check the returned length.
///
/// `block_count == 0` and ranges whose byte offsets overflow are
/// rejected as [`CtrcryptError::Config`] before any I/O. The caller's
/// read cursor is consumed for the duration of the call; concurrent
/// range reads of one file need independent handles.
pub fn decrypt_blocks<R>(
    key: &Aes128Key,
    iv: &Iv,
    mut source: R,
    block_index: u64,
    block_count: u64,
) -> Result<Vec<u8>, CtrcryptError>
where
    R: Read + Seek,
{
    if block_count == 0 {
        return Err(CtrcryptError::Config(
            "block count must be positive".to_string(),
        ));
    }

    let offset = block_index
        .checked_mul(BLOCK_SIZE as u64)
        .ok_or_else(|| CtrcryptError::Config(format!("block index {block_index} out of range")))?;
    let length = block_count
        .checked_mul(BLOCK_SIZE as u64)
        .and_then(|len| usize::try_from(len).ok())
        .ok_or_else(|| CtrcryptError::Config(format!("block count {block_count} out of range")))?;

    let counter = counter_for_block(iv.as_bytes(), block_index);
    let mut cipher = Aes128Ctr::new(key.as_bytes().into(), (&counter).into());

    // Seeking past EOF is legal; the reads below simply return 0 there,
    // which is exactly the empty-result contract for out-of-range windows.
    source.seek(SeekFrom::Start(offset))?;

    let mut output = vec![0u8; length];
    let available = read_up_to(&mut source, &mut output)?;
    output.truncate(available);

    cipher.apply_keystream(&mut output);
    Ok(output)
}

/// Reads until `buf` is full or the source is exhausted, returning the
/// byte count actually read. Unlike `read_exact`, a short source is not
/// an error here.
fn read_up_to<R: Read>(source: &mut R, buf: &mut [u8]) -> Result<usize, CtrcryptError> {
    let mut filled = 0;
    while filled < buf.len() {
        let n = source.read(&mut buf[filled..])?;
        if n == 0 {
            break;
        }
        filled += n;
    }
    Ok(filled)
}
