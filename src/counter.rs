//! Counter normalization for random-access CTR decryption.
//!
//! CTR mode encrypts `iv`, `iv + 1`, `iv + 2`, … to produce its
//! keystream, one counter value per 16-byte block. Decrypting from the
//! middle of a stream therefore only needs the counter value the
//! original encryption would have reached at that block — computed here
//! without touching any preceding data.

use crate::consts::BLOCK_SIZE;

/// Computes the 16-byte counter block used for block `block_index`.
///
/// The IV is read as an unsigned big-endian 128-bit integer and
/// `block_index` is added with wraparound at 128 bits. Serializing the
/// fixed-width result back to big-endian bytes gives exactly the two
/// normalization rules this layout needs: overflow carry beyond 16
/// bytes is truncated (the wrap), and values with leading zero bytes
/// stay left-padded to the full block width.
///
/// Pure function, no failure modes: `counter_for_block(iv, 0) == *iv`
/// for every IV, and concurrent callers need no coordination.
pub fn counter_for_block(iv: &[u8; BLOCK_SIZE], block_index: u64) -> [u8; BLOCK_SIZE] {
    u128::from_be_bytes(*iv)
        .wrapping_add(u128::from(block_index))
        .to_be_bytes()
}
