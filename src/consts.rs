//! Global constants for the CTR cipher core.

/// AES block size in bytes — also the granularity of partial decryption.
pub const BLOCK_SIZE: usize = 16;

/// AES-128 key size in bytes.
pub const KEY_SIZE: usize = 16;

/// IV size in bytes (one full counter block).
pub const IV_SIZE: usize = 16;

/// Chunk size for streaming encrypt/decrypt loops.
///
/// Purely a throughput knob: any positive value produces byte-identical
/// output because the keystream position is tracked by the cipher, not
/// by the chunking.
pub const STREAM_BUF_SIZE: usize = 4096;
