// src/lib.rs

pub mod aliases;
pub mod codec;
pub mod consts;
pub mod counter;
pub mod decryptor;
pub mod encryptor;
pub mod error;
pub mod keygen;
pub mod testfile;

// High-level API — this is what 99% of users import
pub use decryptor::{decrypt_blocks, decrypt_stream};
pub use encryptor::encrypt_stream;
pub use error::CtrcryptError;

pub use aliases::{Aes128Key, Iv};

// Counter arithmetic is public at the root because custom seek flows
// (e.g. driving an externally constructed cipher from a mid-stream
// position) need it directly.
pub use counter::counter_for_block;

pub use keygen::{generate_iv, generate_key};
