// src/encryptor/mod.rs
pub(crate) mod stream;

pub use stream::encrypt_stream;
