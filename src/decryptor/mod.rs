// src/decryptor/mod.rs
pub(crate) mod partial;
pub(crate) mod stream;

pub use partial::decrypt_blocks;
pub use stream::decrypt_stream;
