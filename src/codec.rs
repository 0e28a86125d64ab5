//! Base64 codec for key and IV material.
//!
//! Lossless, reversible, and entirely independent of the cipher logic —
//! used when raw bytes are inconvenient, e.g. storing a key or IV in a
//! text configuration file.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::error::CtrcryptError;

/// Encodes bytes to standard-alphabet base64.
pub fn encode_base64(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Decodes standard-alphabet base64 text back to bytes.
pub fn decode_base64(text: &str) -> Result<Vec<u8>, CtrcryptError> {
    STANDARD
        .decode(text)
        .map_err(|e| CtrcryptError::Codec(e.to_string()))
}
