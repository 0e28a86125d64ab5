//! Synthetic fixed-record test-file generator.
//!
//! Produces a stream of 16-byte records, each carrying its own record
//! number: the decimal index padded to 14 characters with `#`, followed
//! by CRLF. Because every record is exactly one AES block, decrypting
//! block `i` of the encrypted file must reveal record `i` — a direct,
//! human-readable check of the seek path.

use std::io::Write;

use crate::consts::BLOCK_SIZE;
use crate::error::CtrcryptError;

/// Writes `record_count` fixed-size records to `destination`.
///
/// Record indices above 14 decimal digits no longer fit the fixed
/// width; that is ~10^14 records (1.6 PB) and rejected up front.
pub fn write_numbered_records<W: Write>(
    mut destination: W,
    record_count: u64,
) -> Result<(), CtrcryptError> {
    const DIGIT_WIDTH: u64 = 100_000_000_000_000; // 10^14

    if record_count > DIGIT_WIDTH {
        return Err(CtrcryptError::Config(format!(
            "record count {record_count} exceeds the fixed record width"
        )));
    }

    for i in 0..record_count {
        let record = format!("{i:#<width$}\r\n", width = BLOCK_SIZE - 2);
        debug_assert_eq!(record.len(), BLOCK_SIZE);
        destination.write_all(record.as_bytes())?;
    }

    destination.flush()?;
    Ok(())
}
