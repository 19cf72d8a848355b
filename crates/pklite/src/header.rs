use std::io::{Cursor, Read, Seek};

use byyte::ReadAt;

/// File offset of the word the size estimate is derived from.
pub const ESTIMATE_FIELD_OFFSET: u64 = 0x61;

/// Estimates the decompressed size of a PKLITE executable from the word at
/// [`ESTIMATE_FIELD_OFFSET`]. The result tends to run slightly high and is
/// only good as a capacity hint. `None` when the field gives no positive
/// size.
pub fn estimate_length<R: Read + Seek>(reader: &mut R) -> std::io::Result<Option<usize>> {
    let value = i64::from(reader.read_i16_le_at(ESTIMATE_FIELD_OFFSET)?);
    let length = value * 0x10 - 0x450;
    tracing::debug!(value, length, "header size estimate");

    Ok(usize::try_from(length).ok().filter(|&n| n > 0))
}

pub fn estimate_length_from_bytes(image: &[u8]) -> std::io::Result<Option<usize>> {
    estimate_length(&mut Cursor::new(image))
}
