use crate::error::FormatError;

pub const GIF87A_SIGNATURE: &[u8; 6] = b"GIF87a";
pub const GIF89A_SIGNATURE: &[u8; 6] = b"GIF89a";

const DIMENSIONS_OFFSET: usize = 6;

#[inline]
pub fn matches_signature(data: &[u8]) -> bool {
    data.len() >= GIF87A_SIGNATURE.len()
        && (&data[..6] == GIF87A_SIGNATURE || &data[..6] == GIF89A_SIGNATURE)
}

/// Reads the logical-screen width and height of a sniffed GIF buffer,
/// little-endian.
pub fn parse_dimensions(data: &[u8]) -> Result<(u16, u16), FormatError> {
    if data.len() < DIMENSIONS_OFFSET + 4 {
        return Err(FormatError::ShortHeader);
    }

    let width = u16::from_le_bytes([data[DIMENSIONS_OFFSET], data[DIMENSIONS_OFFSET + 1]]);
    let height = u16::from_le_bytes([data[DIMENSIONS_OFFSET + 2], data[DIMENSIONS_OFFSET + 3]]);

    Ok((width, height))
}
