use crate::error::FormatError;

/// Leading signature bytes (`\x89PNG`) used for sniffing.
pub const PNG_SIGNATURE: [u8; 4] = [0x89, 0x50, 0x4E, 0x47];

/// Fixed value of signature bytes 4-7 (`\r\n\x1a\n`), verified before the
/// IHDR fields are trusted.
pub const PNG_HEADER_CHECK: u32 = 0x0D0A_1A0A;

const WIDTH_OFFSET: usize = 16;
const HEIGHT_OFFSET: usize = 20;

#[inline]
pub fn matches_signature(data: &[u8]) -> bool {
    data.len() >= PNG_SIGNATURE.len() && data[..PNG_SIGNATURE.len()] == PNG_SIGNATURE
}

/// Reads the IHDR width and height of a sniffed PNG buffer, big-endian.
pub fn parse_dimensions(data: &[u8]) -> Result<(u32, u32), FormatError> {
    if data.len() < HEIGHT_OFFSET + 4 {
        return Err(FormatError::ShortHeader);
    }

    let check = u32::from_be_bytes([data[4], data[5], data[6], data[7]]);
    if check != PNG_HEADER_CHECK {
        return Err(FormatError::CorruptPngHeader);
    }

    let width = u32::from_be_bytes([
        data[WIDTH_OFFSET],
        data[WIDTH_OFFSET + 1],
        data[WIDTH_OFFSET + 2],
        data[WIDTH_OFFSET + 3],
    ]);
    let height = u32::from_be_bytes([
        data[HEIGHT_OFFSET],
        data[HEIGHT_OFFSET + 1],
        data[HEIGHT_OFFSET + 2],
        data[HEIGHT_OFFSET + 3],
    ]);

    Ok((width, height))
}
