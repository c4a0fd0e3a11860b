use std::fs;
use std::path::Path;

use crate::error::FormatError;
use crate::formats::{gif, jpeg, png};
use crate::types::{ImageDimensions, ImageFormat};

/// Minimum number of leading bytes required before any sniffing happens.
pub const MIN_HEADER_LEN: usize = 24;

/// Opens the file at `path` and probes its header for pixel dimensions.
///
/// The file handle is scoped to this call; it is released before
/// returning on every path, decode failures included.
pub fn decode(path: &Path) -> Result<ImageDimensions, FormatError> {
    let data = fs::read(path)?;
    decode_bytes(&data)
}

/// Sniffs the format from the leading signature bytes and dispatches to
/// the format-specific dimension parser.
pub fn decode_bytes(data: &[u8]) -> Result<ImageDimensions, FormatError> {
    if data.len() < MIN_HEADER_LEN {
        return Err(FormatError::ShortHeader);
    }

    if png::matches_signature(data) {
        let (width, height) = png::parse_dimensions(data)?;
        return Ok(ImageDimensions::new(width, height, ImageFormat::Png));
    }

    if gif::matches_signature(data) {
        let (width, height) = gif::parse_dimensions(data)?;
        return Ok(ImageDimensions::new(
            width as u32,
            height as u32,
            ImageFormat::Gif,
        ));
    }

    if jpeg::matches_signature(data) {
        let (width, height) = jpeg::parse_dimensions(data)?;
        return Ok(ImageDimensions::new(
            width as u32,
            height as u32,
            ImageFormat::Jpeg,
        ));
    }

    Err(FormatError::UnsupportedFormat)
}
