use std::io;
use thiserror::Error;

/// Errors produced while probing an image header.
#[derive(Debug, Error)]
pub enum FormatError {
    /// Fewer bytes available than any supported header needs.
    #[error("short header")]
    ShortHeader,

    /// Leading bytes match none of the supported signatures.
    #[error("unsupported format")]
    UnsupportedFormat,

    /// PNG signature bytes 4-7 differ from the fixed constant.
    #[error("corrupt PNG header")]
    CorruptPngHeader,

    /// JPEG marker scan exhausted the stream without a Start-Of-Frame.
    #[error("no SOF marker")]
    NoSofMarker,

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
