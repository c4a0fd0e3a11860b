use serde::Serialize;
use std::fmt;

/// Supported image formats, identified by header signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ImageFormat {
    Png,
    Gif,
    Jpeg,
}

impl ImageFormat {
    pub fn name(&self) -> &'static str {
        match self {
            ImageFormat::Png => "PNG",
            ImageFormat::Gif => "GIF",
            ImageFormat::Jpeg => "JPEG",
        }
    }

    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            ImageFormat::Png => &["png"],
            ImageFormat::Gif => &["gif"],
            ImageFormat::Jpeg => &["jpg", "jpeg"],
        }
    }

    pub fn from_extension(ext: &str) -> Option<Self> {
        [ImageFormat::Png, ImageFormat::Gif, ImageFormat::Jpeg]
            .into_iter()
            .find(|format| {
                format
                    .extensions()
                    .iter()
                    .any(|e| ext.eq_ignore_ascii_case(e))
            })
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Pixel dimensions and detected format of a probed file.
///
/// Serializes to the sidecar record shape:
/// `{"width": <int>, "height": <int>, "type": "<PNG|GIF|JPEG>"}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ImageDimensions {
    pub width: u32,
    pub height: u32,
    #[serde(rename = "type")]
    pub format: ImageFormat,
}

impl ImageDimensions {
    pub fn new(width: u32, height: u32, format: ImageFormat) -> Self {
        Self {
            width,
            height,
            format,
        }
    }
}
