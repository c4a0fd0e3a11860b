use std::ffi::OsString;
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::types::ImageDimensions;

pub const SIDECAR_EXTENSION: &str = "info";

/// Sidecar path for `path`: the full file name plus `.info`, so
/// `photo.png` maps to `photo.png.info`.
pub fn sidecar_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".");
    name.push(SIDECAR_EXTENSION);
    PathBuf::from(name)
}

/// Writes `dims` as a single line of JSON into `<path>.info` and returns
/// the sidecar path.
pub fn write_info(path: &Path, dims: &ImageDimensions) -> io::Result<PathBuf> {
    let out_path = sidecar_path(path);
    let line = serde_json::to_string(dims).map_err(io::Error::from)?;

    let mut out = File::create(&out_path)?;
    writeln!(out, "{line}")?;

    Ok(out_path)
}
