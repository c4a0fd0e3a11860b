use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::types::ImageFormat;

/// Returns true when the file name carries one of the probed image
/// extensions, case-insensitive.
pub fn has_image_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .and_then(ImageFormat::from_extension)
        .is_some()
}

/// Collects probe targets under `path`, depth-first with entries sorted
/// by name. Directories are filtered by extension; a plain file path is
/// returned as-is, so explicitly named files are always probed.
pub fn collect_images(path: &Path, found: &mut Vec<PathBuf>) -> io::Result<()> {
    if !path.is_dir() {
        found.push(path.to_path_buf());
        return Ok(());
    }

    let mut entries: Vec<PathBuf> = fs::read_dir(path)?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<io::Result<_>>()?;
    entries.sort();

    for child in entries {
        if child.is_dir() {
            collect_images(&child, found)?;
        } else if has_image_extension(&child) {
            found.push(child);
        }
    }

    Ok(())
}
