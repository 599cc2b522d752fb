//! I/O helpers for source images, masks and JSON reports.
//!
//! - `load_image`: decode a scan from disk, any format the `image` crate
//!   knows, color preserved.
//! - `save_grayscale`: write a row-major 8-bit buffer as a grayscale image
//!   (used for cut-mask exports).
//! - `write_json_file`: pretty-print a serializable value to disk.

use image::{DynamicImage, GrayImage};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Decode an image from disk, keeping its color.
pub fn load_image(path: &Path) -> Result<DynamicImage, String> {
    image::open(path).map_err(|e| format!("Failed to open {}: {e}", path.display()))
}

/// Save a row-major 8-bit buffer as a grayscale image.
pub fn save_grayscale(
    width: usize,
    height: usize,
    data: &[u8],
    path: &Path,
) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let buffer = GrayImage::from_raw(width as u32, height as u32, data.to_vec())
        .ok_or_else(|| format!("Buffer size does not match {width}x{height}"))?;
    buffer
        .save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
    }
    Ok(())
}
