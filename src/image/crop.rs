//! Cropping planned regions out of the source scan.

use image::DynamicImage;
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::regions::Region;

use super::preview::{SourceMapper, SourceRect};

/// One crop written to disk.
#[derive(Clone, Debug, Serialize)]
pub struct SavedCrop {
    /// 1-based region number; numbering keeps gaps where regions were
    /// skipped, so file names stay aligned with the plan report.
    pub index: usize,
    pub rect: SourceRect,
    pub path: PathBuf,
}

/// Output file name for the `index`-th region of `base`.
pub fn output_file_name(base: &str, index: usize, ext: &str) -> String {
    format!("{base}_cutted_{index}.{ext}")
}

/// Crop every mappable region out of `image` and save the pieces into
/// `output_dir` as `{base}_cutted_{n}.{ext}`.
///
/// Regions that map below the minimum source size are skipped; their index
/// is consumed anyway. With the `parallel` feature the crops are encoded
/// and written concurrently.
pub fn crop_and_save(
    image: &DynamicImage,
    regions: &[Region],
    mapper: &SourceMapper,
    output_dir: &Path,
    base: &str,
    ext: &str,
) -> Result<Vec<SavedCrop>, String> {
    fs::create_dir_all(output_dir)
        .map_err(|e| format!("Failed to create {}: {e}", output_dir.display()))?;

    let jobs: Vec<(usize, SourceRect)> = regions
        .iter()
        .enumerate()
        .filter_map(|(i, region)| {
            let index = i + 1;
            match mapper.map_region(region) {
                Some(rect) => Some((index, rect)),
                None => {
                    debug!("Crop: region {index} below minimum source size, skipped");
                    None
                }
            }
        })
        .collect();

    save_all(image, &jobs, output_dir, base, ext)
}

fn save_all(
    image: &DynamicImage,
    jobs: &[(usize, SourceRect)],
    output_dir: &Path,
    base: &str,
    ext: &str,
) -> Result<Vec<SavedCrop>, String> {
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        jobs.par_iter()
            .map(|&(index, rect)| save_one(image, index, rect, output_dir, base, ext))
            .collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        jobs.iter()
            .map(|&(index, rect)| save_one(image, index, rect, output_dir, base, ext))
            .collect()
    }
}

fn save_one(
    image: &DynamicImage,
    index: usize,
    rect: SourceRect,
    output_dir: &Path,
    base: &str,
    ext: &str,
) -> Result<SavedCrop, String> {
    let cropped = image.crop_imm(rect.x, rect.y, rect.width, rect.height);
    let path = output_dir.join(output_file_name(base, index, ext));
    cropped
        .save(&path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))?;
    debug!(
        "Crop: region {index} ({}x{} at {}, {}) -> {}",
        rect.width,
        rect.height,
        rect.x,
        rect.y,
        path.display()
    );
    Ok(SavedCrop { index, rect, path })
}
