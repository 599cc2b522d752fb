//! Region extraction: partitioning the canvas along a cutting arrangement.
//!
//! The cuts are rasterized one pixel wide onto a binary plane, the remaining
//! open cells are grouped into 4-connected components in row-major seed
//! order, components below the area threshold are dropped, and each survivor
//! gets a bounding box from its cell extents plus a traced outer contour.
//!
//! With no cuts at all the whole canvas is a single component, so an empty
//! arrangement falls out of the general path as one full-canvas region
//! (provided the canvas itself clears the area threshold).

mod contour;
mod labeling;
mod raster;

#[cfg(test)]
mod tests;

pub use self::raster::CutMask;

use log::debug;
use serde::{Deserialize, Serialize};

use self::labeling::label_open_components;
use crate::geometry::{Cut, Point};
use crate::types::CutError;

/// Filtering knobs for region extraction.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct RegionOptions {
    /// Components with fewer open cells than this are discarded as slivers;
    /// a component exactly at the threshold is kept.
    pub min_region_area: usize,
}

impl Default for RegionOptions {
    fn default() -> Self {
        Self {
            min_region_area: 100,
        }
    }
}

/// One extracted canvas region.
///
/// The bounding box is half-open: `x1..x2` by `y1..y2` in canvas pixels.
/// `area` counts the component's open cells, which for non-rectangular
/// regions is less than the box area. The contour is the clockwise outer
/// boundary starting at the region's top-left-most cell.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    pub x1: usize,
    pub y1: usize,
    pub x2: usize,
    pub y2: usize,
    pub area: usize,
    pub contour: Vec<Point>,
}

impl Region {
    pub fn width(&self) -> usize {
        self.x2 - self.x1
    }

    pub fn height(&self) -> usize {
        self.y2 - self.y1
    }
}

/// Partition the canvas along `cuts` and return the surviving regions in
/// row-major discovery order.
pub fn extract_regions(
    cuts: &[Cut],
    width: usize,
    height: usize,
    options: &RegionOptions,
) -> Result<Vec<Region>, CutError> {
    if width == 0 || height == 0 {
        return Err(CutError::InvalidCanvas { width, height });
    }

    let mut mask = CutMask::new(width, height);
    for cut in cuts {
        mask.plot_cut(cut);
    }

    let map = label_open_components(&mask);
    let mut regions = Vec::new();
    let mut rejected = 0usize;
    for comp in &map.components {
        if comp.area < options.min_region_area {
            rejected += 1;
            continue;
        }
        let contour = contour::trace_outer_contour(
            &map.labels,
            width,
            height,
            comp.label,
            comp.seed_x,
            comp.seed_y,
            comp.area,
        );
        regions.push(Region {
            x1: comp.min_x,
            y1: comp.min_y,
            x2: comp.max_x + 1,
            y2: comp.max_y + 1,
            area: comp.area,
            contour,
        });
    }
    debug!(
        "Regions: cuts={} components={} kept={} rejected={}",
        cuts.len(),
        map.components.len(),
        regions.len(),
        rejected
    );
    Ok(regions)
}
