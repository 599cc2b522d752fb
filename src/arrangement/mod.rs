//! Segment extension: turning drawn strokes into a full cutting arrangement.
//!
//! A stroke drawn over the preview rarely reaches the canvas borders, yet the
//! intended cut almost always does. This module closes that gap in two
//! passes over the whole stroke set:
//!
//! 1. **Candidate collection.** For every segment, take its endpoints, the
//!    intersections of its carrier line with the four canvas borders, and its
//!    pairwise intersections with every other segment (collinear overlaps
//!    contribute both overlap-range endpoints). Round each candidate to the
//!    pixel grid and pool them all in one deduplicated, deterministically
//!    ordered set.
//! 2. **Cut emission.** For every segment, recover all pooled candidates
//!    whose perpendicular distance to the segment's carrier line is below
//!    `on_line_tol` (including points contributed by *other* segments), order
//!    them by signed projection along the segment direction, and emit one
//!    [`Cut`](crate::geometry::Cut) per consecutive pair.
//!
//! Zero-length segments are skipped up front. Cuts whose rounded endpoints
//! coincide are never emitted, so every cut rasterizes to at least two cells.

mod border;
mod extender;
mod intersect;
mod options;


pub use self::intersect::Intersection;
pub use self::options::ArrangementOptions;

use self::extender::Extender;
use crate::geometry::{Cut, Segment};
use crate::types::CutError;

/// Extend drawn segments into a border-closed cutting arrangement.
///
/// Returns the cuts in segment order, each segment's chain ordered along its
/// direction. An empty input yields an empty arrangement.
pub fn extend_segments(
    segments: &[Segment],
    width: usize,
    height: usize,
    options: &ArrangementOptions,
) -> Result<Vec<Cut>, CutError> {
    if width == 0 || height == 0 {
        return Err(CutError::InvalidCanvas { width, height });
    }
    if segments.is_empty() {
        return Ok(Vec::new());
    }
    Ok(Extender::new(width, height, *options).extend(segments))
}
