//! Canvas-border hits of a segment's carrier line.

use crate::geometry::{Segment, SegmentClass};

/// Intersections of the carrier line with the four border lines `x = 0`,
/// `x = w - 1`, `y = 0` and `y = h - 1`, unrounded.
///
/// Axis-aligned lines always hit exactly two borders. An oblique line yields
/// between two and four hits; a hit is kept only if it lands inside the
/// canvas half-open extent, and a line through a corner reports that corner
/// from both adjacent borders (the caller deduplicates).
pub(super) fn border_hits(
    seg: &Segment,
    width: usize,
    height: usize,
    axis_eps: f32,
) -> Vec<[f32; 2]> {
    let w = width as f32;
    let h = height as f32;
    let x0 = seg.p0.x as f32;
    let y0 = seg.p0.y as f32;
    let mut hits = Vec::with_capacity(4);
    match seg.classify(axis_eps) {
        SegmentClass::Vertical => {
            hits.push([x0, 0.0]);
            hits.push([x0, h - 1.0]);
        }
        SegmentClass::Horizontal => {
            hits.push([0.0, y0]);
            hits.push([w - 1.0, y0]);
        }
        SegmentClass::Oblique => {
            let dx = (seg.p1.x - seg.p0.x) as f32;
            let dy = (seg.p1.y - seg.p0.y) as f32;
            let m = dy / dx;
            let b = y0 - m * x0;

            let left_y = b;
            if (0.0..h).contains(&left_y) {
                hits.push([0.0, left_y]);
            }
            let right_y = m * (w - 1.0) + b;
            if (0.0..h).contains(&right_y) {
                hits.push([w - 1.0, right_y]);
            }
            let top_x = -b / m;
            if (0.0..w).contains(&top_x) {
                hits.push([top_x, 0.0]);
            }
            let bottom_x = (h - 1.0 - b) / m;
            if (0.0..w).contains(&bottom_x) {
                hits.push([bottom_x, h - 1.0]);
            }
        }
    }
    hits
}
