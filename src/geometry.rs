//! Geometric primitives shared by the arrangement and extraction stages.
//!
//! All drawn input arrives as integer preview-pixel coordinates, so [`Point`]
//! is an integer value type with exact equality: candidate points are
//! deduplicated by value, never by identity. Float geometry (carrier lines,
//! projections) is derived on demand from the integer endpoints.

use nalgebra::{Vector2, Vector3};
use serde::{Deserialize, Serialize};

/// Integer pixel coordinate on the preview canvas.
///
/// Ordering is lexicographic `(x, y)`; it exists so candidate sets iterate
/// deterministically, which keeps repeated plans byte-identical.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Float view for geometric computation.
    #[inline]
    pub fn coords(&self) -> Vector2<f32> {
        Vector2::new(self.x as f32, self.y as f32)
    }
}

/// Axis class of a drawn segment, guarded by a tolerance so the slope
/// computation for oblique segments never divides by a vanishing delta.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SegmentClass {
    Vertical,
    Horizontal,
    Oblique,
}

/// User-drawn stroke in preview coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Segment {
    pub p0: Point,
    pub p1: Point,
}

impl Segment {
    pub const fn new(p0: Point, p1: Point) -> Self {
        Self { p0, p1 }
    }

    #[inline]
    fn delta(&self) -> Vector2<f32> {
        self.p1.coords() - self.p0.coords()
    }

    /// Manhattan length in pixels; the session uses it to reject accidental
    /// click-strokes.
    pub fn manhattan_length(&self) -> i32 {
        (self.p1.x - self.p0.x).abs() + (self.p1.y - self.p0.y).abs()
    }

    pub fn length(&self) -> f32 {
        self.delta().norm()
    }

    /// Unit direction from `p0` towards `p1`. Zero for degenerate segments.
    pub fn direction(&self) -> Vector2<f32> {
        let d = self.delta();
        let len = d.norm();
        if len > 0.0 {
            d / len
        } else {
            Vector2::zeros()
        }
    }

    /// Classify against the axis tolerance: `|dx| < eps` is vertical,
    /// `|dy| < eps` horizontal, anything else oblique.
    pub fn classify(&self, axis_eps: f32) -> SegmentClass {
        let d = self.delta();
        if d.x.abs() < axis_eps {
            SegmentClass::Vertical
        } else if d.y.abs() < axis_eps {
            SegmentClass::Horizontal
        } else {
            SegmentClass::Oblique
        }
    }

    /// Carrier line in normal form `ax + by + c = 0` with `sqrt(a^2+b^2) = 1`.
    pub fn line(&self) -> Vector3<f32> {
        let a = (self.p1.y - self.p0.y) as f32;
        let b = (self.p0.x - self.p1.x) as f32;
        let c = self.p1.x as f32 * self.p0.y as f32 - self.p0.x as f32 * self.p1.y as f32;
        let norm = (a * a + b * b).sqrt().max(1e-6);
        Vector3::new(a / norm, b / norm, c / norm)
    }

    /// Perpendicular distance from `p` to the carrier line.
    pub fn distance_to(&self, p: Point) -> f32 {
        let l = self.line();
        (l.x * p.x as f32 + l.y * p.y as f32 + l.z).abs()
    }
}

/// Sub-segment of a carrier line running border-to-border or
/// intersection-to-intersection; the output of segment extension and the
/// input of region extraction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cut {
    pub p0: Point,
    pub p1: Point,
}

impl Cut {
    pub const fn new(p0: Point, p1: Point) -> Self {
        Self { p0, p1 }
    }
}
