//! Pairwise segment intersection.

use nalgebra::Vector2;

use crate::geometry::Segment;

/// Cross products below `eps * |r| * |s|` count as parallel.
const PARALLEL_EPS: f32 = 1e-6;

/// Perpendicular offset (pixels) below which parallel carrier lines count as
/// the same line. Integer endpoints make the offset exact in practice.
const COLLINEAR_TOL: f32 = 1e-3;

/// Outcome of intersecting two drawn segments (as closed point sets).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Intersection {
    /// No shared point.
    Disjoint,
    /// Proper crossing or an endpoint touch.
    Point([f32; 2]),
    /// Collinear segments sharing a range; both range endpoints are reported.
    Overlap([f32; 2], [f32; 2]),
}

/// Classic parametric intersection: `a(t) = p + t r`, `b(u) = q + u s` with
/// `t, u` in `[0, 1]`.
pub(super) fn segment_intersection(a: &Segment, b: &Segment) -> Intersection {
    let p = a.p0.coords();
    let r = a.p1.coords() - p;
    let q = b.p0.coords();
    let s = b.p1.coords() - q;

    let rxs = r.perp(&s);
    let qp = q - p;
    let len_r = r.norm();
    let len_s = s.norm();

    if rxs.abs() <= PARALLEL_EPS * (len_r * len_s).max(1.0) {
        return parallel_intersection(p, r, qp, s, len_r);
    }

    let t = qp.perp(&s) / rxs;
    let u = qp.perp(&r) / rxs;
    if (0.0..=1.0).contains(&t) && (0.0..=1.0).contains(&u) {
        let hit = p + r * t;
        Intersection::Point([hit.x, hit.y])
    } else {
        Intersection::Disjoint
    }
}

/// Parallel case: distinct carrier lines are disjoint; collinear segments
/// overlap in a (possibly empty, possibly single-point) parameter range.
fn parallel_intersection(
    p: Vector2<f32>,
    r: Vector2<f32>,
    qp: Vector2<f32>,
    s: Vector2<f32>,
    len_r: f32,
) -> Intersection {
    let offset = qp.perp(&r).abs() / len_r.max(1e-6);
    if offset > COLLINEAR_TOL {
        return Intersection::Disjoint;
    }

    // Project b's endpoints onto a's parameter axis.
    let rr = r.dot(&r);
    let t0 = qp.dot(&r) / rr;
    let t1 = t0 + s.dot(&r) / rr;
    let (tmin, tmax) = if t0 <= t1 { (t0, t1) } else { (t1, t0) };
    let lo = tmin.max(0.0);
    let hi = tmax.min(1.0);
    if lo > hi {
        return Intersection::Disjoint;
    }

    let first = p + r * lo;
    let second = p + r * hi;
    if (hi - lo) * len_r < 1.0 {
        // Endpoint touch, or an overlap shorter than a pixel.
        Intersection::Point([first.x, first.y])
    } else {
        Intersection::Overlap([first.x, first.y], [second.x, second.y])
    }
}
