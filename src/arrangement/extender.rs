//! Candidate collection and per-segment cut emission.

use std::collections::BTreeSet;

use log::debug;

use crate::geometry::{Cut, Point, Segment};

use super::border::border_hits;
use super::intersect::{segment_intersection, Intersection};
use super::options::ArrangementOptions;

/// Two-pass extender: pass one gathers every candidate point on the canvas
/// (endpoints, border hits, pairwise intersections) into one deduplicated
/// pool; pass two recovers, orders and chains the pool along each segment's
/// carrier line.
pub(super) struct Extender {
    width: usize,
    height: usize,
    options: ArrangementOptions,
    /// Rounded candidates; the ordered set makes iteration deterministic.
    candidates: BTreeSet<Point>,
}

impl Extender {
    pub(super) fn new(width: usize, height: usize, options: ArrangementOptions) -> Self {
        Self {
            width,
            height,
            options,
            candidates: BTreeSet::new(),
        }
    }

    pub(super) fn extend(mut self, segments: &[Segment]) -> Vec<Cut> {
        let live: Vec<&Segment> = segments
            .iter()
            .filter(|seg| {
                if seg.p0 == seg.p1 {
                    debug!(
                        "Extender: skipping zero-length segment at ({}, {})",
                        seg.p0.x, seg.p0.y
                    );
                    false
                } else {
                    true
                }
            })
            .collect();

        self.collect_candidates(&live);

        let mut cuts = Vec::new();
        for seg in live.iter().copied() {
            self.emit_cuts(seg, &mut cuts);
        }
        debug!(
            "Extender: segments={} candidates={} cuts={}",
            live.len(),
            self.candidates.len(),
            cuts.len()
        );
        cuts
    }

    fn collect_candidates(&mut self, segments: &[&Segment]) {
        for (i, seg) in segments.iter().enumerate() {
            self.push_candidate([seg.p0.x as f32, seg.p0.y as f32]);
            self.push_candidate([seg.p1.x as f32, seg.p1.y as f32]);
            for hit in border_hits(seg, self.width, self.height, self.options.axis_eps) {
                self.push_candidate(hit);
            }
            for other in segments.iter().skip(i + 1) {
                match segment_intersection(seg, other) {
                    Intersection::Point(p) => self.push_candidate(p),
                    Intersection::Overlap(p, q) => {
                        self.push_candidate(p);
                        self.push_candidate(q);
                    }
                    Intersection::Disjoint => {}
                }
            }
        }
    }

    /// Round to the pixel grid; exact value equality dedups from here on.
    fn push_candidate(&mut self, p: [f32; 2]) {
        self.candidates
            .insert(Point::new(p[0].round() as i32, p[1].round() as i32));
    }

    /// Recover the candidates lying on this segment's carrier line, order
    /// them by signed projection along the segment direction and chain
    /// consecutive pairs into cuts.
    fn emit_cuts(&self, seg: &Segment, cuts: &mut Vec<Cut>) {
        let line = seg.line();
        let dir = seg.direction();
        let origin = seg.p0.coords();

        let mut on_line: Vec<(f32, Point)> = Vec::new();
        for &p in &self.candidates {
            let dist = (line.x * p.x as f32 + line.y * p.y as f32 + line.z).abs();
            if dist < self.options.on_line_tol {
                let t = (p.coords() - origin).dot(&dir);
                on_line.push((t, p));
            }
        }
        on_line.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));

        for pair in on_line.windows(2) {
            let (_, p) = pair[0];
            let (_, q) = pair[1];
            if p != q {
                cuts.push(Cut::new(p, q));
            }
        }
    }
}
