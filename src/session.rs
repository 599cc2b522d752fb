//! Stroke bookkeeping for one canvas.

use log::debug;

use crate::geometry::{Point, Segment};
use crate::types::CutError;

/// Default minimum Manhattan stroke length in pixels.
pub const DEFAULT_MIN_STROKE: i32 = 10;

/// Accumulates the strokes drawn over one preview canvas.
///
/// The session owns the click-noise gate: strokes at or below the minimum
/// Manhattan length are rejected at insertion, so the planner only ever sees
/// deliberate lines. Loading a new image starts a fresh canvas and drops all
/// accumulated strokes.
#[derive(Clone, Debug)]
pub struct DrawSession {
    width: usize,
    height: usize,
    min_stroke_manhattan: i32,
    segments: Vec<Segment>,
}

impl DrawSession {
    pub fn new(width: usize, height: usize) -> Result<Self, CutError> {
        if width == 0 || height == 0 {
            return Err(CutError::InvalidCanvas { width, height });
        }
        Ok(Self {
            width,
            height,
            min_stroke_manhattan: DEFAULT_MIN_STROKE,
            segments: Vec::new(),
        })
    }

    pub fn with_min_stroke(mut self, manhattan: i32) -> Self {
        self.min_stroke_manhattan = manhattan;
        self
    }

    /// Record one stroke. Returns `false` when the stroke is rejected as an
    /// accidental click.
    pub fn add_segment(&mut self, p0: Point, p1: Point) -> bool {
        let seg = Segment::new(p0, p1);
        if seg.manhattan_length() <= self.min_stroke_manhattan {
            debug!(
                "DrawSession: stroke ({}, {}) -> ({}, {}) too short, ignored",
                p0.x, p0.y, p1.x, p1.y
            );
            return false;
        }
        self.segments.push(seg);
        debug!(
            "DrawSession: segment ({}, {}) -> ({}, {}) added, total={}",
            p0.x,
            p0.y,
            p1.x,
            p1.y,
            self.segments.len()
        );
        true
    }

    /// Drop all strokes, keeping the canvas.
    pub fn clear(&mut self) {
        self.segments.clear();
    }

    /// Switch to a new canvas; all strokes from the previous one are dropped.
    pub fn reset_canvas(&mut self, width: usize, height: usize) -> Result<(), CutError> {
        if width == 0 || height == 0 {
            return Err(CutError::InvalidCanvas { width, height });
        }
        self.width = width;
        self.height = height;
        self.segments.clear();
        Ok(())
    }

    pub fn canvas(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}
