use scan_cutter::geometry::{Point, Segment};

/// Plus-shaped stroke pair through the canvas center, with a margin so the
/// strokes stop well short of the borders and extension has work to do.
pub fn plus(width: usize, height: usize) -> Vec<Segment> {
    let w = width as i32;
    let h = height as i32;
    vec![
        Segment::new(Point::new(w / 2, h / 10), Point::new(w / 2, h - h / 10)),
        Segment::new(Point::new(w / 10, h / 2), Point::new(w - w / 10, h / 2)),
    ]
}
