//! Preview-to-source coordinate mapping.
//!
//! The user draws on a scaled-down preview; crops are taken from the
//! full-resolution scan. Boxes scale back per axis, because the preview fit
//! truncates each dimension to whole pixels independently.

use serde::Serialize;

use crate::regions::Region;

/// Crops narrower or shorter than this many source pixels are dropped.
pub const MIN_CROP_PX: u32 = 10;

/// Preview dimensions fitting inside `max_w` x `max_h` while preserving
/// aspect ratio. Never upscales beyond the source and never returns a zero
/// dimension.
pub fn fit_preview(src_w: u32, src_h: u32, max_w: u32, max_h: u32) -> (usize, usize) {
    let scale = (max_w as f64 / src_w.max(1) as f64)
        .min(max_h as f64 / src_h.max(1) as f64)
        .min(1.0);
    let w = ((src_w as f64 * scale) as usize).max(1);
    let h = ((src_h as f64 * scale) as usize).max(1);
    (w, h)
}

/// Axis-aligned rectangle in source-image coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SourceRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Scales preview-space region boxes back into the source image.
#[derive(Clone, Copy, Debug)]
pub struct SourceMapper {
    scale_x: f64,
    scale_y: f64,
    src_w: u32,
    src_h: u32,
}

impl SourceMapper {
    pub fn new(src_w: u32, src_h: u32, preview_w: usize, preview_h: usize) -> Self {
        Self {
            scale_x: src_w as f64 / preview_w.max(1) as f64,
            scale_y: src_h as f64 / preview_h.max(1) as f64,
            src_w,
            src_h,
        }
    }

    /// Map a region box to source coordinates, truncating to whole pixels
    /// and clamping into the image. Boxes that collapse, or end up smaller
    /// than [`MIN_CROP_PX`] on either side, map to `None`.
    pub fn map_region(&self, region: &Region) -> Option<SourceRect> {
        let x1 = ((region.x1 as f64 * self.scale_x) as u32).min(self.src_w.saturating_sub(1));
        let y1 = ((region.y1 as f64 * self.scale_y) as u32).min(self.src_h.saturating_sub(1));
        let x2 = ((region.x2 as f64 * self.scale_x) as u32).min(self.src_w);
        let y2 = ((region.y2 as f64 * self.scale_y) as u32).min(self.src_h);
        if x2 <= x1 || y2 <= y1 {
            return None;
        }
        let width = x2 - x1;
        let height = y2 - y1;
        if width < MIN_CROP_PX || height < MIN_CROP_PX {
            return None;
        }
        Some(SourceRect {
            x: x1,
            y: y1,
            width,
            height,
        })
    }
}
