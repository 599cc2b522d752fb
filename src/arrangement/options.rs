use serde::{Deserialize, Serialize};

/// Tolerances for segment extension.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct ArrangementOptions {
    /// Below this absolute axis delta (pixels) a segment counts as
    /// vertical/horizontal instead of oblique.
    pub axis_eps: f32,
    /// Maximum perpendicular distance (pixels) for a candidate point to be
    /// recovered onto a segment's carrier line.
    pub on_line_tol: f32,
}

impl Default for ArrangementOptions {
    fn default() -> Self {
        Self {
            axis_eps: 1.0,
            on_line_tol: 1.0,
        }
    }
}
