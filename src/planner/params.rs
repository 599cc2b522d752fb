use serde::{Deserialize, Serialize};

use crate::arrangement::ArrangementOptions;
use crate::regions::RegionOptions;

/// All planner tunables in one place.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct CutParams {
    /// Strokes at or below this Manhattan length (pixels) are treated as
    /// accidental clicks and never enter a session.
    pub min_segment_manhattan: i32,
    /// Segment-extension tolerances.
    pub arrangement: ArrangementOptions,
    /// Region filtering.
    pub regions: RegionOptions,
}

impl Default for CutParams {
    fn default() -> Self {
        Self {
            min_segment_manhattan: 10,
            arrangement: ArrangementOptions::default(),
            regions: RegionOptions::default(),
        }
    }
}
