use std::time::Instant;

use log::debug;

use crate::arrangement::extend_segments;
use crate::geometry::Segment;
use crate::regions::extract_regions;
use crate::types::{CutError, CutPlan, PlanStats};

use super::params::CutParams;

/// Runs both planning stages against one canvas.
///
/// The planner is stateless between calls; replanning the same strokes on
/// the same canvas reproduces the same cuts and regions bit for bit.
pub struct CutPlanner {
    params: CutParams,
}

impl CutPlanner {
    pub fn new(params: CutParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &CutParams {
        &self.params
    }

    /// Extend `segments` into cuts, then extract the regions they enclose.
    pub fn plan(
        &self,
        segments: &[Segment],
        width: usize,
        height: usize,
    ) -> Result<CutPlan, CutError> {
        let total_start = Instant::now();

        let extend_start = Instant::now();
        let cuts = extend_segments(segments, width, height, &self.params.arrangement)?;
        let extend_ms = extend_start.elapsed().as_secs_f64() * 1000.0;

        let extract_start = Instant::now();
        let regions = extract_regions(&cuts, width, height, &self.params.regions)?;
        let extract_ms = extract_start.elapsed().as_secs_f64() * 1000.0;

        let total_ms = total_start.elapsed().as_secs_f64() * 1000.0;
        debug!(
            "CutPlanner: segments={} cuts={} regions={} extend_ms={:.3} extract_ms={:.3}",
            segments.len(),
            cuts.len(),
            regions.len(),
            extend_ms,
            extract_ms
        );

        let stats = PlanStats {
            segments: segments.len(),
            cuts: cuts.len(),
            regions: regions.len(),
            extend_ms,
            extract_ms,
            total_ms,
        };
        Ok(CutPlan {
            cuts,
            regions,
            stats,
        })
    }
}
