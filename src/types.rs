//! Planner output types and the library error.

use serde::Serialize;
use std::fmt;

use crate::geometry::Cut;
use crate::regions::Region;

/// Errors surfaced by the planning stages.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CutError {
    /// Canvas dimensions must both be positive.
    InvalidCanvas { width: usize, height: usize },
}

impl fmt::Display for CutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CutError::InvalidCanvas { width, height } => write!(
                f,
                "invalid canvas {width}x{height}: both dimensions must be positive"
            ),
        }
    }
}

impl std::error::Error for CutError {}

/// Counters and stage timings for one planner invocation.
#[derive(Clone, Copy, Debug, Default, Serialize)]
pub struct PlanStats {
    /// Drawn segments handed to the planner.
    pub segments: usize,
    /// Cuts produced by segment extension.
    pub cuts: usize,
    /// Regions that survived the area filter.
    pub regions: usize,
    pub extend_ms: f64,
    pub extract_ms: f64,
    pub total_ms: f64,
}

/// Complete result of a planner run: the extended cuts, the regions they
/// enclose, and the run statistics.
#[derive(Clone, Debug, Serialize)]
pub struct CutPlan {
    pub cuts: Vec<Cut>,
    pub regions: Vec<Region>,
    pub stats: PlanStats,
}
