#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod config;
pub mod image;
pub mod planner;
pub mod session;
pub mod types;

// Lower-level stage modules, public so tools and tests can drive the
// stages directly.
pub mod arrangement;
pub mod geometry;
pub mod regions;

// --- High-level re-exports -------------------------------------------------

// Main entry points: planner + results.
pub use crate::planner::{CutParams, CutPlanner};
pub use crate::types::{CutError, CutPlan, PlanStats};

// Core geometry shared by both stages.
pub use crate::geometry::{Cut, Point, Segment};

// Stage outputs and their knobs.
pub use crate::arrangement::{extend_segments, ArrangementOptions};
pub use crate::regions::{extract_regions, Region, RegionOptions};

// Stroke bookkeeping for interactive hosts.
pub use crate::session::DrawSession;

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use scan_cutter::prelude::*;
///
/// let planner = CutPlanner::new(CutParams::default());
/// let segments = vec![Segment::new(Point::new(50, 10), Point::new(50, 80))];
/// let plan = planner.plan(&segments, 100, 100).expect("canvas is valid");
/// println!("cuts={} regions={}", plan.cuts.len(), plan.regions.len());
/// ```
pub mod prelude {
    pub use crate::geometry::{Cut, Point, Segment};
    pub use crate::planner::{CutParams, CutPlanner};
    pub use crate::regions::Region;
    pub use crate::session::DrawSession;
    pub use crate::types::{CutError, CutPlan};
}
