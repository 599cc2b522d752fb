//! End-to-end cut planning: segment extension followed by region extraction.

mod params;
mod pipeline;

pub use self::params::CutParams;
pub use self::pipeline::CutPlanner;
