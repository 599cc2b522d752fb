//! JSON configuration for the command-line tools.

pub mod job;
pub mod plan;
