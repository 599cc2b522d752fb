//! JSON config for the `cut_image` tool.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::arrangement::ArrangementOptions;
use crate::geometry::{Point, Segment};
use crate::planner::CutParams;
use crate::regions::RegionOptions;

/// Explicit canvas dimensions; when omitted the preview fit decides.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct CanvasConfig {
    pub width: usize,
    pub height: usize,
}

/// Preview bounds used when no explicit canvas is given.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct PreviewConfig {
    pub max_width: u32,
    pub max_height: u32,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            max_width: 1200,
            max_height: 800,
        }
    }
}

/// Flat planner tunables as they appear in config files.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct ParamsConfig {
    pub axis_eps: f32,
    pub on_line_tol: f32,
    pub min_region_area: usize,
    pub min_segment_manhattan: i32,
}

impl Default for ParamsConfig {
    fn default() -> Self {
        let params = CutParams::default();
        Self {
            axis_eps: params.arrangement.axis_eps,
            on_line_tol: params.arrangement.on_line_tol,
            min_region_area: params.regions.min_region_area,
            min_segment_manhattan: params.min_segment_manhattan,
        }
    }
}

impl ParamsConfig {
    pub fn to_cut_params(&self) -> CutParams {
        CutParams {
            min_segment_manhattan: self.min_segment_manhattan,
            arrangement: ArrangementOptions {
                axis_eps: self.axis_eps,
                on_line_tol: self.on_line_tol,
            },
            regions: RegionOptions {
                min_region_area: self.min_region_area,
            },
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Directory the crops are written into.
    pub dir: PathBuf,
    /// Optional JSON report with the plan and the saved crops.
    #[serde(default)]
    pub report_json: Option<PathBuf>,
}

/// Top-level config for `cut_image`.
#[derive(Debug, Clone, Deserialize)]
pub struct CutJobConfig {
    /// Source scan to cut.
    pub input: PathBuf,
    #[serde(default)]
    pub preview: PreviewConfig,
    /// Overrides the preview fit when present.
    #[serde(default)]
    pub canvas: Option<CanvasConfig>,
    /// Drawn strokes as `[x0, y0, x1, y1]` in canvas pixels.
    pub segments: Vec<[i32; 4]>,
    #[serde(default)]
    pub params: ParamsConfig,
    pub output: OutputConfig,
}

/// Convert `[x0, y0, x1, y1]` rows into segments.
pub fn segments_from_coords(coords: &[[i32; 4]]) -> Vec<Segment> {
    coords
        .iter()
        .map(|&[x0, y0, x1, y1]| Segment::new(Point::new(x0, y0), Point::new(x1, y1)))
        .collect()
}

/// Load a `cut_image` config from a JSON file.
pub fn load_config(path: &Path) -> Result<CutJobConfig, String> {
    let text = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&text)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}
