//! JSON config for the `plan_regions` tool.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use super::job::{CanvasConfig, ParamsConfig};

#[derive(Debug, Clone, Deserialize)]
pub struct PlanOutputConfig {
    /// JSON report with cuts, regions and run statistics.
    pub report_json: PathBuf,
    /// Optional grayscale dump of the rasterized cut mask.
    #[serde(default)]
    pub mask_png: Option<PathBuf>,
}

/// Top-level config for `plan_regions`: pure geometry, no source image.
#[derive(Debug, Clone, Deserialize)]
pub struct PlanToolConfig {
    pub canvas: CanvasConfig,
    /// Drawn strokes as `[x0, y0, x1, y1]` in canvas pixels.
    pub segments: Vec<[i32; 4]>,
    #[serde(default)]
    pub params: ParamsConfig,
    pub output: PlanOutputConfig,
}

/// Load a `plan_regions` config from a JSON file.
pub fn load_config(path: &Path) -> Result<PlanToolConfig, String> {
    let text = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&text)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}
