use scan_cutter::config::job::segments_from_coords;
use scan_cutter::config::plan;
use scan_cutter::geometry::Cut;
use scan_cutter::image::io::{save_grayscale, write_json_file};
use scan_cutter::planner::CutPlanner;
use scan_cutter::regions::{CutMask, Region};
use scan_cutter::types::PlanStats;
use serde::Serialize;
use std::env;
use std::path::Path;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = plan::load_config(Path::new(&config_path))?;
    let (width, height) = (config.canvas.width, config.canvas.height);

    let planner = CutPlanner::new(config.params.to_cut_params());
    let segments = segments_from_coords(&config.segments);
    let plan = planner
        .plan(&segments, width, height)
        .map_err(|e| e.to_string())?;

    if let Some(mask_path) = &config.output.mask_png {
        let mut mask = CutMask::new(width, height);
        for cut in &plan.cuts {
            mask.plot_cut(cut);
        }
        save_grayscale(width, height, &mask.to_grayscale(), mask_path)?;
        println!("Saved cut mask to {}", mask_path.display());
    }

    let report = PlanReport {
        stats: &plan.stats,
        cuts: &plan.cuts,
        regions: &plan.regions,
    };
    write_json_file(&config.output.report_json, &report)?;

    println!(
        "Planned {} cuts and {} regions on a {width}x{height} canvas; report at {}",
        plan.cuts.len(),
        plan.regions.len(),
        config.output.report_json.display()
    );

    Ok(())
}

fn usage() -> String {
    "Usage: plan_regions <config.json>".to_string()
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PlanReport<'a> {
    stats: &'a PlanStats,
    cuts: &'a [Cut],
    regions: &'a [Region],
}
