use image::GenericImageView;
use scan_cutter::config::job::{self, segments_from_coords};
use scan_cutter::image::crop::{crop_and_save, SavedCrop};
use scan_cutter::image::io::{load_image, write_json_file};
use scan_cutter::image::preview::{fit_preview, SourceMapper};
use scan_cutter::planner::CutPlanner;
use scan_cutter::regions::Region;
use scan_cutter::session::DrawSession;
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
    let config = job::load_config(Path::new(&config_path))?;

    let image = load_image(&config.input)?;
    let (src_w, src_h) = (image.width(), image.height());
    let (canvas_w, canvas_h) = match config.canvas {
        Some(canvas) => (canvas.width, canvas.height),
        None => fit_preview(
            src_w,
            src_h,
            config.preview.max_width,
            config.preview.max_height,
        ),
    };

    let params = config.params.to_cut_params();
    let mut session = DrawSession::new(canvas_w, canvas_h)
        .map_err(|e| e.to_string())?
        .with_min_stroke(params.min_segment_manhattan);
    for seg in segments_from_coords(&config.segments) {
        session.add_segment(seg.p0, seg.p1);
    }

    let planner = CutPlanner::new(params);
    let plan = planner
        .plan(session.segments(), canvas_w, canvas_h)
        .map_err(|e| e.to_string())?;
    println!(
        "Planned {} cuts and {} regions on a {canvas_w}x{canvas_h} canvas ({:.3} ms)",
        plan.cuts.len(),
        plan.regions.len(),
        plan.stats.total_ms
    );
    if plan.regions.is_empty() {
        println!("No regions cleared the area threshold; nothing to save");
        return Ok(());
    }

    let base = config
        .input
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(|| format!("Input {} has no usable file name", config.input.display()))?;
    let ext = config
        .input
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("png");

    let mapper = SourceMapper::new(src_w, src_h, canvas_w, canvas_h);
    let saved = crop_and_save(
        &image,
        &plan.regions,
        &mapper,
        &config.output.dir,
        base,
        ext,
    )?;
    println!("Saved {} crops to {}", saved.len(), config.output.dir.display());

    if let Some(report_path) = &config.output.report_json {
        let report = CutImageReport {
            stats: &plan.stats,
            regions: &plan.regions,
            saved: &saved,
        };
        write_json_file(report_path, &report)?;
        println!("Saved report to {}", report_path.display());
    }

    Ok(())
}

fn usage() -> String {
    "Usage: cut_image <config.json>".to_string()
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CutImageReport<'a> {
    stats: &'a PlanStats,
    regions: &'a [Region],
    saved: &'a [SavedCrop],
}
