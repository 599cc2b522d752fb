use scan_cutter::geometry::{Point, Segment};
use scan_cutter::planner::{CutParams, CutPlanner};

fn main() {
    // Demo stub: plans a plus-shaped partition on a synthetic canvas
    let (w, h) = (640usize, 480usize);
    let segments = vec![
        Segment::new(Point::new(320, 40), Point::new(320, 440)),
        Segment::new(Point::new(60, 240), Point::new(580, 240)),
    ];

    let planner = CutPlanner::new(CutParams::default());
    match planner.plan(&segments, w, h) {
        Ok(plan) => {
            println!(
                "cuts={} regions={} total_ms={:.3}",
                plan.cuts.len(),
                plan.regions.len(),
                plan.stats.total_ms
            );
            for (i, region) in plan.regions.iter().enumerate() {
                println!(
                    "region {}: ({}, {}, {}, {}) area={}",
                    i + 1,
                    region.x1,
                    region.y1,
                    region.x2,
                    region.y2,
                    region.area
                );
            }
        }
        Err(err) => eprintln!("Error: {err}"),
    }
}
