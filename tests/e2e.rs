mod common;

use common::strokes::plus;
use scan_cutter::prelude::*;
use scan_cutter::regions::CutMask;

fn seg(x0: i32, y0: i32, x1: i32, y1: i32) -> Segment {
    Segment::new(Point::new(x0, y0), Point::new(x1, y1))
}

fn boxes_overlap(a: &Region, b: &Region) -> bool {
    a.x1 < b.x2 && b.x1 < a.x2 && a.y1 < b.y2 && b.y1 < a.y2
}

#[test]
fn plus_strokes_split_canvas_into_quadrants() {
    let _ = env_logger::builder().is_test(true).try_init();
    let planner = CutPlanner::new(CutParams::default());
    let plan = planner
        .plan(&plus(100, 100), 100, 100)
        .expect("canvas is valid");

    // Each stroke chains into four cuts through borders, endpoints and the
    // central crossing.
    assert_eq!(plan.cuts.len(), 8);
    assert_eq!(plan.regions.len(), 4);

    let boxes: Vec<(usize, usize, usize, usize)> = plan
        .regions
        .iter()
        .map(|r| (r.x1, r.y1, r.x2, r.y2))
        .collect();
    assert_eq!(
        boxes,
        vec![
            (0, 0, 50, 50),
            (51, 0, 100, 50),
            (0, 51, 50, 100),
            (51, 51, 100, 100),
        ],
        "quadrants must come out in row-major discovery order"
    );
    let areas: Vec<usize> = plan.regions.iter().map(|r| r.area).collect();
    assert_eq!(areas, vec![2500, 2450, 2450, 2401]);
}

#[test]
fn empty_input_yields_single_full_canvas_region() {
    let planner = CutPlanner::new(CutParams::default());
    let plan = planner.plan(&[], 200, 150).expect("canvas is valid");
    assert!(plan.cuts.is_empty());
    assert_eq!(plan.regions.len(), 1);
    let region = &plan.regions[0];
    assert_eq!((region.x1, region.y1, region.x2, region.y2), (0, 0, 200, 150));
    assert_eq!(region.area, 200 * 150);
    assert_eq!(region.contour[0], Point::new(0, 0));
}

#[test]
fn tiny_canvas_yields_no_regions() {
    let planner = CutPlanner::new(CutParams::default());
    let plan = planner.plan(&[], 5, 5).expect("canvas is valid");
    assert!(plan.regions.is_empty(), "25 cells fall under the default area threshold");
}

#[test]
fn diagonal_cross_accounts_for_every_cell() {
    let planner = CutPlanner::new(CutParams::default());
    let strokes = [seg(10, 10, 90, 90), seg(90, 10, 10, 90)];
    let plan = planner.plan(&strokes, 101, 101).expect("canvas is valid");

    assert_eq!(plan.cuts.len(), 8);
    assert_eq!(plan.regions.len(), 4);
    for region in &plan.regions {
        assert_eq!(region.area, 2500);
    }

    // Every cell is either blocked by a cut or owned by exactly one region.
    let mut mask = CutMask::new(101, 101);
    for cut in &plan.cuts {
        mask.plot_cut(cut);
    }
    let owned: usize = plan.regions.iter().map(|r| r.area).sum();
    assert_eq!(owned + mask.blocked_cells(), 101 * 101);

    // Triangular regions have overlapping boxes even though their cell sets
    // are disjoint.
    assert!(boxes_overlap(&plan.regions[0], &plan.regions[1]));
}

#[test]
fn oblique_stroke_closes_to_the_borders() {
    let planner = CutPlanner::new(CutParams::default());
    let plan = planner
        .plan(&[seg(20, 30, 60, 70)], 90, 100)
        .expect("canvas is valid");

    // Chain: left border hit, both endpoints, bottom-right corner.
    assert_eq!(plan.cuts.len(), 3);
    assert_eq!(plan.cuts[0].p0, Point::new(0, 10));
    assert_eq!(plan.cuts[2].p1, Point::new(89, 99));

    assert_eq!(plan.regions.len(), 2);
    // The 45-degree line burns one cell per column; the halves keep the rest.
    assert_eq!(plan.regions[0].area, 4905);
    assert_eq!(plan.regions[1].area, 4005);
}

#[test]
fn single_vertical_stroke_splits_full_height() {
    let planner = CutPlanner::new(CutParams::default());
    let plan = planner
        .plan(&[seg(30, 20, 30, 150)], 60, 200)
        .expect("canvas is valid");
    assert_eq!(plan.regions.len(), 2);
    for region in &plan.regions {
        assert_eq!((region.y1, region.y2), (0, 200), "halves must span the full height");
    }
    assert_eq!((plan.regions[0].x1, plan.regions[0].x2), (0, 30));
    assert_eq!((plan.regions[1].x1, plan.regions[1].x2), (31, 60));
}

#[test]
fn replanning_identical_input_is_deterministic() {
    let planner = CutPlanner::new(CutParams::default());
    let strokes = plus(120, 90);
    let first = planner.plan(&strokes, 120, 90).expect("canvas is valid");
    let second = planner.plan(&strokes, 120, 90).expect("canvas is valid");
    assert_eq!(first.cuts, second.cuts);
    assert_eq!(first.regions, second.regions);
}

#[test]
fn invalid_canvas_is_rejected() {
    let planner = CutPlanner::new(CutParams::default());
    let err = planner
        .plan(&plus(100, 100), 0, 100)
        .expect_err("zero width must fail");
    assert_eq!(
        err,
        CutError::InvalidCanvas {
            width: 0,
            height: 100
        }
    );
}

#[test]
fn session_gates_clicks_before_planning() {
    let mut session = DrawSession::new(100, 100).expect("canvas is valid");
    assert!(!session.add_segment(Point::new(40, 40), Point::new(44, 43)));
    for stroke in plus(100, 100) {
        assert!(session.add_segment(stroke.p0, stroke.p1));
    }
    assert_eq!(session.len(), 2);

    let planner = CutPlanner::new(CutParams::default());
    let plan = planner
        .plan(session.segments(), 100, 100)
        .expect("canvas is valid");
    assert_eq!(plan.regions.len(), 4);
}
