use super::contour::trace_outer_contour;
use super::labeling::label_open_components;
use super::*;
use crate::geometry::{Cut, Point};
use crate::types::CutError;

fn cut(x0: i32, y0: i32, x1: i32, y1: i32) -> Cut {
    Cut::new(Point::new(x0, y0), Point::new(x1, y1))
}

#[test]
fn mask_plots_horizontal_line() {
    let mut mask = CutMask::new(10, 10);
    mask.plot_line(Point::new(2, 3), Point::new(6, 3));
    assert_eq!(mask.blocked_cells(), 5);
    for x in 2..=6 {
        assert!(!mask.is_open(x, 3));
    }
    assert!(mask.is_open(1, 3) && mask.is_open(7, 3));
}

#[test]
fn mask_plots_diagonal_line() {
    let mut mask = CutMask::new(10, 10);
    mask.plot_line(Point::new(0, 0), Point::new(4, 4));
    assert_eq!(mask.blocked_cells(), 5);
    for k in 0..=4 {
        assert!(!mask.is_open(k, k));
    }
}

#[test]
fn mask_clips_out_of_range_cells() {
    let mut mask = CutMask::new(10, 10);
    mask.plot_line(Point::new(-5, 2), Point::new(3, 2));
    assert_eq!(mask.blocked_cells(), 4);
}

#[test]
fn mask_plotting_is_idempotent() {
    let mut mask = CutMask::new(10, 10);
    let c = cut(0, 5, 9, 5);
    mask.plot_cut(&c);
    let first = mask.blocked_cells();
    mask.plot_cut(&c);
    assert_eq!(mask.blocked_cells(), first);
}

#[test]
fn labeling_splits_on_vertical_line() {
    let mut mask = CutMask::new(11, 8);
    mask.plot_line(Point::new(5, 0), Point::new(5, 7));
    let map = label_open_components(&mask);
    assert_eq!(map.components.len(), 2);

    let left = &map.components[0];
    assert_eq!((left.min_x, left.min_y, left.max_x, left.max_y), (0, 0, 4, 7));
    assert_eq!(left.area, 40);
    assert_eq!((left.seed_x, left.seed_y), (0, 0));

    let right = &map.components[1];
    assert_eq!((right.min_x, right.max_x), (6, 10));
    assert_eq!(right.area, 40);
    assert_eq!((right.seed_x, right.seed_y), (6, 0));
}

#[test]
fn labeling_open_canvas_is_one_component() {
    let mask = CutMask::new(4, 3);
    let map = label_open_components(&mask);
    assert_eq!(map.components.len(), 1);
    let comp = &map.components[0];
    assert_eq!(comp.area, 12);
    assert_eq!((comp.min_x, comp.min_y, comp.max_x, comp.max_y), (0, 0, 3, 2));
}

#[test]
fn contour_of_square_block_is_clockwise_ring() {
    // 2x2 component labeled by hand inside a 6x6 map.
    let mut labels = vec![0u32; 36];
    for (x, y) in [(3, 3), (4, 3), (3, 4), (4, 4)] {
        labels[y * 6 + x] = 1;
    }
    let ring = trace_outer_contour(&labels, 6, 6, 1, 3, 3, 4);
    assert_eq!(
        ring,
        vec![
            Point::new(3, 3),
            Point::new(4, 3),
            Point::new(4, 4),
            Point::new(3, 4),
        ]
    );
}

#[test]
fn contour_of_single_cell_is_one_point() {
    let mut labels = vec![0u32; 25];
    labels[2 * 5 + 2] = 7;
    let ring = trace_outer_contour(&labels, 5, 5, 7, 2, 2, 1);
    assert_eq!(ring, vec![Point::new(2, 2)]);
}

#[test]
fn extract_without_cuts_returns_whole_canvas() {
    let regions =
        extract_regions(&[], 20, 20, &RegionOptions::default()).expect("canvas is valid");
    assert_eq!(regions.len(), 1);
    let region = &regions[0];
    assert_eq!((region.x1, region.y1, region.x2, region.y2), (0, 0, 20, 20));
    assert_eq!(region.area, 400);
    // Outer ring of a 20x20 block.
    assert_eq!(region.contour.len(), 76);
    assert_eq!(region.contour[0], Point::new(0, 0));
}

#[test]
fn extract_drops_canvas_below_area_threshold() {
    let regions =
        extract_regions(&[], 5, 5, &RegionOptions::default()).expect("canvas is valid");
    assert!(regions.is_empty());
}

#[test]
fn extract_plus_yields_four_quadrants_in_scan_order() {
    let cuts = [cut(50, 0, 50, 99), cut(0, 50, 99, 50)];
    let regions =
        extract_regions(&cuts, 100, 100, &RegionOptions::default()).expect("canvas is valid");
    assert_eq!(regions.len(), 4);

    let boxes: Vec<(usize, usize, usize, usize)> = regions
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
        ]
    );
    let areas: Vec<usize> = regions.iter().map(|r| r.area).collect();
    assert_eq!(areas, vec![2500, 2450, 2450, 2401]);
}

#[test]
fn extract_filters_sliver_between_close_cuts() {
    let cuts = [cut(50, 0, 50, 79), cut(52, 0, 52, 79)];
    let regions =
        extract_regions(&cuts, 80, 80, &RegionOptions::default()).expect("canvas is valid");
    // The one-cell-wide strip between the cuts (area 80) falls under the
    // default threshold.
    assert_eq!(regions.len(), 2);
    assert_eq!((regions[0].x1, regions[0].x2), (0, 50));
    assert_eq!(regions[0].area, 4000);
    assert_eq!((regions[1].x1, regions[1].x2), (53, 80));
    assert_eq!(regions[1].area, 2160);
}

#[test]
fn extract_diagonal_region_area_is_below_box_area() {
    let cuts = [cut(0, 0, 9, 9)];
    let options = RegionOptions { min_region_area: 10 };
    let regions = extract_regions(&cuts, 10, 10, &options).expect("canvas is valid");
    assert_eq!(regions.len(), 2);
    for region in &regions {
        assert_eq!(region.area, 45);
        assert!(region.area < region.width() * region.height());
    }
}

#[test]
fn extract_rejects_empty_canvas() {
    let err = extract_regions(&[], 10, 0, &RegionOptions::default())
        .expect_err("zero height must fail");
    assert_eq!(
        err,
        CutError::InvalidCanvas {
            width: 10,
            height: 0
        }
    );
}
