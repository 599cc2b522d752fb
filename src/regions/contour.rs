//! Moore-neighbour boundary tracing over the label map.

use crate::geometry::Point;

/// Moore neighborhood, clockwise from east.
const DIRS: [(i32, i32); 8] = [
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

/// Trace the outer boundary of one labeled component clockwise, starting at
/// its scan-order seed cell.
///
/// Each move resumes the neighborhood sweep just past the backtrack
/// direction, `(dir + 5) % 8`, so the walk hugs the boundary. The trace
/// terminates on the first return to the start cell; a single-cell component
/// yields a one-point contour. `max_steps` bounds the walk against label-map
/// corruption.
pub(super) fn trace_outer_contour(
    labels: &[u32],
    width: usize,
    height: usize,
    label: u32,
    start_x: usize,
    start_y: usize,
    area: usize,
) -> Vec<Point> {
    let inside = |x: i32, y: i32| -> bool {
        x >= 0
            && y >= 0
            && (x as usize) < width
            && (y as usize) < height
            && labels[y as usize * width + x as usize] == label
    };

    let sx = start_x as i32;
    let sy = start_y as i32;
    let mut contour = vec![Point::new(sx, sy)];

    // Backtrack seed: the first outside neighbor clockwise from east. The
    // scan-order start cell always has one (its north and west are outside).
    let mut dir = 0usize;
    for (i, &(dx, dy)) in DIRS.iter().enumerate() {
        if !inside(sx + dx, sy + dy) {
            dir = i;
            break;
        }
    }

    let max_steps = 4 * area + 8;
    let mut steps = 0usize;
    let mut cx = sx;
    let mut cy = sy;
    loop {
        let mut advanced = false;
        let search_start = (dir + 5) % 8;
        for k in 0..8 {
            let d = (search_start + k) % 8;
            let (dx, dy) = DIRS[d];
            let nx = cx + dx;
            let ny = cy + dy;
            if !inside(nx, ny) {
                continue;
            }
            if nx == sx && ny == sy && steps > 0 {
                return contour;
            }
            contour.push(Point::new(nx, ny));
            cx = nx;
            cy = ny;
            dir = d;
            advanced = true;
            break;
        }
        if !advanced {
            // Isolated cell, no neighbors to walk.
            return contour;
        }
        steps += 1;
        if steps >= max_steps {
            return contour;
        }
    }
}
