//! One-pixel rasterization of cuts onto a binary canvas plane.

use crate::geometry::{Cut, Point};

/// Binary canvas plane. Cells start open and are blocked as cuts are
/// plotted over them; plotting is idempotent, so duplicate cuts cost nothing.
#[derive(Clone, Debug)]
pub struct CutMask {
    width: usize,
    height: usize,
    /// Row-major; 1 = blocked by a cut.
    blocked: Vec<u8>,
}

impl CutMask {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            blocked: vec![0; width * height],
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn is_open(&self, x: usize, y: usize) -> bool {
        self.blocked[y * self.width + x] == 0
    }

    pub fn blocked_cells(&self) -> usize {
        self.blocked.iter().filter(|&&b| b != 0).count()
    }

    pub fn plot_cut(&mut self, cut: &Cut) {
        self.plot_line(cut.p0, cut.p1);
    }

    /// Bresenham line, one pixel wide. Cells outside the canvas are clipped
    /// rather than wrapped, so out-of-range cuts degrade gracefully.
    pub fn plot_line(&mut self, a: Point, b: Point) {
        let dx = (b.x - a.x).abs();
        let dy = -(b.y - a.y).abs();
        let sx = if a.x < b.x { 1 } else { -1 };
        let sy = if a.y < b.y { 1 } else { -1 };
        let mut err = dx + dy;
        let mut x = a.x;
        let mut y = a.y;
        loop {
            self.plot(x, y);
            if x == b.x && y == b.y {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    /// 255 = open, 0 = blocked; row-major, ready for a grayscale export.
    pub fn to_grayscale(&self) -> Vec<u8> {
        self.blocked
            .iter()
            .map(|&b| if b == 0 { 255 } else { 0 })
            .collect()
    }

    #[inline]
    fn plot(&mut self, x: i32, y: i32) {
        if x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height {
            self.blocked[y as usize * self.width + x as usize] = 1;
        }
    }
}
