//! 4-connected labeling of the open cells left between cuts.

use super::raster::CutMask;

/// Von Neumann neighborhood; diagonal contact does not connect, so a
/// one-pixel diagonal cut fully separates its two sides.
const NEIGH_OFFSETS: [(isize, isize); 4] = [(0, -1), (-1, 0), (1, 0), (0, 1)];

/// One connected open component with its running bounds.
///
/// `seed` is the component's first cell in row-major scan order, which makes
/// it the top-left-most cell: nothing of the component lies above its row or
/// to its left within that row.
#[derive(Clone, Debug)]
pub(super) struct Component {
    pub label: u32,
    pub area: usize,
    pub min_x: usize,
    pub min_y: usize,
    pub max_x: usize,
    pub max_y: usize,
    pub seed_x: usize,
    pub seed_y: usize,
}

pub(super) struct LabelMap {
    /// Row-major; 0 = blocked or unvisited, labels start at 1.
    pub labels: Vec<u32>,
    /// In discovery (row-major seed) order.
    pub components: Vec<Component>,
}

pub(super) fn label_open_components(mask: &CutMask) -> LabelMap {
    ComponentLabeler::new(mask).run()
}

/// Scan-order seeded flood fill with an explicit stack; the stack is reused
/// across components.
struct ComponentLabeler<'a> {
    mask: &'a CutMask,
    width: usize,
    height: usize,
    labels: Vec<u32>,
    stack: Vec<usize>,
    components: Vec<Component>,
}

impl<'a> ComponentLabeler<'a> {
    fn new(mask: &'a CutMask) -> Self {
        let width = mask.width();
        let height = mask.height();
        Self {
            mask,
            width,
            height,
            labels: vec![0; width * height],
            stack: Vec::with_capacity(256),
            components: Vec::new(),
        }
    }

    fn run(mut self) -> LabelMap {
        for idx in 0..self.labels.len() {
            self.grow_from_seed(idx);
        }
        LabelMap {
            labels: self.labels,
            components: self.components,
        }
    }

    fn grow_from_seed(&mut self, seed: usize) {
        if self.labels[seed] != 0 {
            return;
        }
        let sx = seed % self.width;
        let sy = seed / self.width;
        if !self.mask.is_open(sx, sy) {
            return;
        }

        let label = self.components.len() as u32 + 1;
        let mut comp = Component {
            label,
            area: 0,
            min_x: sx,
            min_y: sy,
            max_x: sx,
            max_y: sy,
            seed_x: sx,
            seed_y: sy,
        };

        self.labels[seed] = label;
        self.stack.push(seed);
        while let Some(idx) = self.stack.pop() {
            let x = idx % self.width;
            let y = idx / self.width;
            comp.area += 1;
            comp.min_x = comp.min_x.min(x);
            comp.min_y = comp.min_y.min(y);
            comp.max_x = comp.max_x.max(x);
            comp.max_y = comp.max_y.max(y);

            for (dx, dy) in NEIGH_OFFSETS {
                let nx = x as isize + dx;
                let ny = y as isize + dy;
                if nx < 0 || ny < 0 || nx >= self.width as isize || ny >= self.height as isize {
                    continue;
                }
                let nidx = ny as usize * self.width + nx as usize;
                if self.labels[nidx] != 0 || !self.mask.is_open(nx as usize, ny as usize) {
                    continue;
                }
                self.labels[nidx] = label;
                self.stack.push(nidx);
            }
        }
        self.components.push(comp);
    }
}
