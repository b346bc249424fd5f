//! Connected-component labelling of open cells.

use labyrinth_core::{Grid, Point};

use crate::traits::Pather;

/// Component labels for every open cell of a grid.
#[derive(Debug, Clone)]
pub struct Components {
    width: usize,
    labels: Vec<Option<u32>>,
    count: u32,
}

impl Components {
    /// Label every open cell of `grid` with a component ID.
    ///
    /// Two open cells share a label iff a path of open axis neighbours joins
    /// them. Closed cells are unlabelled.
    pub fn new(grid: &Grid) -> Self {
        let width = grid.columns() as usize;
        let mut labels = vec![None; grid.len()];
        let idx = |p: Point| p.y as usize * width + p.x as usize;

        let mut label: u32 = 0;
        let mut stack = Vec::new();
        let mut nbuf = Vec::with_capacity(4);

        for (start, state) in grid.iter() {
            if !state.is_open() || labels[idx(start)].is_some() {
                continue;
            }

            // Iterative DFS from `start`.
            stack.clear();
            stack.push(start);
            labels[idx(start)] = Some(label);

            while let Some(cp) = stack.pop() {
                nbuf.clear();
                grid.neighbors(cp, &mut nbuf);
                for &np in &nbuf {
                    let ni = idx(np);
                    if labels[ni].is_none() {
                        labels[ni] = Some(label);
                        stack.push(np);
                    }
                }
            }

            label += 1;
        }

        Self {
            width,
            labels,
            count: label,
        }
    }

    /// Number of distinct components.
    pub fn count(&self) -> usize {
        self.count as usize
    }

    /// Component of `p`, or `None` for closed or out-of-range cells.
    pub fn at(&self, p: Point) -> Option<u32> {
        if p.x < 0 || p.y < 0 || p.x as usize >= self.width {
            return None;
        }
        let i = p.y as usize * self.width + p.x as usize;
        self.labels.get(i).copied().flatten()
    }

    /// Whether `a` and `b` are open and connected.
    pub fn connected(&self, a: Point, b: Point) -> bool {
        matches!((self.at(a), self.at(b)), (Some(x), Some(y)) if x == y)
    }
}

/// Whether `grid` is a perfect maze: every room open, all open cells in one
/// component, and no cycles (open cells form a tree, so adjacent open pairs
/// number exactly one less than open cells).
pub fn is_perfect_maze(grid: &Grid) -> bool {
    if !grid.is_fully_carved() {
        return false;
    }
    if Components::new(grid).count() != 1 {
        return false;
    }
    let open = grid.open_count();
    let mut edges = 0usize;
    for (p, state) in grid.iter() {
        if !state.is_open() {
            continue;
        }
        // Count each adjacency once, from its upper or left end.
        for n in [p.shift(1, 0), p.shift(0, 1)] {
            if grid.state(n).is_some_and(|c| c.is_open()) {
                edges += 1;
            }
        }
    }
    edges + 1 == open
}
