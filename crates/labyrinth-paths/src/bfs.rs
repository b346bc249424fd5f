use std::collections::VecDeque;

use labyrinth_core::{Grid, MazeError, Point};

use crate::potential::{Potential, PotentialField};
use crate::traits::Pather;

impl PotentialField {
    /// Compute the distance from every open cell to `target` with a
    /// queue-driven breadth-first flood.
    ///
    /// Each open cell is labelled once, with its shortest grid-step distance
    /// to the target. Open cells in other components stay
    /// [`Potential::Unvisited`].
    pub fn new(grid: &Grid, target: Point) -> Result<Self, MazeError> {
        let mut field = Self::seeded(grid, target)?;

        let mut queue: VecDeque<usize> = VecDeque::new();
        queue.push_back(field.flat(target));
        let mut nbuf = Vec::with_capacity(4);
        let mut reached = 1usize;

        while let Some(ci) = queue.pop_front() {
            let Potential::Distance(d) = field.values[ci] else {
                continue;
            };
            let cp = field.point(ci);

            nbuf.clear();
            grid.neighbors(cp, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = field.idx(np) else {
                    continue;
                };
                if field.values[ni] != Potential::Unvisited {
                    continue;
                }
                field.values[ni] = Potential::Distance(d + 1);
                queue.push_back(ni);
                reached += 1;
            }
        }

        log::debug!(
            "potential field to {target}: {reached} cells reached, {} unvisited",
            field.unvisited_count()
        );
        Ok(field)
    }
}
