use labyrinth_core::{Grid, Point};

/// Minimal pathfinding interface: neighbour enumeration.
pub trait Pather {
    /// Append neighbors of `p` into `buf`. The caller clears `buf` before calling.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>);
}

/// A maze grid connects each open cell to its open axis neighbours, listed
/// up, down, left, right.
impl Pather for Grid {
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        for n in p.neighbors_4() {
            if self.state(n).is_some_and(|c| c.is_open()) {
                buf.push(n);
            }
        }
    }
}
