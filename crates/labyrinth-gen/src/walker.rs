//! Carving agents that hop between rooms.

use labyrinth_core::{Grid, MazeError, Point};
use rand::Rng;

/// Room-to-room hops: two cells along one axis, skipping the connector.
pub const MOVES: [Point; 4] = [
    Point::new(-2, 0),
    Point::new(2, 0),
    Point::new(0, -2),
    Point::new(0, 2),
];

/// What a single walker step did to the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stride {
    /// The destination room was closed; it and its connector were opened.
    Carved { room: Point, connector: Point },
    /// The destination room was already open; nothing was carved.
    Moved(Point),
    /// No move keeps the walker inside the grid (1x1 grids).
    Stuck,
}

/// A randomized carving agent resting on a room cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Walker {
    pos: Point,
}

impl Walker {
    pub const fn new(pos: Point) -> Self {
        Self { pos }
    }

    #[inline]
    pub const fn pos(&self) -> Point {
        self.pos
    }

    /// Moves from [`MOVES`] that keep the walker inside `grid`, in table
    /// order. Returns the buffer and the number of valid entries.
    pub fn candidates(&self, grid: &Grid) -> ([Point; 4], usize) {
        let mut buf = [Point::ZERO; 4];
        let mut n = 0;
        for d in MOVES {
            if grid.contains(self.pos + d) {
                buf[n] = d;
                n += 1;
            }
        }
        (buf, n)
    }

    /// Hop to a uniformly chosen in-bounds neighbour room, carving the
    /// destination and the connector crossed if the destination was closed.
    pub fn stride<R: Rng + ?Sized>(
        &mut self,
        grid: &mut Grid,
        rng: &mut R,
    ) -> Result<Stride, MazeError> {
        let (moves, n) = self.candidates(grid);
        if n == 0 {
            return Ok(Stride::Stuck);
        }
        let d = moves[rng.random_range(0..n)];
        let from = self.pos;
        let to = from + d;
        self.pos = to;

        if grid.is_open(to)? {
            return Ok(Stride::Moved(to));
        }
        let connector = from.midpoint(to);
        grid.set_open(to)?;
        grid.set_open(connector)?;
        Ok(Stride::Carved {
            room: to,
            connector,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn corner_has_two_candidates() {
        let grid = Grid::new(5, 5).unwrap();
        let (moves, n) = Walker::new(Point::new(0, 0)).candidates(&grid);
        assert_eq!(n, 2);
        assert_eq!(&moves[..n], &[Point::new(2, 0), Point::new(0, 2)]);
    }

    #[test]
    fn centre_has_four_candidates() {
        let grid = Grid::new(5, 5).unwrap();
        let (_, n) = Walker::new(Point::new(2, 2)).candidates(&grid);
        assert_eq!(n, 4);
    }

    #[test]
    fn single_row_only_moves_horizontally() {
        let grid = Grid::new(5, 1).unwrap();
        let (moves, n) = Walker::new(Point::new(2, 0)).candidates(&grid);
        assert_eq!(&moves[..n], &[Point::new(-2, 0), Point::new(2, 0)]);
    }

    #[test]
    fn stuck_on_single_cell() {
        let mut grid = Grid::new(1, 1).unwrap();
        let mut w = Walker::new(Point::ZERO);
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(w.stride(&mut grid, &mut rng), Ok(Stride::Stuck));
        assert_eq!(w.pos(), Point::ZERO);
    }

    #[test]
    fn stride_into_closed_room_carves_connector() {
        let mut grid = Grid::new(3, 1).unwrap();
        grid.set_open(Point::ZERO).unwrap();
        let mut w = Walker::new(Point::ZERO);
        let mut rng = StdRng::seed_from_u64(9);
        let s = w.stride(&mut grid, &mut rng).unwrap();
        assert_eq!(
            s,
            Stride::Carved {
                room: Point::new(2, 0),
                connector: Point::new(1, 0),
            }
        );
        assert_eq!(grid.open_count(), 3);

        // Walking back into an open room carves nothing.
        let s = w.stride(&mut grid, &mut rng).unwrap();
        assert_eq!(s, Stride::Moved(Point::ZERO));
        assert_eq!(grid.open_count(), 3);
    }
}
