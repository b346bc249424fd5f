//! Shortest paths on carved maze grids.
//!
//! A query runs in two phases:
//!
//! - **Potential field** ([`PotentialField::new`]): a breadth-first flood
//!   from the target labels every open cell with its grid-step distance.
//!   [`PotentialField::relax_full_scan`] computes the same labels by
//!   repeated sweeps and serves as a reference.
//! - **Reconstruction** ([`PotentialField::path_from`]): a deterministic
//!   downhill walk from the source to the target.
//!
//! [`find_path`] composes both. Queries only read the grid, so a carved
//! [`Grid`] can be shared by any number of concurrent queries.
//!
//! [`Components`] and [`is_perfect_maze`] check maze connectivity.

mod bfs;
mod cc;
mod path;
mod potential;
mod relax;
mod traits;

use labyrinth_core::{Grid, MazeError, Point};

pub use cc::{Components, is_perfect_maze};
pub use path::Path;
pub use potential::{Potential, PotentialField};
pub use traits::Pather;

/// Shortest path from `source` to `target` through open cells.
///
/// Fails with `OutOfBounds` if either endpoint lies outside the grid,
/// `InvalidCell` if either is closed, and `Unreachable` if they are not
/// connected.
pub fn find_path(grid: &Grid, source: Point, target: Point) -> Result<Path, MazeError> {
    for p in [target, source] {
        if !grid.is_open(p)? {
            return Err(MazeError::InvalidCell(p));
        }
    }
    let field = PotentialField::new(grid, target)?;
    let path = field.path_from(source)?;
    log::debug!("path {source} -> {target}: {} steps", path.steps());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ring() -> Grid {
        // A 3x3 loop around a closed centre.
        let mut g = Grid::new(3, 3).unwrap();
        for p in g.bounds() {
            if p != Point::new(1, 1) {
                g.set_open(p).unwrap();
            }
        }
        g
    }

    #[test]
    fn endpoints_must_be_open() {
        let g = ring();
        let centre = Point::new(1, 1);
        assert_eq!(
            find_path(&g, centre, Point::ZERO),
            Err(MazeError::InvalidCell(centre))
        );
        assert_eq!(
            find_path(&g, Point::ZERO, centre),
            Err(MazeError::InvalidCell(centre))
        );
        assert!(matches!(
            find_path(&g, Point::new(3, 3), Point::ZERO),
            Err(MazeError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn picks_a_shortest_route_around_the_ring() {
        let g = ring();
        let path = find_path(&g, Point::new(2, 2), Point::ZERO).unwrap();
        assert_eq!(path.len(), 5);
        assert_eq!(path.source(), Point::new(2, 2));
        assert_eq!(path.target(), Point::ZERO);
        // Up is preferred over left at the first fork.
        assert_eq!(path.cells()[1], Point::new(2, 1));
    }
}
