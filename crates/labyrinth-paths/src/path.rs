use labyrinth_core::{MazeError, Point};

use crate::potential::{Potential, PotentialField};

/// An ordered walk from a source cell to a target cell.
///
/// Consecutive cells differ by one unit along exactly one axis, and every
/// cell is open in the grid the path was computed on.
///
/// With the `serde` feature a path (de)serializes as its list of cells;
/// deserialization goes through [`TryFrom<Vec<Point>>`] and rejects lists
/// that break these rules.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<Point>", into = "Vec<Point>"))]
pub struct Path {
    cells: Vec<Point>,
}

impl Path {
    /// First cell.
    pub fn source(&self) -> Point {
        self.cells[0]
    }

    /// Last cell.
    pub fn target(&self) -> Point {
        self.cells[self.cells.len() - 1]
    }

    /// Number of cells, including both endpoints.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false: a path holds at least its source.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of moves, one less than [`len`](Self::len).
    pub fn steps(&self) -> usize {
        self.cells.len() - 1
    }

    pub fn cells(&self) -> &[Point] {
        &self.cells
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.cells.iter()
    }

    pub fn contains(&self, p: Point) -> bool {
        self.cells.contains(&p)
    }

    pub fn into_vec(self) -> Vec<Point> {
        self.cells
    }
}

impl TryFrom<Vec<Point>> for Path {
    type Error = MazeError;

    /// Accepts a non-empty list whose consecutive cells are axis neighbours.
    fn try_from(cells: Vec<Point>) -> Result<Self, MazeError> {
        if cells.is_empty() {
            return Err(MazeError::config("a path needs at least one cell"));
        }
        if let Some(w) = cells.windows(2).find(|w| !w[0].is_adjacent(w[1])) {
            return Err(MazeError::config(format!(
                "path cells {} and {} are not adjacent",
                w[0], w[1]
            )));
        }
        Ok(Self { cells })
    }
}

impl From<Path> for Vec<Point> {
    fn from(path: Path) -> Self {
        path.cells
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

impl PotentialField {
    /// Walk downhill from `source` to the target.
    ///
    /// At each cell the neighbours are checked up, down, left, right, and the
    /// first one labelled exactly one less is taken. On a perfect maze the
    /// open cells form a tree, so exactly one neighbour qualifies at every
    /// step and the order never decides anything; on grids with cycles it is
    /// a deterministic tie-break.
    ///
    /// Fails with `OutOfBounds` outside the field and `Unreachable` if
    /// `source` is a wall, was never reached, or the labels are inconsistent.
    pub fn path_from(&self, source: Point) -> Result<Path, MazeError> {
        let unreachable = || MazeError::Unreachable {
            source,
            target: self.target,
        };
        let mut remaining = match self.at(source) {
            Some(Potential::Distance(d)) => d,
            Some(_) => return Err(unreachable()),
            None => {
                return Err(MazeError::OutOfBounds {
                    pos: source,
                    size: self.size(),
                });
            }
        };

        let mut cells = Vec::with_capacity(remaining as usize + 1);
        cells.push(source);
        let mut cur = source;
        while remaining > 0 {
            let want = Potential::Distance(remaining - 1);
            cur = cur
                .neighbors_4()
                .into_iter()
                .find(|&n| self.at(n) == Some(want))
                .ok_or_else(unreachable)?;
            cells.push(cur);
            remaining -= 1;
        }
        Ok(Path { cells })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use labyrinth_core::Grid;

    fn open_all(columns: i32, rows: i32) -> Grid {
        let mut g = Grid::new(columns, rows).unwrap();
        for p in g.bounds() {
            g.set_open(p).unwrap();
        }
        g
    }

    #[test]
    fn source_equals_target() {
        let g = open_all(3, 3);
        let field = PotentialField::new(&g, Point::new(1, 1)).unwrap();
        let path = field.path_from(Point::new(1, 1)).unwrap();
        assert_eq!(path.cells(), &[Point::new(1, 1)]);
        assert_eq!(path.steps(), 0);
    }

    #[test]
    fn ties_prefer_up_then_down_then_left_then_right() {
        // In an open room from (2,2) to (0,0) both up and left qualify at
        // the first step; up wins every time until the row is reached.
        let g = open_all(3, 3);
        let field = PotentialField::new(&g, Point::new(0, 0)).unwrap();
        let path = field.path_from(Point::new(2, 2)).unwrap();
        assert_eq!(
            path.into_vec(),
            vec![
                Point::new(2, 2),
                Point::new(2, 1),
                Point::new(2, 0),
                Point::new(1, 0),
                Point::new(0, 0),
            ]
        );

        // Toward the bottom-right corner, down is checked before right.
        let field = PotentialField::new(&g, Point::new(2, 2)).unwrap();
        let path = field.path_from(Point::new(0, 0)).unwrap();
        assert_eq!(path.cells()[1], Point::new(0, 1));
    }

    #[test]
    fn walls_and_unvisited_are_unreachable() {
        let mut g = Grid::new(5, 1).unwrap();
        for x in [0, 1, 3] {
            g.set_open(Point::new(x, 0)).unwrap();
        }
        let field = PotentialField::new(&g, Point::new(0, 0)).unwrap();
        let expected = |x| MazeError::Unreachable {
            source: Point::new(x, 0),
            target: Point::new(0, 0),
        };
        assert_eq!(field.path_from(Point::new(2, 0)), Err(expected(2)));
        assert_eq!(field.path_from(Point::new(3, 0)), Err(expected(3)));
        assert!(matches!(
            field.path_from(Point::new(9, 0)),
            Err(MazeError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn path_accessors() {
        let g = open_all(4, 1);
        let field = PotentialField::new(&g, Point::new(3, 0)).unwrap();
        let path = field.path_from(Point::new(0, 0)).unwrap();
        assert_eq!(path.source(), Point::new(0, 0));
        assert_eq!(path.target(), Point::new(3, 0));
        assert_eq!(path.len(), 4);
        assert!(!path.is_empty());
        assert!(path.contains(Point::new(2, 0)));
        assert_eq!((&path).into_iter().count(), 4);
    }

    #[test]
    fn building_from_cells_checks_shape() {
        assert!(matches!(Path::try_from(Vec::new()), Err(MazeError::Config(_))));
        assert!(matches!(
            Path::try_from(vec![Point::ZERO, Point::new(1, 1)]),
            Err(MazeError::Config(_))
        ));
        let path = Path::try_from(vec![Point::ZERO, Point::new(0, 1), Point::new(1, 1)]).unwrap();
        assert_eq!(path.source(), Point::ZERO);
        assert_eq!(path.target(), Point::new(1, 1));
        assert_eq!(path.steps(), 2);
        assert_eq!(Vec::from(path).len(), 3);
    }
}
