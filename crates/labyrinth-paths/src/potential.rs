use std::fmt;

use labyrinth_core::{Grid, MazeError, Point, Range};

/// Label of one cell in a [`PotentialField`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Potential {
    /// Closed cell.
    Wall,
    /// Open cell the flood fill has not reached.
    Unvisited,
    /// Open cell at this many steps from the target.
    Distance(u32),
}

impl Potential {
    /// The distance, if the cell was reached.
    #[inline]
    pub const fn distance(self) -> Option<u32> {
        match self {
            Self::Distance(d) => Some(d),
            _ => None,
        }
    }
}

/// Grid-step distance from every open cell to a single target.
///
/// Built by [`PotentialField::new`] (breadth-first) or
/// [`PotentialField::relax_full_scan`] (repeated sweeps); both produce the
/// same labels for the same grid and target.
///
/// With the `serde` feature the field serializes for inspection; it is
/// always rebuilt from a grid, never deserialized.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PotentialField {
    pub(crate) rng: Range,
    pub(crate) width: usize,
    pub(crate) target: Point,
    pub(crate) values: Vec<Potential>,
}

impl PotentialField {
    /// Label closed cells `Wall`, open cells `Unvisited` and the target `0`.
    ///
    /// Fails with `OutOfBounds` if the target is outside the grid and with
    /// `InvalidCell` if it is closed.
    pub(crate) fn seeded(grid: &Grid, target: Point) -> Result<Self, MazeError> {
        if !grid.is_open(target)? {
            return Err(MazeError::InvalidCell(target));
        }
        let values = grid
            .iter()
            .map(|(_, c)| {
                if c.is_open() {
                    Potential::Unvisited
                } else {
                    Potential::Wall
                }
            })
            .collect();
        let mut field = Self {
            rng: grid.bounds(),
            width: grid.columns() as usize,
            target,
            values,
        };
        let ti = field.flat(target);
        field.values[ti] = Potential::Distance(0);
        Ok(field)
    }

    /// The cell every distance is measured to.
    #[inline]
    pub fn target(&self) -> Point {
        self.target
    }

    /// Size of the labelled area, matching the source grid.
    #[inline]
    pub fn size(&self) -> Point {
        self.rng.size()
    }

    /// The label at `p`, or `None` outside the field.
    #[inline]
    pub fn at(&self, p: Point) -> Option<Potential> {
        self.idx(p).map(|i| self.values[i])
    }

    /// Largest distance in the field.
    pub fn max_distance(&self) -> u32 {
        self.values
            .iter()
            .filter_map(|v| v.distance())
            .max()
            .unwrap_or(0)
    }

    /// Number of open cells not connected to the target.
    pub fn unvisited_count(&self) -> usize {
        self.values
            .iter()
            .filter(|v| matches!(v, Potential::Unvisited))
            .count()
    }

    /// Row-major iterator over `(Point, Potential)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Point, Potential)> + '_ {
        self.rng.iter().zip(self.values.iter().copied())
    }

    // -----------------------------------------------------------------------
    // Coordinate helpers
    // -----------------------------------------------------------------------

    /// Convert a `Point` to a flat index. Returns `None` if out of range.
    #[inline]
    pub(crate) fn idx(&self, p: Point) -> Option<usize> {
        self.rng.contains(p).then(|| self.flat(p))
    }

    #[inline]
    pub(crate) fn flat(&self, p: Point) -> usize {
        let x = (p.x - self.rng.min.x) as usize;
        let y = (p.y - self.rng.min.y) as usize;
        y * self.width + x
    }

    /// Convert a flat index back to a `Point`.
    #[inline]
    pub(crate) fn point(&self, idx: usize) -> Point {
        let x = (idx % self.width) as i32 + self.rng.min.x;
        let y = (idx / self.width) as i32 + self.rng.min.y;
        Point::new(x, y)
    }
}

/// Debug rendering: `#` walls, `?` unvisited, distances in base 36 (`+` past
/// 35).
impl fmt::Display for PotentialField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.values.chunks(self.width).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for v in row {
                let ch = match v {
                    Potential::Wall => '#',
                    Potential::Unvisited => '?',
                    Potential::Distance(d) => char::from_digit(*d, 36).unwrap_or('+'),
                };
                write!(f, "{ch}")?;
            }
        }
        Ok(())
    }
}
