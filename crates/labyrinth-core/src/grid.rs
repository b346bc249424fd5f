//! The maze grid: a fixed-size matrix of open/closed cells.
//!
//! Cells are classified by coordinate parity (see [`CellKind`]): rooms sit at
//! even `(x, y)`, connectors between two rooms have exactly one odd
//! coordinate, and pillars (both odd) are never opened by carving.

use std::fmt;

use crate::error::MazeError;
use crate::geom::{Point, Range};

/// State of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    #[default]
    Closed,
    Open,
}

impl CellState {
    #[inline]
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }
}

/// Role of a cell in the maze lattice, derived from its coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellKind {
    /// Both coordinates even: a maze chamber.
    Room,
    /// Exactly one odd coordinate: the wall between two adjacent rooms.
    Connector,
    /// Both coordinates odd.
    Pillar,
}

impl CellKind {
    /// Classify a point by the parity of its coordinates.
    #[inline]
    pub const fn of(p: Point) -> Self {
        match (p.x.rem_euclid(2) == 0, p.y.rem_euclid(2) == 0) {
            (true, true) => Self::Room,
            (false, false) => Self::Pillar,
            _ => Self::Connector,
        }
    }
}

/// A `columns x rows` matrix of [`CellState`], initially all closed.
///
/// Dimensions are fixed at creation. All coordinate access is bounds-checked
/// and reports [`MazeError::OutOfBounds`] instead of panicking.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "GridRepr", into = "GridRepr"))]
pub struct Grid {
    cells: Vec<CellState>,
    bounds: Range,
}

/// Serialized form of a [`Grid`]: dimensions plus row-major cells.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct GridRepr {
    columns: i32,
    rows: i32,
    cells: Vec<CellState>,
}

#[cfg(feature = "serde")]
impl TryFrom<GridRepr> for Grid {
    type Error = MazeError;

    fn try_from(repr: GridRepr) -> Result<Self, MazeError> {
        let mut grid = Grid::new(repr.columns, repr.rows)?;
        if repr.cells.len() != grid.len() {
            return Err(MazeError::config(format!(
                "grid {}x{} needs {} cells, got {}",
                repr.columns,
                repr.rows,
                grid.len(),
                repr.cells.len()
            )));
        }
        grid.cells = repr.cells;
        Ok(grid)
    }
}

#[cfg(feature = "serde")]
impl From<Grid> for GridRepr {
    fn from(grid: Grid) -> Self {
        Self {
            columns: grid.columns(),
            rows: grid.rows(),
            cells: grid.cells,
        }
    }
}

impl Grid {
    /// Create an all-closed grid.
    ///
    /// Fails with [`MazeError::Config`] if either dimension is not positive
    /// or the cell count does not fit in an `i32`, so flat indices computed
    /// from coordinates never overflow.
    pub fn new(columns: i32, rows: i32) -> Result<Self, MazeError> {
        if columns <= 0 || rows <= 0 {
            return Err(MazeError::config(format!(
                "grid dimensions must be positive, got {columns}x{rows}"
            )));
        }
        let len = columns
            .checked_mul(rows)
            .ok_or_else(|| MazeError::config(format!("grid {columns}x{rows} is too large")))?
            as usize;
        Ok(Self {
            cells: vec![CellState::Closed; len],
            bounds: Range::from_size(Point::new(columns, rows)),
        })
    }

    /// The bounding range `[0, columns) x [0, rows)`.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Size as a Point (columns = x, rows = y).
    #[inline]
    pub fn size(&self) -> Point {
        self.bounds.size()
    }

    #[inline]
    pub fn columns(&self) -> i32 {
        self.bounds.width()
    }

    #[inline]
    pub fn rows(&self) -> i32 {
        self.bounds.height()
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false: a grid has at least one cell.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether the grid contains the given point.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    /// Get the cell state at a point, or `None` if out of bounds.
    #[inline]
    pub fn state(&self, p: Point) -> Option<CellState> {
        self.index(p).map(|i| self.cells[i])
    }

    /// Whether the cell at `p` is open.
    pub fn is_open(&self, p: Point) -> Result<bool, MazeError> {
        let i = self.checked_index(p)?;
        Ok(self.cells[i].is_open())
    }

    /// Open the cell at `p`. Opening an already open cell is a no-op.
    pub fn set_open(&mut self, p: Point) -> Result<(), MazeError> {
        let i = self.checked_index(p)?;
        self.cells[i] = CellState::Open;
        Ok(())
    }

    /// True iff every room cell is open: the carving termination predicate.
    pub fn is_fully_carved(&self) -> bool {
        self.rooms().all(|p| self.cells[self.flat(p)].is_open())
    }

    /// Row-major iterator over all room cells (even `x`, even `y`).
    pub fn rooms(&self) -> impl Iterator<Item = Point> + '_ {
        let columns = self.columns();
        (0..self.rows())
            .step_by(2)
            .flat_map(move |y| (0..columns).step_by(2).map(move |x| Point::new(x, y)))
    }

    /// Number of room cells.
    pub fn room_count(&self) -> usize {
        let rc = (self.columns() as usize).div_ceil(2);
        let rr = (self.rows() as usize).div_ceil(2);
        rc * rr
    }

    /// Number of open cells.
    pub fn open_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_open()).count()
    }

    /// Iterate over `(Point, CellState)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Point, CellState)> + '_ {
        self.bounds.iter().zip(self.cells.iter().copied())
    }

    /// Render the grid as text with `path` overlaid as `.`.
    ///
    /// Closed cells are `#`, open cells a space. Path cells outside the grid
    /// are ignored.
    pub fn render_with_path(&self, path: &[Point]) -> String {
        let mut chars: Vec<char> = self
            .cells
            .iter()
            .map(|c| if c.is_open() { ' ' } else { '#' })
            .collect();
        for &p in path {
            if let Some(i) = self.index(p) {
                chars[i] = '.';
            }
        }
        let columns = self.columns() as usize;
        let mut out = String::with_capacity(chars.len() + self.rows() as usize);
        for (i, row) in chars.chunks(columns).enumerate() {
            if i > 0 {
                out.push('\n');
            }
            out.extend(row);
        }
        out
    }

    #[inline]
    fn flat(&self, p: Point) -> usize {
        p.y as usize * self.columns() as usize + p.x as usize
    }

    #[inline]
    fn index(&self, p: Point) -> Option<usize> {
        self.bounds.contains(p).then(|| self.flat(p))
    }

    fn checked_index(&self, p: Point) -> Result<usize, MazeError> {
        self.index(p).ok_or(MazeError::OutOfBounds {
            pos: p,
            size: self.size(),
        })
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_with_path(&[]))
    }
}
