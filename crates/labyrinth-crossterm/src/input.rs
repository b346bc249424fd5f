//! Pointer snapping and the two-click endpoint selection.

use labyrinth_core::Point;

/// Placement of the maze on the terminal.
///
/// Every maze cell covers `cell_width x cell_height` terminal cells, starting
/// at `origin` (the padding around the maze).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub origin: Point,
    pub cell_width: i32,
    pub cell_height: i32,
}

impl Default for Viewport {
    /// One cell of padding; two columns per maze cell keep cells roughly
    /// square in most terminal fonts.
    fn default() -> Self {
        Self {
            origin: Point::new(1, 1),
            cell_width: 2,
            cell_height: 1,
        }
    }
}

impl Viewport {
    /// The maze cell under terminal position `screen`, or `None` if it falls
    /// in the padding or past a maze of `maze_size` cells.
    pub fn cell_at(&self, screen: Point, maze_size: Point) -> Option<Point> {
        let rel = screen - self.origin;
        if rel.x < 0 || rel.y < 0 {
            return None;
        }
        let cell = Point::new(rel.x / self.cell_width, rel.y / self.cell_height);
        (cell.x < maze_size.x && cell.y < maze_size.y).then_some(cell)
    }

    /// Top-left terminal position of maze cell `cell`.
    pub fn screen_of(&self, cell: Point) -> Point {
        self.origin + Point::new(cell.x * self.cell_width, cell.y * self.cell_height)
    }

    /// Terminal extent needed for a maze of `maze_size` cells, padding on
    /// both sides included.
    pub fn extent(&self, maze_size: Point) -> Point {
        Point::new(
            maze_size.x * self.cell_width,
            maze_size.y * self.cell_height,
        ) + self.origin * 2
    }
}

/// Path endpoints chosen by clicking.
///
/// Each click on a cell other than the latest one pushes the latest into the
/// anchor slot. Once both are set, the path runs from the latest click (the
/// source) to the anchor (the target).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    anchor: Option<Point>,
    latest: Option<Point>,
}

impl Selection {
    /// Record a click on an open cell. Returns false if `cell` was already
    /// the latest selection.
    pub fn select(&mut self, cell: Point) -> bool {
        if self.latest == Some(cell) {
            return false;
        }
        self.anchor = self.latest;
        self.latest = Some(cell);
        true
    }

    /// The path target: the previous click.
    pub fn anchor(&self) -> Option<Point> {
        self.anchor
    }

    /// The path source: the most recent click.
    pub fn latest(&self) -> Option<Point> {
        self.latest
    }

    /// `(source, target)` once two distinct cells have been clicked.
    pub fn endpoints(&self) -> Option<(Point, Point)> {
        Some((self.latest?, self.anchor?))
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
