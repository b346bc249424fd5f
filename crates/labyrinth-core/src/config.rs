//! Maze configuration and its validation rules.

use crate::error::MazeError;
use crate::geom::Point;
use crate::grid::CellKind;

/// Default grid width, in cells.
pub const DEFAULT_COLUMNS: i32 = 51;
/// Default grid height, in cells.
pub const DEFAULT_ROWS: i32 = 51;

/// Everything needed to build and carve a maze.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MazeConfig {
    /// Grid width. Must be odd and positive.
    pub columns: i32,
    /// Grid height. Must be odd and positive.
    pub rows: i32,
    /// Walker start positions. All walkers start on the same room.
    pub walkers: Vec<Point>,
    /// Seed for the carving RNG; `None` draws one from the OS.
    pub seed: Option<u64>,
    /// Upper bound on carving iterations; `None` derives one from the room
    /// count.
    pub step_budget: Option<u64>,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            columns: DEFAULT_COLUMNS,
            rows: DEFAULT_ROWS,
            walkers: vec![Point::ZERO],
            seed: None,
            step_budget: None,
        }
    }
}

impl MazeConfig {
    /// Check every precondition of maze generation.
    pub fn validate(&self) -> Result<(), MazeError> {
        check_dimensions(self.columns, self.rows)?;
        check_walkers(Point::new(self.columns, self.rows), &self.walkers)?;
        if self.step_budget == Some(0) {
            return Err(MazeError::config("step budget must be at least 1"));
        }
        Ok(())
    }
}

/// Carvable dimensions are positive and odd, so the outermost rows and
/// columns are rooms.
pub fn check_dimensions(columns: i32, rows: i32) -> Result<(), MazeError> {
    if columns <= 0 || rows <= 0 {
        return Err(MazeError::config(format!(
            "grid dimensions must be positive, got {columns}x{rows}"
        )));
    }
    if columns % 2 == 0 || rows % 2 == 0 {
        return Err(MazeError::config(format!(
            "grid dimensions must be odd, got {columns}x{rows}"
        )));
    }
    Ok(())
}

/// Walkers must be non-empty, in bounds, on room cells, and share one start
/// room so that their carved regions form a single tree.
pub fn check_walkers(size: Point, walkers: &[Point]) -> Result<(), MazeError> {
    let Some(&first) = walkers.first() else {
        return Err(MazeError::config("at least one walker is required"));
    };
    for &w in walkers {
        if w.x < 0 || w.y < 0 || w.x >= size.x || w.y >= size.y {
            return Err(MazeError::OutOfBounds { pos: w, size });
        }
        if CellKind::of(w) != CellKind::Room {
            return Err(MazeError::config(format!("walker at {w} is not on a room cell")));
        }
        if w != first {
            return Err(MazeError::config(format!(
                "walkers must share a start room, found {first} and {w}"
            )));
        }
    }
    Ok(())
}
