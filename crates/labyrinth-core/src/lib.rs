//! **labyrinth-core**: foundational types for the labyrinth maze workspace.
//!
//! This crate provides the geometry primitives, the open/closed maze
//! [`Grid`], the shared [`MazeError`] type and the [`MazeConfig`] consumed by
//! the generator and the front ends.

pub mod config;
pub mod error;
pub mod geom;
pub mod grid;

pub use config::MazeConfig;
pub use error::MazeError;
pub use geom::{Point, Range};
pub use grid::{CellKind, CellState, Grid};
