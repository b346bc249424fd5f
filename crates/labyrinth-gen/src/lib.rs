//! Perfect maze generation by randomized room-hopping walkers.
//!
//! - [`Walker`] hops two cells at a time between rooms, opening the
//!   destination and the connector it crosses when the destination is closed.
//! - [`MazeGen`] drives one or more walkers over a borrowed [`Grid`] until
//!   every room is open, under an explicit step budget.
//! - [`build_maze`] creates and carves a grid from a [`MazeConfig`].
//!
//! Randomness is always an explicit [`rand::Rng`] argument; pass a seeded
//! [`StdRng`] for reproducible mazes.

pub mod carve;
pub mod walker;

use labyrinth_core::{Grid, MazeConfig, MazeError};
use rand::SeedableRng;
use rand::rngs::StdRng;

pub use carve::{CarveConfig, CarveStats, MazeGen, default_step_budget, generate_maze};
pub use walker::{MOVES, Stride, Walker};

/// Create a grid from `config` and carve it.
///
/// Uses `config.seed` when present, otherwise seeds from the OS.
pub fn build_maze(config: &MazeConfig) -> Result<(Grid, CarveStats), MazeError> {
    config.validate()?;
    let mut grid = Grid::new(config.columns, config.rows)?;
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let carve = CarveConfig {
        walkers: config.walkers.clone(),
        step_budget: config.step_budget,
    };
    let stats = MazeGen::new(&mut grid, &mut rng, &carve)?.run()?;
    Ok((grid, stats))
}
