//! Shared pieces of the `labyrinth` demo: command-line arguments and their
//! mapping onto [`MazeConfig`].

use clap::Parser;
use labyrinth_core::{MazeConfig, MazeError, Point};
use labyrinth_gen::build_maze;

/// Carve a perfect maze and find shortest paths through it.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Grid width in cells (odd)
    #[arg(long, default_value_t = labyrinth_core::config::DEFAULT_COLUMNS)]
    pub columns: i32,

    /// Grid height in cells (odd)
    #[arg(long, default_value_t = labyrinth_core::config::DEFAULT_ROWS)]
    pub rows: i32,

    /// Number of walkers carving together
    #[arg(long, default_value_t = 1)]
    pub walkers: usize,

    /// Room every walker starts from, as x,y
    #[arg(long, value_parser = parse_point, default_value = "0,0")]
    pub start: Point,

    /// Random seed; omitted means a fresh maze every run
    #[arg(long)]
    pub seed: Option<u64>,

    /// Carving iteration budget
    #[arg(long)]
    pub budget: Option<u64>,

    /// Print the maze as text instead of starting the terminal view
    #[arg(long)]
    pub print: bool,

    /// Path source for --print, as x,y
    #[arg(long, value_parser = parse_point, requires = "to")]
    pub from: Option<Point>,

    /// Path target for --print, as x,y
    #[arg(long, value_parser = parse_point, requires = "from")]
    pub to: Option<Point>,
}

impl Args {
    pub fn maze_config(&self) -> MazeConfig {
        MazeConfig {
            columns: self.columns,
            rows: self.rows,
            walkers: vec![self.start; self.walkers],
            seed: self.seed,
            step_budget: self.budget,
        }
    }

    /// Both path endpoints, if given.
    pub fn endpoints(&self) -> Option<(Point, Point)> {
        Some((self.from?, self.to?))
    }
}

/// Parse `x,y` into a [`Point`].
pub fn parse_point(s: &str) -> Result<Point, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected x,y, got {s:?}"))?;
    let x = x.trim().parse().map_err(|e| format!("bad x in {s:?}: {e}"))?;
    let y = y.trim().parse().map_err(|e| format!("bad y in {s:?}: {e}"))?;
    Ok(Point::new(x, y))
}

/// Builds successive mazes from one configuration.
///
/// A seeded configuration yields the seed's maze first, then seed + 1, and so
/// on, so regeneration stays reproducible without repeating itself.
#[derive(Debug, Clone)]
pub struct Mazes {
    config: MazeConfig,
    built: u64,
}

impl Mazes {
    pub fn new(config: MazeConfig) -> Self {
        Self { config, built: 0 }
    }

    pub fn next_grid(&mut self) -> Result<labyrinth_core::Grid, MazeError> {
        let config = MazeConfig {
            seed: self.config.seed.map(|s| s.wrapping_add(self.built)),
            ..self.config.clone()
        };
        let (grid, stats) = build_maze(&config)?;
        self.built += 1;
        log::info!(
            "maze #{}: {}x{}, {} steps, {} rooms carved",
            self.built,
            grid.columns(),
            grid.rows(),
            stats.steps,
            stats.rooms_carved
        );
        Ok(grid)
    }
}
