//! Walker-driven maze carving.
//!
//! One or more [`Walker`]s start on a shared room and hop between rooms at
//! random. Entering a closed room opens it together with the connector just
//! crossed, so every room is attached to the carved region exactly once and
//! the result is a spanning tree over the room lattice (a perfect maze).
//! Carving stops as soon as every room is open.

use labyrinth_core::config::{check_dimensions, check_walkers};
use labyrinth_core::{Grid, MazeError, Point};
use rand::Rng;

use crate::walker::{Stride, Walker};

/// Carving parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CarveConfig {
    /// Walker start positions; all must be the same room cell.
    pub walkers: Vec<Point>,
    /// Maximum number of iterations (one hop per walker each). `None` uses
    /// [`default_step_budget`].
    pub step_budget: Option<u64>,
}

impl Default for CarveConfig {
    fn default() -> Self {
        Self {
            walkers: vec![Point::ZERO],
            step_budget: None,
        }
    }
}

/// Counters reported once carving completes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CarveStats {
    /// Iterations of the outer loop.
    pub steps: u64,
    /// Individual walker hops.
    pub moves: u64,
    /// Rooms opened by walkers, excluding the start room.
    pub rooms_carved: usize,
}

/// Iteration budget for a grid with `rooms` room cells.
///
/// A single row or column of rooms is the worst case: the walk behaves like
/// a 1-D random walk and needs about `n^2` hops to reach the far end, with
/// an exponential tail. `32 n^2 (log2 n + 1)` puts a failure far out in that
/// tail for every grid shape.
pub fn default_step_budget(rooms: usize) -> u64 {
    let n = rooms.max(1) as u64;
    let log = u64::from(n.ilog2()) + 1;
    n.saturating_mul(n)
        .saturating_mul(32)
        .saturating_mul(log)
        .max(1024)
}

/// Stateful maze carver over a borrowed grid.
pub struct MazeGen<'a, R: Rng + ?Sized> {
    grid: &'a mut Grid,
    rng: &'a mut R,
    walkers: Vec<Walker>,
    budget: u64,
    remaining: usize,
    stats: CarveStats,
}

impl<'a, R: Rng + ?Sized> MazeGen<'a, R> {
    /// Validate the configuration and place the walkers.
    ///
    /// The shared start room is opened immediately so that the first hop out
    /// of it is attached to the carved region.
    pub fn new(grid: &'a mut Grid, rng: &'a mut R, config: &CarveConfig) -> Result<Self, MazeError> {
        check_dimensions(grid.columns(), grid.rows())?;
        check_walkers(grid.size(), &config.walkers)?;
        let budget = match config.step_budget {
            Some(0) => return Err(MazeError::config("step budget must be at least 1")),
            Some(b) => b,
            None => default_step_budget(grid.room_count()),
        };
        grid.set_open(config.walkers[0])?;
        let remaining = grid
            .rooms()
            .filter(|&p| grid.state(p).is_some_and(|c| !c.is_open()))
            .count();
        let walkers = config.walkers.iter().map(|&p| Walker::new(p)).collect();
        Ok(Self {
            grid,
            rng,
            walkers,
            budget,
            remaining,
            stats: CarveStats::default(),
        })
    }

    /// Whether every room has been opened.
    pub fn is_done(&self) -> bool {
        self.remaining == 0
    }

    /// Current walker positions.
    pub fn walkers(&self) -> impl Iterator<Item = Point> + '_ {
        self.walkers.iter().map(Walker::pos)
    }

    /// Read access to the grid being carved.
    pub fn grid(&self) -> &Grid {
        &*self.grid
    }

    pub fn stats(&self) -> CarveStats {
        self.stats
    }

    /// Advance every walker by one hop, in order. Walkers see each other's
    /// carving immediately.
    ///
    /// Returns the number of rooms opened during this step.
    pub fn step(&mut self) -> Result<usize, MazeError> {
        let mut carved = 0;
        for w in &mut self.walkers {
            match w.stride(&mut *self.grid, &mut *self.rng)? {
                Stride::Carved { .. } => carved += 1,
                Stride::Moved(_) => {}
                Stride::Stuck => continue,
            }
            self.stats.moves += 1;
        }
        self.stats.steps += 1;
        self.stats.rooms_carved += carved;
        self.remaining -= carved;
        Ok(carved)
    }

    /// Step until the grid is fully carved or the budget runs out.
    pub fn run(mut self) -> Result<CarveStats, MazeError> {
        while !self.is_done() {
            if self.stats.steps >= self.budget {
                log::warn!(
                    "carving stopped after {} steps with {} rooms still closed",
                    self.stats.steps,
                    self.remaining
                );
                return Err(MazeError::BudgetExhausted {
                    steps: self.stats.steps,
                });
            }
            self.step()?;
        }
        log::debug!(
            "carved {}x{} maze: {} steps, {} moves, {} walkers",
            self.grid.columns(),
            self.grid.rows(),
            self.stats.steps,
            self.stats.moves,
            self.walkers.len()
        );
        Ok(self.stats)
    }
}

/// Carve `grid` in place into a perfect maze using walkers starting at
/// `walkers`, with the default step budget.
pub fn generate_maze<R: Rng + ?Sized>(
    grid: &mut Grid,
    walkers: &[Point],
    rng: &mut R,
) -> Result<CarveStats, MazeError> {
    let config = CarveConfig {
        walkers: walkers.to_vec(),
        step_budget: None,
    };
    MazeGen::new(grid, rng, &config)?.run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::VecDeque;

    fn carved(columns: i32, rows: i32, walkers: &[Point], seed: u64) -> (Grid, CarveStats) {
        let mut grid = Grid::new(columns, rows).unwrap();
        let mut rng = StdRng::seed_from_u64(seed);
        let stats = generate_maze(&mut grid, walkers, &mut rng).unwrap();
        (grid, stats)
    }

    /// Rooms reachable from `start` through open cells.
    fn reachable_rooms(grid: &Grid, start: Point) -> usize {
        let mut seen = vec![false; grid.len()];
        let idx = |p: Point| (p.y * grid.columns() + p.x) as usize;
        let mut queue = VecDeque::from([start]);
        seen[idx(start)] = true;
        let mut rooms = 0;
        while let Some(p) = queue.pop_front() {
            if p.x % 2 == 0 && p.y % 2 == 0 {
                rooms += 1;
            }
            for n in p.neighbors_4() {
                if grid.is_open(n).unwrap_or(false) && !seen[idx(n)] {
                    seen[idx(n)] = true;
                    queue.push_back(n);
                }
            }
        }
        rooms
    }

    #[test]
    fn every_room_is_opened() {
        for seed in 0..8 {
            let (grid, _) = carved(11, 7, &[Point::ZERO], seed);
            assert!(grid.is_fully_carved());
        }
    }

    #[test]
    fn rooms_form_one_tree() {
        for seed in 0..8 {
            let (grid, stats) = carved(15, 9, &[Point::ZERO], seed);
            let rooms = grid.room_count();
            assert_eq!(reachable_rooms(&grid, Point::ZERO), rooms);
            // A spanning tree over `rooms` nodes opens `rooms - 1` connectors.
            assert_eq!(grid.open_count(), 2 * rooms - 1);
            assert_eq!(stats.rooms_carved, rooms - 1);
        }
    }

    #[test]
    fn pillars_stay_closed() {
        let (grid, _) = carved(9, 9, &[Point::ZERO], 3);
        for (p, state) in grid.iter() {
            if p.x % 2 == 1 && p.y % 2 == 1 {
                assert!(!state.is_open(), "pillar {p} was opened");
            }
        }
    }

    #[test]
    fn same_seed_same_maze() {
        let (a, sa) = carved(21, 21, &[Point::ZERO], 42);
        let (b, sb) = carved(21, 21, &[Point::ZERO], 42);
        assert_eq!(a, b);
        assert_eq!(sa, sb);
    }

    #[test]
    fn several_walkers_share_the_region() {
        let start = Point::new(4, 4);
        for seed in 0..4 {
            let (grid, stats) = carved(9, 9, &[start; 3], seed);
            assert!(grid.is_fully_carved());
            assert_eq!(reachable_rooms(&grid, start), grid.room_count());
            assert_eq!(grid.open_count(), 2 * grid.room_count() - 1);
            assert_eq!(stats.moves, stats.steps * 3);
        }
    }

    #[test]
    fn degenerate_grids() {
        let (grid, stats) = carved(1, 1, &[Point::ZERO], 0);
        assert!(grid.is_fully_carved());
        assert_eq!(stats.steps, 0);

        let (grid, _) = carved(9, 1, &[Point::new(4, 0)], 0);
        assert_eq!(grid.open_count(), 9);
    }

    #[test]
    fn rejects_bad_configuration() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut even = Grid::new(4, 5).unwrap();
        assert!(matches!(
            generate_maze(&mut even, &[Point::ZERO], &mut rng),
            Err(MazeError::Config(_))
        ));
        let mut grid = Grid::new(5, 5).unwrap();
        assert!(matches!(
            generate_maze(&mut grid, &[], &mut rng),
            Err(MazeError::Config(_))
        ));
        assert!(matches!(
            generate_maze(&mut grid, &[Point::new(1, 0)], &mut rng),
            Err(MazeError::Config(_))
        ));
        // Nothing was carved by a rejected configuration.
        assert_eq!(grid.open_count(), 0);
    }

    #[test]
    fn budget_exhaustion_is_reported() {
        let mut grid = Grid::new(31, 31).unwrap();
        let mut rng = StdRng::seed_from_u64(5);
        let config = CarveConfig {
            walkers: vec![Point::ZERO],
            step_budget: Some(3),
        };
        let result = MazeGen::new(&mut grid, &mut rng, &config).unwrap().run();
        assert_eq!(result, Err(MazeError::BudgetExhausted { steps: 3 }));
    }

    #[test]
    fn step_by_step_matches_run() {
        let config = CarveConfig::default();

        let mut a = Grid::new(7, 7).unwrap();
        let mut rng = StdRng::seed_from_u64(11);
        let mut mg = MazeGen::new(&mut a, &mut rng, &config).unwrap();
        while !mg.is_done() {
            mg.step().unwrap();
        }
        let stepped = mg.stats();

        let mut b = Grid::new(7, 7).unwrap();
        let mut rng = StdRng::seed_from_u64(11);
        let ran = MazeGen::new(&mut b, &mut rng, &config).unwrap().run().unwrap();

        assert_eq!(a, b);
        assert_eq!(stepped, ran);
    }

    #[test]
    fn default_budget_grows_with_rooms() {
        assert_eq!(default_step_budget(0), 1024);
        assert_eq!(default_step_budget(1), 1024);
        assert_eq!(default_step_budget(50), 50 * 50 * 32 * 6);
        assert_eq!(default_step_budget(676), 676 * 676 * 32 * 10);
        assert_eq!(default_step_budget(usize::MAX), u64::MAX);
    }

    #[test]
    fn thin_grids_finish_within_the_default_budget() {
        for (columns, rows) in [(99, 1), (1, 99), (199, 1)] {
            for seed in 0..300 {
                let mut grid = Grid::new(columns, rows).unwrap();
                let mut rng = StdRng::seed_from_u64(seed);
                let result = generate_maze(&mut grid, &[Point::ZERO], &mut rng);
                assert!(result.is_ok(), "{columns}x{rows} seed {seed}: {result:?}");
                assert!(grid.is_fully_carved());
            }
        }
    }
}
