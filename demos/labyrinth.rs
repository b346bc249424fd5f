//! Maze demo: print a carved maze, or explore it in the terminal.
//!
//! Run: cargo run --bin labyrinth -- --columns 31 --rows 21
//!      cargo run --bin labyrinth -- --print --seed 7 --from 0,0 --to 30,20

use clap::Parser;
use env_logger::Env;
use labyrinth_crossterm::{CrosstermDriver, MazeView, Viewport, run};
use labyrinth_demos::{Args, Mazes};
use labyrinth_paths::find_path;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let mut mazes = Mazes::new(args.maze_config());
    let grid = mazes.next_grid()?;

    if args.print {
        let path = match args.endpoints() {
            Some((source, target)) => find_path(&grid, source, target)?.into_vec(),
            None => Vec::new(),
        };
        println!("{}", grid.render_with_path(&path));
        return Ok(());
    }

    let mut view = MazeView::new(grid, Viewport::default());
    let mut driver = CrosstermDriver::new();
    run(&mut view, &mut driver, || mazes.next_grid())?;
    Ok(())
}
