//! The interactive maze view: selection state, path overlay, status line.

use labyrinth_core::{Grid, Point};
use labyrinth_paths::{Path, find_path};

use crate::frame::{Frame, Glyph};
use crate::input::{Selection, Viewport};
use crate::messages::{Key, MouseAction, Msg};

/// A side-effect requested by [`MazeView::update`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    /// Carve a fresh maze and hand it to [`MazeView::replace_grid`].
    Regenerate,
    /// Stop the application loop.
    End,
}

const HELP: &str = "click two open cells | c: clear | r: new maze | q: quit";

/// Holds a carved maze and answers path queries as cells are clicked.
///
/// The path is recomputed only when the selection changes, never per frame.
#[derive(Debug, Clone)]
pub struct MazeView {
    grid: Grid,
    viewport: Viewport,
    selection: Selection,
    path: Option<Path>,
    status: String,
}

impl MazeView {
    pub fn new(grid: Grid, viewport: Viewport) -> Self {
        Self {
            grid,
            viewport,
            selection: Selection::default(),
            path: None,
            status: HELP.to_string(),
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_ref()
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    /// Swap in a new maze and forget the old selection.
    pub fn replace_grid(&mut self, grid: Grid) {
        self.grid = grid;
        self.clear();
        self.status = format!("new {}x{} maze | {HELP}", self.grid.columns(), self.grid.rows());
    }

    /// Report a failure on the status line.
    pub fn report(&mut self, msg: impl Into<String>) {
        self.status = msg.into();
    }

    /// Process a message, optionally returning a side-effect.
    pub fn update(&mut self, msg: Msg) -> Option<Effect> {
        match msg {
            Msg::Init => {
                self.status = HELP.to_string();
                None
            }
            Msg::KeyDown { key } => match key {
                Key::Escape | Key::Char('q') => Some(Effect::End),
                Key::Char('r') => Some(Effect::Regenerate),
                Key::Char('c') => {
                    self.clear();
                    self.status = HELP.to_string();
                    None
                }
                _ => None,
            },
            Msg::Mouse {
                action: MouseAction::Main,
                pos,
            } => {
                self.click(pos);
                None
            }
            Msg::Mouse { .. } | Msg::Screen { .. } => None,
        }
    }

    /// Render the current state.
    pub fn draw(&self) -> Frame {
        let mut frame = Frame::of_grid(&self.grid, self.viewport);
        if let Some(path) = &self.path {
            for &p in path {
                frame.set(p, Glyph::Path);
            }
        }
        if let Some(t) = self.selection.anchor() {
            frame.set(t, Glyph::Target);
        }
        if let Some(s) = self.selection.latest() {
            frame.set(s, Glyph::Source);
        }
        frame.status = self.status.clone();
        frame
    }

    fn clear(&mut self) {
        self.selection.clear();
        self.path = None;
    }

    fn click(&mut self, screen: Point) {
        let Some(cell) = self.viewport.cell_at(screen, self.grid.size()) else {
            return;
        };
        if !self.grid.is_open(cell).unwrap_or(false) {
            self.status = format!("{cell} is a wall");
            return;
        }
        if !self.selection.select(cell) {
            return;
        }
        let Some((source, target)) = self.selection.endpoints() else {
            self.path = None;
            self.status = format!("target {cell} | click another open cell");
            return;
        };
        match find_path(&self.grid, source, target) {
            Ok(path) => {
                self.status = format!("{source} -> {target}: {} steps", path.steps());
                self.path = Some(path);
            }
            Err(e) => {
                log::warn!("path query failed: {e}");
                self.status = e.to_string();
                self.path = None;
            }
        }
    }
}
