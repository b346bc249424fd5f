//! What the view wants on screen, independent of the terminal.

use labyrinth_core::{Grid, Point};

use crate::input::Viewport;

/// Appearance of one maze cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Glyph {
    Wall,
    Floor,
    /// Interior path cell.
    Path,
    /// The latest click.
    Source,
    /// The previous click, where the path ends.
    Target,
}

/// A changed cell of a frame.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FrameCell {
    pub pos: Point,
    pub glyph: Glyph,
}

/// A full picture of the maze plus the status line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    pub viewport: Viewport,
    pub size: Point,
    pub glyphs: Vec<Glyph>,
    pub status: String,
}

impl Frame {
    /// A frame showing `grid` with no overlay.
    pub fn of_grid(grid: &Grid, viewport: Viewport) -> Self {
        let glyphs = grid
            .iter()
            .map(|(_, c)| if c.is_open() { Glyph::Floor } else { Glyph::Wall })
            .collect();
        Self {
            viewport,
            size: grid.size(),
            glyphs,
            status: String::new(),
        }
    }

    pub fn at(&self, p: Point) -> Option<Glyph> {
        if p.x < 0 || p.y < 0 || p.x >= self.size.x || p.y >= self.size.y {
            return None;
        }
        Some(self.glyphs[(p.y * self.size.x + p.x) as usize])
    }

    /// Overwrite the glyph at `p`. Out-of-range points are ignored.
    pub fn set(&mut self, p: Point, glyph: Glyph) {
        if self.at(p).is_some() {
            self.glyphs[(p.y * self.size.x + p.x) as usize] = glyph;
        }
    }

    /// Cells that differ from `prev`. Everything is returned when there is
    /// no previous frame or its geometry differs.
    pub fn diff(&self, prev: Option<&Frame>) -> Vec<FrameCell> {
        let comparable = prev.filter(|p| p.size == self.size && p.viewport == self.viewport);
        let mut cells = Vec::new();
        for (i, &glyph) in self.glyphs.iter().enumerate() {
            if comparable.is_some_and(|p| p.glyphs[i] == glyph) {
                continue;
            }
            let pos = Point::new(i as i32 % self.size.x, i as i32 / self.size.x);
            cells.push(FrameCell { pos, glyph });
        }
        cells
    }
}
