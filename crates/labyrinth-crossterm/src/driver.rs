//! Crossterm terminal driver.

use std::io::{self, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEventKind},
    execute, queue,
    style::{Color as CtColor, ResetColor, SetBackgroundColor},
    terminal::{self, ClearType},
};

use labyrinth_core::Point;

use crate::app::Driver;
use crate::frame::{Frame, FrameCell, Glyph};
use crate::messages::{Key, MouseAction, Msg};

/// Background colour of a glyph.
fn to_ct_color(g: Glyph) -> CtColor {
    match g {
        Glyph::Wall => CtColor::Rgb { r: 0, g: 0, b: 0 },
        Glyph::Floor => CtColor::Rgb {
            r: 255,
            g: 255,
            b: 255,
        },
        Glyph::Path => CtColor::Rgb {
            r: 255,
            g: 165,
            b: 0,
        },
        Glyph::Source => CtColor::Rgb { r: 0, g: 160, b: 0 },
        Glyph::Target => CtColor::Rgb { r: 200, g: 0, b: 0 },
    }
}

fn to_key(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Char(c) => Some(Key::Char(c)),
        KeyCode::Enter => Some(Key::Enter),
        KeyCode::Esc => Some(Key::Escape),
        _ => None,
    }
}

fn to_msg(ev: Event) -> Option<Msg> {
    match ev {
        Event::Key(KeyEvent {
            code,
            kind: KeyEventKind::Press,
            ..
        }) => to_key(code).map(Msg::key),
        Event::Mouse(me) => {
            let pos = Point::new(me.column as i32, me.row as i32);
            let action = match me.kind {
                MouseEventKind::Down(MouseButton::Left) => MouseAction::Main,
                MouseEventKind::Down(_) => MouseAction::Secondary,
                MouseEventKind::Up(_) => MouseAction::Release,
                MouseEventKind::Moved | MouseEventKind::Drag(_) => MouseAction::Move,
                _ => return None,
            };
            Some(Msg::Mouse { action, pos })
        }
        Event::Resize(w, h) => Some(Msg::Screen {
            width: w as i32,
            height: h as i32,
        }),
        _ => None,
    }
}

/// A terminal back-end using crossterm.
///
/// Maze cells are drawn as coloured blocks; only cells that changed since
/// the previous frame are rewritten.
pub struct CrosstermDriver {
    mouse_enabled: bool,
    poll_timeout: Duration,
    prev: Option<Frame>,
}

impl CrosstermDriver {
    /// Create a new driver.
    pub fn new() -> Self {
        Self {
            mouse_enabled: true,
            poll_timeout: Duration::from_millis(50),
            prev: None,
        }
    }

    /// Configure whether mouse events are captured.
    pub fn with_mouse(mut self, enabled: bool) -> Self {
        self.mouse_enabled = enabled;
        self
    }

    fn draw_cell(
        out: &mut impl Write,
        frame: &Frame,
        cell: FrameCell,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let vp = frame.viewport;
        let top_left = vp.screen_of(cell.pos);
        let block = " ".repeat(vp.cell_width.max(0) as usize);
        queue!(out, SetBackgroundColor(to_ct_color(cell.glyph)))?;
        for dy in 0..vp.cell_height {
            queue!(
                out,
                cursor::MoveTo(top_left.x as u16, (top_left.y + dy) as u16)
            )?;
            write!(out, "{block}")?;
        }
        Ok(())
    }
}

impl Default for CrosstermDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl Driver for CrosstermDriver {
    fn init(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(
            stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::Clear(ClearType::All)
        )?;
        if self.mouse_enabled {
            execute!(stdout, event::EnableMouseCapture)?;
        }
        Ok(())
    }

    fn poll_msgs(&mut self) -> Result<Vec<Msg>, Box<dyn std::error::Error>> {
        let mut msgs = Vec::new();
        if !event::poll(self.poll_timeout)? {
            return Ok(msgs);
        }
        while event::poll(Duration::ZERO)? {
            let ev = event::read()?;
            if matches!(ev, Event::Resize(..)) {
                // Force a full redraw on the next flush.
                self.prev = None;
            }
            if let Some(msg) = to_msg(ev) {
                msgs.push(msg);
            }
        }
        Ok(msgs)
    }

    fn flush(&mut self, frame: &Frame) -> Result<(), Box<dyn std::error::Error>> {
        let mut stdout = io::stdout();
        if self.prev.is_none() {
            queue!(stdout, ResetColor, terminal::Clear(ClearType::All))?;
        }

        let changed = frame.diff(self.prev.as_ref());
        log::trace!("flush: {} changed cells", changed.len());
        for cell in changed {
            Self::draw_cell(&mut stdout, frame, cell)?;
        }

        let status_row = frame.viewport.screen_of(Point::new(0, frame.size.y)).y;
        queue!(
            stdout,
            ResetColor,
            cursor::MoveTo(frame.viewport.origin.x as u16, status_row as u16),
            terminal::Clear(ClearType::UntilNewLine)
        )?;
        write!(stdout, "{}", frame.status)?;

        stdout.flush()?;
        self.prev = Some(frame.clone());
        Ok(())
    }

    fn close(&mut self) {
        let mut stdout = io::stdout();
        if self.mouse_enabled {
            let _ = execute!(stdout, event::DisableMouseCapture);
        }
        let _ = execute!(
            stdout,
            ResetColor,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
        self.prev = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Viewport;
    use crossterm::event::{KeyEventState, KeyModifiers, MouseEvent};
    use labyrinth_core::Grid;

    fn key(code: KeyCode, kind: KeyEventKind) -> Event {
        Event::Key(KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind,
            state: KeyEventState::NONE,
        })
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn keys_translate_on_press_only() {
        assert_eq!(
            to_msg(key(KeyCode::Char('q'), KeyEventKind::Press)),
            Some(Msg::key(Key::Char('q')))
        );
        assert_eq!(
            to_msg(key(KeyCode::Esc, KeyEventKind::Press)),
            Some(Msg::key(Key::Escape))
        );
        assert_eq!(to_msg(key(KeyCode::Char('q'), KeyEventKind::Release)), None);
        assert_eq!(to_msg(key(KeyCode::Tab, KeyEventKind::Press)), None);
    }

    #[test]
    fn mouse_translation() {
        assert_eq!(
            to_msg(mouse(MouseEventKind::Down(MouseButton::Left), 3, 1)),
            Some(Msg::click(Point::new(3, 1)))
        );
        assert_eq!(
            to_msg(mouse(MouseEventKind::Down(MouseButton::Right), 0, 0)),
            Some(Msg::Mouse {
                action: MouseAction::Secondary,
                pos: Point::ZERO,
            })
        );
        assert_eq!(to_msg(mouse(MouseEventKind::ScrollUp, 0, 0)), None);
        assert_eq!(
            to_msg(Event::Resize(80, 24)),
            Some(Msg::Screen {
                width: 80,
                height: 24,
            })
        );
    }

    #[test]
    fn cells_are_drawn_as_blocks() {
        let mut g = Grid::new(2, 1).unwrap();
        g.set_open(Point::ZERO).unwrap();
        let frame = Frame::of_grid(&g, Viewport::default());
        let mut out = Vec::new();
        let cell = FrameCell {
            pos: Point::new(1, 0),
            glyph: Glyph::Wall,
        };
        CrosstermDriver::draw_cell(&mut out, &frame, cell).unwrap();
        let text = String::from_utf8(out).unwrap();
        // Cursor to column 4, row 2 (1-based), then a two-column block.
        assert!(text.contains("\x1b[2;4H"), "{text:?}");
        assert!(text.ends_with("  "));
    }
}
