//! Input events: [`Msg`], [`Key`], [`MouseAction`].

use labyrinth_core::Point;

/// A keyboard key the maze view reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    Escape,
    Enter,
    /// A printable character.
    Char(char),
}

/// A mouse action.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MouseAction {
    /// Primary (left) button pressed.
    Main,
    /// Secondary (right) button pressed.
    Secondary,
    /// Button released.
    Release,
    /// Mouse moved, with or without a button held.
    Move,
}

/// An input message delivered to the view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Msg {
    /// Sent once when the application starts.
    Init,
    /// A key was pressed.
    KeyDown { key: Key },
    /// A mouse event at a terminal position (column, row).
    Mouse { action: MouseAction, pos: Point },
    /// The terminal was resized.
    Screen { width: i32, height: i32 },
}

impl Msg {
    /// Convenience: a key press.
    pub fn key(key: Key) -> Self {
        Self::KeyDown { key }
    }

    /// Convenience: a primary-button press at `pos`.
    pub fn click(pos: Point) -> Self {
        Self::Mouse {
            action: MouseAction::Main,
            pos,
        }
    }
}
