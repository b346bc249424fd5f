//! Terminal front end for labyrinth mazes.
//!
//! [`MazeView`] keeps a carved maze and reacts to input [`Msg`]s: two clicks
//! on open cells select a target and a source, and the shortest path between
//! them is drawn. [`CrosstermDriver`] implements [`Driver`] on top of
//! crossterm, and [`run`] ties the two together.

pub mod app;
pub mod driver;
pub mod frame;
pub mod input;
pub mod messages;
pub mod model;

pub use app::{Driver, run};
pub use driver::CrosstermDriver;
pub use frame::{Frame, FrameCell, Glyph};
pub use input::{Selection, Viewport};
pub use messages::{Key, MouseAction, Msg};
pub use model::{Effect, MazeView};
