//! The application loop: [`Driver`] and [`run`].

use labyrinth_core::{Grid, MazeError};

use crate::frame::Frame;
use crate::messages::Msg;
use crate::model::{Effect, MazeView};

/// Back-end driver (e.g. a terminal).
pub trait Driver {
    /// Initialise the back-end.
    fn init(&mut self) -> Result<(), Box<dyn std::error::Error>>;

    /// Collect pending input messages. May wait briefly for the first one.
    fn poll_msgs(&mut self) -> Result<Vec<Msg>, Box<dyn std::error::Error>>;

    /// Show a frame.
    fn flush(&mut self, frame: &Frame) -> Result<(), Box<dyn std::error::Error>>;

    /// Clean up / restore the terminal.
    fn close(&mut self);
}

/// Run the poll, update, draw loop until the view asks to end.
///
/// `regenerate` is called for [`Effect::Regenerate`]; a failure is shown on
/// the status line and the current maze is kept.
pub fn run<D, F>(
    view: &mut MazeView,
    driver: &mut D,
    mut regenerate: F,
) -> Result<(), Box<dyn std::error::Error>>
where
    D: Driver,
    F: FnMut() -> Result<Grid, MazeError>,
{
    driver.init()?;
    let result = event_loop(view, driver, &mut regenerate);
    driver.close();
    result
}

fn event_loop<D, F>(
    view: &mut MazeView,
    driver: &mut D,
    regenerate: &mut F,
) -> Result<(), Box<dyn std::error::Error>>
where
    D: Driver,
    F: FnMut() -> Result<Grid, MazeError>,
{
    let mut pending = vec![Msg::Init];
    loop {
        let dirty = !pending.is_empty();
        for msg in pending.drain(..) {
            match view.update(msg) {
                Some(Effect::End) => return Ok(()),
                Some(Effect::Regenerate) => match regenerate() {
                    Ok(grid) => view.replace_grid(grid),
                    Err(e) => {
                        log::warn!("regeneration failed: {e}");
                        view.report(format!("could not carve a new maze: {e}"));
                    }
                },
                None => {}
            }
        }
        if dirty {
            driver.flush(&view.draw())?;
        }
        pending = driver.poll_msgs()?;
    }
}
