//! The synchronous control loop.

use anyhow::Result;

use crate::keys::Key;
use crate::navigator::{Flow, Navigator};
use crate::registry::Registry;
use crate::render::{render, Screen};

/// Where frames are drawn and keys are read from.
pub trait Console {
    /// Replaces whatever is on screen with `screen`.
    ///
    /// # Errors
    ///
    /// Returns an error if the output cannot be written.
    fn draw(&mut self, screen: &Screen) -> Result<()>;

    /// Blocks until the next key press.
    ///
    /// # Errors
    ///
    /// Returns an error if input cannot be read.
    fn read_key(&mut self) -> Result<Key>;

    /// Drops keys typed while the previous key was being handled.
    ///
    /// # Errors
    ///
    /// Returns an error if input cannot be read.
    fn discard_pending(&mut self) -> Result<()>;
}

/// Runs the draw, read, apply loop until the navigator quits.
///
/// # Errors
///
/// Returns console errors. Registry errors never end the loop; they are shown
/// by the navigator instead.
pub fn run<R, C>(navigator: &mut Navigator<R>, console: &mut C) -> Result<()>
where
    R: Registry,
    C: Console,
{
    loop {
        console.draw(&render(navigator))?;

        let key = console.read_key()?;
        let flow = navigator.handle_key(key);
        console.discard_pending()?;

        if flow == Flow::Quit {
            tracing::debug!("Navigator quit");
            return Ok(());
        }
    }
}
