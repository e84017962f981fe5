//! Raw-mode terminal console.

use std::io::{self, IsTerminal, Stdout, Write};
use std::time::Duration;

use anyhow::{bail, Context, Result};
use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{self, Event};
use crossterm::style::Print;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode, Clear, ClearType};
use crossterm::{execute, queue};
use docksplash_navigator::{Console, Key, Screen};

/// The interactive terminal. Raw mode lasts until this value is dropped.
pub struct Terminal {
    out: Stdout,
}

impl Terminal {
    /// Switches the terminal to raw mode and hides the cursor.
    pub fn enter() -> Result<Self> {
        if !io::stdin().is_terminal() || !io::stdout().is_terminal() {
            bail!("docksplash needs an interactive terminal");
        }

        enable_raw_mode().context("enable raw mode")?;
        let mut out = io::stdout();
        if let Err(e) = execute!(out, Hide) {
            disable_raw_mode().ok();
            return Err(e).context("hide cursor");
        }
        Ok(Self { out })
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        execute!(self.out, Show).ok();
        disable_raw_mode().ok();
    }
}

impl Console for Terminal {
    fn draw(&mut self, screen: &Screen) -> Result<()> {
        queue!(self.out, Clear(ClearType::All), MoveTo(0, 0)).context("clear screen")?;
        for line in screen.lines() {
            // Raw mode does not translate \n into a carriage return.
            queue!(self.out, Print(line), Print("\r\n")).context("draw line")?;
        }
        self.out.flush().context("flush screen")
    }

    fn read_key(&mut self) -> Result<Key> {
        loop {
            if let Event::Key(event) = event::read().context("read event")? {
                if let Some(key) = Key::from_event(&event) {
                    return Ok(key);
                }
            }
        }
    }

    fn discard_pending(&mut self) -> Result<()> {
        while event::poll(Duration::ZERO).context("poll events")? {
            event::read().context("read event")?;
        }
        Ok(())
    }
}
