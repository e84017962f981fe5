//! Key decoding.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// A keypress, classified by what it does in the navigator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// `j` or down arrow.
    Down,
    /// `k` or up arrow.
    Up,
    /// `l` or Enter.
    Select,
    /// `h` or `q`.
    Back,
    /// Ctrl-C. Raw mode swallows the signal, so it arrives as a key.
    Interrupt,
    /// Any other key.
    Other,
}

impl Key {
    /// Classifies a terminal key event.
    ///
    /// Returns `None` for release and repeat events so one physical press is
    /// handled once.
    #[must_use]
    pub fn from_event(event: &KeyEvent) -> Option<Self> {
        if event.kind != KeyEventKind::Press {
            return None;
        }

        let key = match event.code {
            KeyCode::Char('c') if event.modifiers.contains(KeyModifiers::CONTROL) => {
                Self::Interrupt
            }
            _ if event.modifiers.contains(KeyModifiers::CONTROL) => Self::Other,
            KeyCode::Char(c) => Self::from_char(c),
            KeyCode::Down => Self::Down,
            KeyCode::Up => Self::Up,
            KeyCode::Enter => Self::Select,
            _ => Self::Other,
        };
        Some(key)
    }

    /// Classifies a typed character. Case-sensitive.
    #[must_use]
    pub const fn from_char(c: char) -> Self {
        match c {
            'j' => Self::Down,
            'k' => Self::Up,
            'l' | '\r' | '\n' => Self::Select,
            'h' | 'q' => Self::Back,
            _ => Self::Other,
        }
    }
}
