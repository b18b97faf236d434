//! Abstract input key event, independent of terminal library.
//!
//! Keeps soyroute-app free of crossterm types; the TUI converts its key
//! events into [`InputKey`] at the boundary.

/// Abstract input key event, independent of terminal library.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKey {
    /// Regular character key (a-z, 0-9, symbols)
    Char(char),
    /// Character with Ctrl modifier (Ctrl+c, ...)
    CharCtrl(char),

    // Navigation
    Left,
    Right,
    Tab,
    /// Shift+Tab
    BackTab,

    // Action keys
    Enter,
    Esc,
}

impl InputKey {
    /// Menu position selected by a digit key (`'1'` → 0)
    pub fn menu_position(&self) -> Option<usize> {
        match self {
            InputKey::Char(c @ '1'..='9') => Some(*c as usize - '1' as usize),
            _ => None,
        }
    }
}
