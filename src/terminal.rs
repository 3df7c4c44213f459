//! # Terminal
//!
//! The terminal operations an editor question needs, a crossterm
//! implementation of them, and a guard that keeps raw mode and the hidden
//! cursor scoped to one question.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{
    io::{self, Stderr, Write},
    ops::{Deref, DerefMut},
};

use crossterm::{
    cursor::{Hide, MoveToColumn, MoveUp, Show},
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute, queue,
    style::Print,
    terminal::{self, Clear, ClearType},
};

use crate::{
    constants::{KEY_END_TRANSMISSION, KEY_INTERRUPT},
    editor::EditorStdio,
    render::Frame,
};

/// Terminal seen by an editor question.
pub trait Terminal {
    /// Draws `frame`, replacing the previously drawn frame.
    fn render(&mut self, frame: &Frame) -> io::Result<()>;

    /// Blocks until the user types a key and returns it as a character.
    /// Ctrl-C arrives as `0x03`, Ctrl-D as `0x04` and Enter as `'\r'`.
    fn read_key(&mut self) -> io::Result<char>;

    fn set_raw_mode(&mut self, enabled: bool) -> io::Result<()>;

    fn set_cursor_visible(&mut self, visible: bool) -> io::Result<()>;

    /// Streams the editor process should be attached to.
    fn editor_stdio(&self) -> EditorStdio;
}

impl<T: Terminal + ?Sized> Terminal for &mut T {
    fn render(&mut self, frame: &Frame) -> io::Result<()> {
        (**self).render(frame)
    }

    fn read_key(&mut self) -> io::Result<char> {
        (**self).read_key()
    }

    fn set_raw_mode(&mut self, enabled: bool) -> io::Result<()> {
        (**self).set_raw_mode(enabled)
    }

    fn set_cursor_visible(&mut self, visible: bool) -> io::Result<()> {
        (**self).set_cursor_visible(visible)
    }

    fn editor_stdio(&self) -> EditorStdio {
        (**self).editor_stdio()
    }
}

/// Raw mode + hidden cursor for as long as the guard lives.
///
/// Dropping the guard shows the cursor and leaves raw mode on every path,
/// including early returns and errors.
#[derive(Debug)]
pub struct Session<'a, T: Terminal + ?Sized> {
    term: &'a mut T,
}

impl<'a, T: Terminal + ?Sized> Session<'a, T> {
    pub fn start(term: &'a mut T) -> io::Result<Self> {
        term.set_raw_mode(true)?;
        if let Err(err) = term.set_cursor_visible(false) {
            let _ = term.set_raw_mode(false);
            return Err(err);
        }
        Ok(Self { term })
    }
}

impl<T: Terminal + ?Sized> Deref for Session<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        self.term
    }
}

impl<T: Terminal + ?Sized> DerefMut for Session<'_, T> {
    fn deref_mut(&mut self) -> &mut T {
        self.term
    }
}

impl<T: Terminal + ?Sized> Drop for Session<'_, T> {
    fn drop(&mut self) {
        let _ = self.term.set_cursor_visible(true);
        let _ = self.term.set_raw_mode(false);
    }
}

/// The real terminal. Questions are drawn on stderr so stdout stays free
/// for the answer.
#[derive(Debug)]
pub struct CrosstermTerminal {
    out: Stderr,
    /// Rows covered by the last frame, erased before the next one
    rendered_rows: usize,
    /// Raw mode was already on before we enabled it
    was_raw: bool,
}

impl Default for CrosstermTerminal {
    fn default() -> Self {
        Self::new()
    }
}

impl CrosstermTerminal {
    pub fn new() -> Self {
        Self {
            out: io::stderr(),
            rendered_rows: 0,
            was_raw: false,
        }
    }
}

impl Terminal for CrosstermTerminal {
    fn render(&mut self, frame: &Frame) -> io::Result<()> {
        if self.rendered_rows > 0 {
            queue!(self.out, MoveToColumn(0), Clear(ClearType::CurrentLine))?;
            for _ in 1..self.rendered_rows {
                queue!(self.out, MoveUp(1), Clear(ClearType::CurrentLine))?;
            }
        }

        // Raw mode does not turn \n into \r\n
        queue!(self.out, Print(frame.styled.replace('\n', "\r\n")))?;
        self.out.flush()?;

        // A frame ending in a newline is final and stays on screen
        self.rendered_rows = if frame.plain.ends_with('\n') {
            0
        } else {
            let width = terminal::size().map_or(80, |(width, _)| width);
            frame.rows(width)
        };

        Ok(())
    }

    fn read_key(&mut self) -> io::Result<char> {
        loop {
            if let Event::Key(key) = event::read()? {
                if let Some(rune) = key_to_rune(&key) {
                    return Ok(rune);
                }
            }
        }
    }

    fn set_raw_mode(&mut self, enabled: bool) -> io::Result<()> {
        if enabled {
            self.was_raw = terminal::is_raw_mode_enabled()?;
            if !self.was_raw {
                terminal::enable_raw_mode()?;
            }
        } else if !self.was_raw {
            terminal::disable_raw_mode()?;
        }
        Ok(())
    }

    fn set_cursor_visible(&mut self, visible: bool) -> io::Result<()> {
        if visible {
            execute!(self.out, Show)
        } else {
            execute!(self.out, Hide)
        }
    }

    fn editor_stdio(&self) -> EditorStdio {
        EditorStdio::prompt_terminal()
    }
}

/// Maps a key press to the character the question reacts to.
fn key_to_rune(key: &KeyEvent) -> Option<char> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(KEY_INTERRUPT),
        KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(KEY_END_TRANSMISSION)
        }
        // Raw mode reports a line feed as Ctrl-J
        KeyCode::Char('j') if key.modifiers.contains(KeyModifiers::CONTROL) => Some('\n'),
        KeyCode::Char(_) if key.modifiers.contains(KeyModifiers::CONTROL) => None,
        KeyCode::Char(c) => Some(c),
        KeyCode::Enter => Some('\r'),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_plain_characters() {
        assert_eq!(
            key_to_rune(&press(KeyCode::Char('e'), KeyModifiers::NONE)),
            Some('e')
        );
        assert_eq!(
            key_to_rune(&press(KeyCode::Char('?'), KeyModifiers::SHIFT)),
            Some('?')
        );
    }

    #[test]
    fn test_control_keys() {
        assert_eq!(
            key_to_rune(&press(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(KEY_INTERRUPT)
        );
        assert_eq!(
            key_to_rune(&press(KeyCode::Char('d'), KeyModifiers::CONTROL)),
            Some(KEY_END_TRANSMISSION)
        );
        assert_eq!(
            key_to_rune(&press(KeyCode::Char('j'), KeyModifiers::CONTROL)),
            Some('\n')
        );
        assert_eq!(
            key_to_rune(&press(KeyCode::Char('e'), KeyModifiers::CONTROL)),
            None
        );
    }

    #[test]
    fn test_enter_and_others() {
        assert_eq!(
            key_to_rune(&press(KeyCode::Enter, KeyModifiers::NONE)),
            Some('\r')
        );
        assert_eq!(key_to_rune(&press(KeyCode::Esc, KeyModifiers::NONE)), None);
        assert_eq!(key_to_rune(&press(KeyCode::Up, KeyModifiers::NONE)), None);
    }

    #[test]
    fn test_release_ignored() {
        let release = KeyEvent::new_with_kind_and_state(
            KeyCode::Char('e'),
            KeyModifiers::NONE,
            KeyEventKind::Release,
            KeyEventState::NONE,
        );
        assert_eq!(key_to_rune(&release), None);
    }
}
