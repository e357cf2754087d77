//! Crossterm terminal front-end for gridpath.
//!
//! Provides a [`TerminalRenderer`] that implements
//! [`gridpath_replay::Renderer`], drawing each cell as a two-column colored
//! block, plus the input mapping used by the interactive editor.

mod input;
mod render;

pub use input::{Command, command_for, read_command};
pub use render::{Palette, TerminalRenderer, Viewport};

use std::io::{self, Write};

use crossterm::{
    cursor, event, execute,
    style::ResetColor,
    terminal::{self, ClearType},
};

/// Raw-mode alternate-screen session. The terminal is restored on drop.
pub struct Session {
    mouse_enabled: bool,
}

impl Session {
    /// Enter raw mode and the alternate screen.
    pub fn enter(mouse_enabled: bool) -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(
            stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::Clear(ClearType::All)
        )?;
        if mouse_enabled {
            execute!(stdout, event::EnableMouseCapture)?;
        }
        log::debug!("terminal session started (mouse: {mouse_enabled})");
        Ok(Self { mouse_enabled })
    }
}

impl Drop for Session {
    fn drop(&mut self) {
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
        let _ = stdout.flush();
    }
}
