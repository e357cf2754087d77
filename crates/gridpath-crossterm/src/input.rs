use std::io;
use std::time::Duration;

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};
use gridpath_core::Coord;

use crate::render::Viewport;

/// What a key press or click asks the editor to do.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Leave the editor, or cancel a running replay.
    Quit,
    /// Raise the replay speed one notch.
    Faster,
    /// Search and replay.
    Run,
    /// Empty the grid.
    Reset,
    /// Remove visited and path marks.
    ClearSearch,
    /// Switch to the next algorithm.
    NextAlgorithm,
    Grow,
    Shrink,
    /// Save the current layout.
    Save,
    /// A click on a grid cell.
    Click(Coord),
}

/// Map a terminal event to a command. Clicks outside `viewport` and
/// unbound keys map to `None`.
pub fn command_for(ev: &Event, viewport: &Viewport) -> Option<Command> {
    match ev {
        Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            ..
        }) => match code {
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Command::Quit)
            }
            KeyCode::Char('q') | KeyCode::Esc => Some(Command::Quit),
            KeyCode::Char('+') | KeyCode::Char('f') => Some(Command::Faster),
            KeyCode::Char('r') | KeyCode::Enter => Some(Command::Run),
            KeyCode::Char('c') => Some(Command::Reset),
            KeyCode::Char('x') => Some(Command::ClearSearch),
            KeyCode::Char('a') | KeyCode::Tab => Some(Command::NextAlgorithm),
            KeyCode::Char(']') => Some(Command::Grow),
            KeyCode::Char('[') => Some(Command::Shrink),
            KeyCode::Char('s') => Some(Command::Save),
            _ => None,
        },
        Event::Mouse(me) => match me.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                viewport.cell_at(me.column, me.row).map(Command::Click)
            }
            _ => None,
        },
        _ => None,
    }
}

/// Wait up to `timeout` for the next command.
pub fn read_command(viewport: &Viewport, timeout: Duration) -> io::Result<Option<Command>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }
    let ev = event::read()?;
    Ok(command_for(&ev, viewport))
}
