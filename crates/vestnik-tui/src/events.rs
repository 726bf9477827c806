//! UI events consumed by the reducer.

use crossterm::event::Event;

/// Events fed into [`crate::update::update`].
#[derive(Debug, Clone)]
pub enum UiEvent {
    /// Per-frame housekeeping with the current terminal size.
    Frame { width: u16, height: u16 },
    /// Raw terminal input (keys, mouse, paste, resize).
    Terminal(Event),
}
