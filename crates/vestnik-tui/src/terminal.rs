//! Terminal lifecycle for the portal.
//!
//! The portal takes over the whole screen: raw mode, the alternate screen
//! titled with the brand, bracketed paste for the login dialog and mouse
//! capture for wheel scrolling. `restore_terminal()` undoes all of it and is
//! called both from the runtime's drop and from the panic hook.

use std::io::{self, Stdout, Write};
use std::panic;

use anyhow::{Context, Result};
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::queue;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, SetTitle, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

/// Writes the sequences that switch `out` to the portal screen.
pub fn enter_portal_screen<W: Write>(out: &mut W, title: &str) -> io::Result<()> {
    queue!(
        out,
        EnterAlternateScreen,
        SetTitle(title),
        EnableBracketedPaste,
        EnableMouseCapture
    )?;
    out.flush()
}

/// Writes the sequences that undo [`enter_portal_screen`].
///
/// Input features go first; they must be off before raw mode is left.
pub fn leave_portal_screen<W: Write>(out: &mut W) -> io::Result<()> {
    queue!(
        out,
        DisableMouseCapture,
        DisableBracketedPaste,
        LeaveAlternateScreen
    )?;
    out.flush()
}

/// Enables raw mode, enters the portal screen and creates the terminal.
///
/// Call `install_panic_hook()` first.
///
/// # Errors
/// Returns an error if the terminal cannot be configured.
pub fn setup_terminal(title: &str) -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    enter_portal_screen(&mut stdout, title).context("Failed to enter portal screen")?;
    Terminal::new(CrosstermBackend::new(stdout)).context("Failed to create terminal")
}

/// Restores terminal state. Idempotent.
///
/// # Errors
/// Returns an error if the portal screen or raw mode cannot be left.
pub fn restore_terminal() -> Result<()> {
    leave_portal_screen(&mut io::stdout()).context("Failed to leave portal screen")?;
    disable_raw_mode().context("Failed to disable raw mode")
}

/// Installs a panic hook that restores the terminal before printing the panic.
pub fn install_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        original_hook(panic_info);
    }));
}
