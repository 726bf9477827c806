//! Overlay modules for the TUI.
//!
//! Overlays are modal UI components that temporarily take over keyboard input.
//! Each overlay is self-contained: it owns its state, key handler, and render function.
//!
//! ## Module Structure
//!
//! - `login.rs`: Login / registration dialog
//! - `render_utils.rs`: Shared rendering utilities for overlays
//!
//! ## Extension Trait
//!
//! `OverlayExt` provides convenience methods for `Option<Overlay>` to encapsulate
//! the common patterns used in the reducer.

pub mod login;
pub mod render_utils;

use crossterm::event::KeyEvent;
pub use login::{LoginDialogState, LoginMode};
use ratatui::Frame;
use ratatui::layout::Rect;

use crate::mutations::StateMutation;
use crate::state::PortalState;

// ============================================================================
// OverlayRequest / OverlayTransition / OverlayUpdate
// ============================================================================

/// Requests to open a new overlay.
#[derive(Debug)]
pub enum OverlayRequest {
    Login,
}

/// Transition returned by overlay key handlers.
#[derive(Debug)]
pub enum OverlayTransition {
    Stay,
    Close,
}

/// Update returned by overlay key handlers.
#[derive(Debug)]
pub struct OverlayUpdate {
    pub transition: OverlayTransition,
    pub mutations: Vec<StateMutation>,
}

impl OverlayUpdate {
    fn new(transition: OverlayTransition) -> Self {
        Self {
            transition,
            mutations: Vec::new(),
        }
    }

    pub fn stay() -> Self {
        Self::new(OverlayTransition::Stay)
    }

    pub fn close() -> Self {
        Self::new(OverlayTransition::Close)
    }

    #[must_use]
    pub fn with_mutations(mut self, mutations: Vec<StateMutation>) -> Self {
        self.mutations = mutations;
        self
    }
}

// ============================================================================
// Overlay
// ============================================================================

#[derive(Debug)]
pub enum Overlay {
    Login(LoginDialogState),
}

impl Overlay {
    pub fn render(&self, frame: &mut Frame, area: Rect, tui: &PortalState) {
        match self {
            Overlay::Login(dialog) => dialog.render(frame, area, tui),
        }
    }

    pub fn handle_key(&mut self, tui: &PortalState, key: KeyEvent) -> OverlayUpdate {
        match self {
            Overlay::Login(dialog) => dialog.handle_key(tui, key),
        }
    }

    pub fn handle_paste(&mut self, text: &str) -> OverlayUpdate {
        match self {
            Overlay::Login(dialog) => dialog.handle_paste(text),
        }
    }
}

/// Routes a key to the active overlay, if any.
///
/// Returns `None` when no overlay is open so the caller falls through to
/// main-view handling.
pub fn handle_overlay_key(
    tui: &PortalState,
    overlay: &mut Option<Overlay>,
    key: KeyEvent,
) -> Option<OverlayUpdate> {
    overlay.as_mut().map(|overlay| overlay.handle_key(tui, key))
}

// ============================================================================
// OverlayExt - Extension trait for Option<Overlay>
// ============================================================================

/// Extension trait for `Option<Overlay>` providing convenience helpers.
pub trait OverlayExt {
    /// Renders the overlay if one is active.
    fn render(&self, frame: &mut Frame, area: Rect, tui: &PortalState);

    /// Routes pasted text to the overlay if one is active.
    fn handle_paste(&mut self, text: &str) -> Option<OverlayUpdate>;
}

impl OverlayExt for Option<Overlay> {
    fn render(&self, frame: &mut Frame, area: Rect, tui: &PortalState) {
        if let Some(overlay) = self {
            overlay.render(frame, area, tui);
        }
    }

    fn handle_paste(&mut self, text: &str) -> Option<OverlayUpdate> {
        self.as_mut().map(|overlay| overlay.handle_paste(text))
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyModifiers};
    use vestnik_core::Tab;
    use vestnik_core::config::Config;

    use super::*;
    use crate::state::AppState;

    #[test]
    fn test_handle_overlay_key_without_overlay() {
        let mut app = AppState::new(&Config::default(), Tab::Main);
        let key = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE);
        assert!(handle_overlay_key(&app.tui, &mut app.overlay, key).is_none());
    }

    #[test]
    fn test_paste_reaches_login_overlay() {
        let mut overlay = Some(Overlay::Login(LoginDialogState::open()));
        let update = overlay.handle_paste("admin@test.com").unwrap();
        assert_eq!(update.mutations.len(), 1);

        let mut none: Option<Overlay> = None;
        assert!(none.handle_paste("x").is_none());
    }
}
