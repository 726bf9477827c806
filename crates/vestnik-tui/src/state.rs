//! Application state composition.
//!
//! ## State Hierarchy
//!
//! ```text
//! AppState
//! ├── tui: PortalState
//! │   ├── store: NewsStore     (immutable seed content)
//! │   ├── session: Session     (current user + login form fields)
//! │   ├── feed: FeedState      (active tab, scroll)
//! │   └── show_footer, should_quit
//! └── overlay: Option<Overlay> (login dialog)
//! ```
//!
//! The overlay is kept next to `PortalState` rather than inside it so that
//! overlay handlers can hold `&mut Overlay` and `&PortalState` at once.

use vestnik_core::config::Config;
use vestnik_core::session::Session;
use vestnik_core::{NewsStore, Tab};

use crate::feed::FeedState;
use crate::overlays::Overlay;

/// Combined application state for the TUI.
pub struct AppState {
    pub tui: PortalState,
    pub overlay: Option<Overlay>,
}

impl AppState {
    /// Creates state over the seed store.
    pub fn new(config: &Config, tab: Tab) -> Self {
        Self::with_store(NewsStore::seed(), config, tab)
    }

    pub fn with_store(store: NewsStore, config: &Config, tab: Tab) -> Self {
        Self {
            tui: PortalState::new(store, config, tab),
            overlay: None,
        }
    }
}

/// Portal state (non-overlay).
pub struct PortalState {
    /// Flag indicating the app should quit.
    pub should_quit: bool,
    /// Fixed content store.
    pub store: NewsStore,
    /// Simulated session: current user and form fields.
    pub session: Session,
    /// Active tab and scroll position.
    pub feed: FeedState,
    /// Whether the footer is part of the scrolled body.
    pub show_footer: bool,
    /// Last known terminal size.
    pub terminal_size: (u16, u16),
}

impl PortalState {
    pub fn new(store: NewsStore, config: &Config, tab: Tab) -> Self {
        Self {
            should_quit: false,
            store,
            session: Session::new(),
            feed: FeedState::new(tab),
            show_footer: config.show_footer,
            terminal_size: (0, 0),
        }
    }
}
