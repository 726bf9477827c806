//! TUI reducer (update function).
//!
//! All state mutations happen here. The runtime calls `update(app, event)`
//! and executes the returned effects.

use crossterm::event::{Event, KeyEvent, KeyEventKind, MouseEvent, MouseEventKind};

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::mutations::{FeedMutation, StateMutation};
use crate::overlays::{self, Overlay, OverlayExt};
use crate::state::{AppState, PortalState};
use crate::{auth, feed, render};

/// Lines moved per mouse wheel notch.
const MOUSE_SCROLL_LINES: i32 = 3;

/// The main reducer function.
///
/// Takes the current state and an event, mutates state, and returns effects
/// for the runtime to execute.
pub fn update(app: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::Frame { width, height } => {
            handle_frame(&mut app.tui, width, height);
            vec![]
        }
        UiEvent::Terminal(term_event) => handle_terminal_event(app, term_event),
    }
}

fn apply_mutations(tui: &mut PortalState, mutations: Vec<StateMutation>) {
    for mutation in mutations {
        match mutation {
            StateMutation::Session(mutation) => {
                auth::apply_session_mutation(&mut tui.session, mutation);
            }
            StateMutation::Feed(mutation) => tui.feed.apply(mutation),
        }
    }
}

fn apply_overlay_update(app: &mut AppState, update: overlays::OverlayUpdate) {
    apply_mutations(&mut app.tui, update.mutations);
    if matches!(update.transition, overlays::OverlayTransition::Close) {
        app.overlay = None;
    }
}

fn open_overlay_request(app: &mut AppState, request: overlays::OverlayRequest) {
    match request {
        overlays::OverlayRequest::Login => {
            tracing::debug!("login dialog opened");
            app.overlay = Some(Overlay::Login(overlays::LoginDialogState::open()));
        }
    }
}

// ============================================================================
// Frame Handler
// ============================================================================

/// Recomputes scroll bounds for the current terminal size and content.
fn handle_frame(tui: &mut PortalState, width: u16, height: u16) {
    tui.terminal_size = (width, height);
    let viewport_height = render::body_viewport_height(height);
    let content_height = render::body_lines(tui, render::body_content_width(width)).len();
    tui.feed.update_layout(content_height, viewport_height);
}

// ============================================================================
// Terminal Event Handlers
// ============================================================================

fn handle_terminal_event(app: &mut AppState, event: Event) -> Vec<UiEffect> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(app, key),
        Event::Mouse(mouse) => {
            handle_mouse(app, mouse);
            vec![]
        }
        Event::Paste(text) => {
            if let Some(update) = app.overlay.handle_paste(&text) {
                apply_overlay_update(app, update);
            }
            vec![]
        }
        // Resize needs no handling: layout is recomputed on the next frame
        _ => vec![],
    }
}

fn handle_mouse(app: &mut AppState, mouse: MouseEvent) {
    if app.overlay.is_some() {
        return;
    }
    let delta = match mouse.kind {
        MouseEventKind::ScrollUp => -MOUSE_SCROLL_LINES,
        MouseEventKind::ScrollDown => MOUSE_SCROLL_LINES,
        _ => return,
    };
    app.tui.feed.apply(FeedMutation::ScrollBy(delta));
}

fn handle_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    // Try to dispatch to the active overlay
    if let Some(update) = overlays::handle_overlay_key(&app.tui, &mut app.overlay, key) {
        apply_overlay_update(app, update);
        return vec![];
    }

    // No overlay active - delegate to the feed feature module
    let (effects, mutations, overlay_request) = feed::handle_main_key(&app.tui, key);
    apply_mutations(&mut app.tui, mutations);
    if let Some(request) = overlay_request
        && app.overlay.is_none()
    {
        open_overlay_request(app, request);
    }

    effects
}
