//! Main-view key handling (no overlay open).

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use vestnik_core::Tab;

use crate::effects::UiEffect;
use crate::mutations::{FeedMutation, SessionMutation, StateMutation};
use crate::overlays::OverlayRequest;
use crate::state::PortalState;

/// Effects, state mutations and an optional overlay to open.
pub type KeyOutcome = (Vec<UiEffect>, Vec<StateMutation>, Option<OverlayRequest>);

/// Handles a key in the main view.
pub fn handle_main_key(tui: &PortalState, key: KeyEvent) -> KeyOutcome {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let feed = |mutation: FeedMutation| -> KeyOutcome {
        (vec![], vec![StateMutation::Feed(mutation)], None)
    };

    match key.code {
        KeyCode::Char('c') if ctrl => (vec![UiEffect::Quit], vec![], None),
        _ if ctrl => (vec![], vec![], None),
        KeyCode::Char('q') | KeyCode::Esc => (vec![UiEffect::Quit], vec![], None),
        KeyCode::Char(c @ '1'..='4') => {
            let index = c as usize - '1' as usize;
            match Tab::from_index(index) {
                Some(tab) => feed(FeedMutation::SelectTab(tab)),
                None => (vec![], vec![], None),
            }
        }
        KeyCode::Left | KeyCode::BackTab => feed(FeedMutation::SelectTab(tui.feed.tab.prev())),
        KeyCode::Right | KeyCode::Tab => feed(FeedMutation::SelectTab(tui.feed.tab.next())),
        KeyCode::Up | KeyCode::Char('k') => feed(FeedMutation::ScrollBy(-1)),
        KeyCode::Down | KeyCode::Char('j') => feed(FeedMutation::ScrollBy(1)),
        KeyCode::PageUp => feed(FeedMutation::ScrollBy(-tui.feed.page_size())),
        KeyCode::PageDown | KeyCode::Char(' ') => {
            feed(FeedMutation::ScrollBy(tui.feed.page_size()))
        }
        KeyCode::Home | KeyCode::Char('g') => feed(FeedMutation::ScrollToTop),
        KeyCode::End | KeyCode::Char('G') => feed(FeedMutation::ScrollToBottom),
        KeyCode::Char('l') if !tui.session.is_authenticated() => {
            (vec![], vec![], Some(OverlayRequest::Login))
        }
        KeyCode::Char('o') if tui.session.is_authenticated() => (
            vec![],
            vec![StateMutation::Session(SessionMutation::Logout)],
            None,
        ),
        _ => (vec![], vec![], None),
    }
}

#[cfg(test)]
mod tests {
    use vestnik_core::config::Config;
    use vestnik_core::session;

    use super::*;
    use crate::state::AppState;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app() -> AppState {
        AppState::new(&Config::default(), Tab::Main)
    }

    #[test]
    fn test_number_keys_select_tabs() {
        let app = app();
        let (_, mutations, _) = handle_main_key(&app.tui, key(KeyCode::Char('4')));
        assert_eq!(
            mutations,
            [StateMutation::Feed(FeedMutation::SelectTab(Tab::Popular))]
        );
        let (_, mutations, _) = handle_main_key(&app.tui, key(KeyCode::Char('5')));
        assert!(mutations.is_empty());
    }

    #[test]
    fn test_arrows_cycle_tabs() {
        let app = app();
        let (_, mutations, _) = handle_main_key(&app.tui, key(KeyCode::Left));
        assert_eq!(
            mutations,
            [StateMutation::Feed(FeedMutation::SelectTab(Tab::Popular))]
        );
        let (_, mutations, _) = handle_main_key(&app.tui, key(KeyCode::Right));
        assert_eq!(
            mutations,
            [StateMutation::Feed(FeedMutation::SelectTab(Tab::Video))]
        );
    }

    #[test]
    fn test_login_key_only_when_anonymous() {
        let mut app = app();
        let (_, _, request) = handle_main_key(&app.tui, key(KeyCode::Char('l')));
        assert!(matches!(request, Some(OverlayRequest::Login)));

        app.tui.session.current = Some(session::login("jane@site.com", ""));
        let (_, _, request) = handle_main_key(&app.tui, key(KeyCode::Char('l')));
        assert!(request.is_none());
    }

    #[test]
    fn test_logout_key_only_when_authenticated() {
        let mut app = app();
        let (_, mutations, _) = handle_main_key(&app.tui, key(KeyCode::Char('o')));
        assert!(mutations.is_empty());

        app.tui.session.current = Some(session::login("jane@site.com", ""));
        let (_, mutations, _) = handle_main_key(&app.tui, key(KeyCode::Char('o')));
        assert_eq!(
            mutations,
            [StateMutation::Session(SessionMutation::Logout)]
        );
    }

    #[test]
    fn test_quit_keys() {
        let app = app();
        for code in [KeyCode::Char('q'), KeyCode::Esc] {
            let (effects, _, _) = handle_main_key(&app.tui, key(code));
            assert_eq!(effects, [UiEffect::Quit]);
        }
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        let (effects, _, _) = handle_main_key(&app.tui, ctrl_c);
        assert_eq!(effects, [UiEffect::Quit]);
    }

    #[test]
    fn test_other_ctrl_chords_ignored() {
        let app = app();
        let ctrl_q = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL);
        let (effects, mutations, request) = handle_main_key(&app.tui, ctrl_q);
        assert!(effects.is_empty() && mutations.is_empty() && request.is_none());
    }
}
