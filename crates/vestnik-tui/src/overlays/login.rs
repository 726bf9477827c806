use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::Rect;

use super::OverlayUpdate;
use crate::auth::{LoginField, render_login_dialog};
use crate::mutations::{FieldEdit, SessionMutation, StateMutation};
use crate::state::PortalState;

/// Which form the login dialog shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginMode {
    #[default]
    Login,
    Register,
}

impl LoginMode {
    pub fn label(&self) -> &'static str {
        match self {
            LoginMode::Login => "Вход",
            LoginMode::Register => "Регистрация",
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            LoginMode::Login => LoginMode::Register,
            LoginMode::Register => LoginMode::Login,
        }
    }

    pub fn fields(&self) -> &'static [LoginField] {
        match self {
            LoginMode::Login => &[LoginField::Email, LoginField::Password],
            LoginMode::Register => &[LoginField::Name, LoginField::Email, LoginField::Password],
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self {
            LoginMode::Login => "Войти",
            LoginMode::Register => "Зарегистрироваться",
        }
    }
}

/// Login dialog state. Field values live in the session form.
#[derive(Debug, Clone, Default)]
pub struct LoginDialogState {
    pub mode: LoginMode,
    /// Index into `mode.fields()`.
    pub focus: usize,
}

impl LoginDialogState {
    pub fn open() -> Self {
        Self::default()
    }

    pub fn focused_field(&self) -> LoginField {
        let fields = self.mode.fields();
        fields[self.focus.min(fields.len() - 1)]
    }

    fn set_mode(&mut self, mode: LoginMode) {
        if mode != self.mode {
            self.mode = mode;
            self.focus = 0;
        }
    }

    fn move_focus(&mut self, forward: bool) {
        let len = self.mode.fields().len();
        self.focus = if forward {
            (self.focus + 1) % len
        } else {
            (self.focus + len - 1) % len
        };
    }

    fn edit(&self, edit: FieldEdit) -> OverlayUpdate {
        OverlayUpdate::stay().with_mutations(vec![StateMutation::Session(
            SessionMutation::Edit {
                field: self.focused_field(),
                edit,
            },
        )])
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, tui: &PortalState) {
        render_login_dialog(frame, area, self, &tui.session.form);
    }

    pub fn handle_key(&mut self, _tui: &PortalState, key: KeyEvent) -> OverlayUpdate {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Esc | KeyCode::Char('c') if key.code == KeyCode::Esc || ctrl => {
                OverlayUpdate::close()
            }
            KeyCode::Char('t') if ctrl => {
                self.set_mode(self.mode.toggle());
                OverlayUpdate::stay()
            }
            KeyCode::Char('u') if ctrl => self.edit(FieldEdit::Clear),
            KeyCode::Left | KeyCode::Right => {
                self.set_mode(self.mode.toggle());
                OverlayUpdate::stay()
            }
            KeyCode::Tab | KeyCode::Down => {
                self.move_focus(true);
                OverlayUpdate::stay()
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.move_focus(false);
                OverlayUpdate::stay()
            }
            KeyCode::Enter => {
                let mutation = match self.mode {
                    LoginMode::Login => SessionMutation::Login,
                    LoginMode::Register => SessionMutation::Register,
                };
                OverlayUpdate::close().with_mutations(vec![StateMutation::Session(mutation)])
            }
            KeyCode::Backspace => self.edit(FieldEdit::Backspace),
            KeyCode::Char(c) if !ctrl => self.edit(FieldEdit::Insert(c)),
            _ => OverlayUpdate::stay(),
        }
    }

    /// Pasted text goes to the focused field.
    pub fn handle_paste(&self, text: &str) -> OverlayUpdate {
        self.edit(FieldEdit::InsertStr(text.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use vestnik_core::Tab;
    use vestnik_core::config::Config;

    use super::*;
    use crate::overlays::OverlayTransition;
    use crate::state::AppState;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn test_focus_wraps_within_mode_fields() {
        let app = AppState::new(&Config::default(), Tab::Main);
        let mut dialog = LoginDialogState::open();
        assert_eq!(dialog.focused_field(), LoginField::Email);

        dialog.handle_key(&app.tui, key(KeyCode::Tab));
        assert_eq!(dialog.focused_field(), LoginField::Password);
        dialog.handle_key(&app.tui, key(KeyCode::Tab));
        assert_eq!(dialog.focused_field(), LoginField::Email);
        dialog.handle_key(&app.tui, key(KeyCode::BackTab));
        assert_eq!(dialog.focused_field(), LoginField::Password);
    }

    #[test]
    fn test_mode_switch_resets_focus() {
        let app = AppState::new(&Config::default(), Tab::Main);
        let mut dialog = LoginDialogState::open();
        dialog.handle_key(&app.tui, key(KeyCode::Down));

        dialog.handle_key(&app.tui, ctrl('t'));
        assert_eq!(dialog.mode, LoginMode::Register);
        assert_eq!(dialog.focused_field(), LoginField::Name);

        dialog.handle_key(&app.tui, key(KeyCode::Right));
        assert_eq!(dialog.mode, LoginMode::Login);
    }

    #[test]
    fn test_typing_edits_focused_field() {
        let app = AppState::new(&Config::default(), Tab::Main);
        let mut dialog = LoginDialogState::open();
        let update = dialog.handle_key(&app.tui, key(KeyCode::Char('a')));
        assert!(matches!(update.transition, OverlayTransition::Stay));
        assert_eq!(
            update.mutations,
            [StateMutation::Session(SessionMutation::Edit {
                field: LoginField::Email,
                edit: FieldEdit::Insert('a'),
            })]
        );
    }

    #[test]
    fn test_enter_submits_by_mode() {
        let app = AppState::new(&Config::default(), Tab::Main);
        let mut dialog = LoginDialogState::open();
        let update = dialog.handle_key(&app.tui, key(KeyCode::Enter));
        assert!(matches!(update.transition, OverlayTransition::Close));
        assert_eq!(
            update.mutations,
            [StateMutation::Session(SessionMutation::Login)]
        );

        let mut dialog = LoginDialogState {
            mode: LoginMode::Register,
            focus: 0,
        };
        let update = dialog.handle_key(&app.tui, key(KeyCode::Enter));
        assert_eq!(
            update.mutations,
            [StateMutation::Session(SessionMutation::Register)]
        );
    }

    #[test]
    fn test_escape_closes_without_mutations() {
        let app = AppState::new(&Config::default(), Tab::Main);
        let mut dialog = LoginDialogState::open();
        let update = dialog.handle_key(&app.tui, key(KeyCode::Esc));
        assert!(matches!(update.transition, OverlayTransition::Close));
        assert!(update.mutations.is_empty());

        let update = dialog.handle_key(&app.tui, ctrl('c'));
        assert!(matches!(update.transition, OverlayTransition::Close));
    }
}
