//! Auth feature view.
//!
//! Rendering functions for the header user block and the login dialog.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use vestnik_core::Role;
use vestnik_core::format::{avatar_initial, icon, role_label};
use vestnik_core::session::{Session, SessionForm};

use super::LoginField;
use crate::overlays::LoginDialogState;
use crate::overlays::render_utils::{
    InputHint, InputLine, OverlayConfig, render_input_line, render_overlay, render_separator,
};

const DIALOG_COLOR: Color = Color::Green;
const HINT_TEXT: &str = "Подсказка: используйте admin@test.com для роли администратора, moderator@test.com для модератора";

fn role_style(role: Role) -> Style {
    match role {
        Role::Admin => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        Role::Moderator => Style::default().fg(Color::Black).bg(Color::Gray),
        Role::Reader => Style::default().fg(Color::Gray),
    }
}

/// Header user block: name, role badge, avatar initial and logout key,
/// or the login button when nobody is signed in.
pub fn user_block(session: &Session) -> Line<'static> {
    let key_style = Style::default().fg(DIALOG_COLOR);
    let dim = Style::default().fg(Color::DarkGray);

    match session.current_user() {
        Some(user) => Line::from(vec![
            Span::styled(
                user.name.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            Span::styled(format!(" {} ", role_label(user.role)), role_style(user.role)),
            Span::raw(" "),
            Span::styled(
                format!("({})", avatar_initial(&user.name)),
                Style::default()
                    .fg(Color::Black)
                    .bg(DIALOG_COLOR)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled("o", key_style),
            Span::styled(format!(" {} выйти", icon("LogOut")), dim),
        ]),
        None => Line::from(vec![
            Span::styled("l", key_style),
            Span::styled(
                format!(" {} Войти", icon("User")),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]),
    }
}

fn mode_tabs(dialog: &LoginDialogState) -> Line<'static> {
    let mut spans = Vec::new();
    for mode in [crate::overlays::LoginMode::Login, crate::overlays::LoginMode::Register] {
        let style = if mode == dialog.mode {
            Style::default()
                .fg(Color::Black)
                .bg(DIALOG_COLOR)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(format!(" {} ", mode.label()), style));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

fn field_value(form: &SessionForm, field: LoginField) -> String {
    match field {
        LoginField::Name => form.name.clone(),
        LoginField::Email => form.email.clone(),
        LoginField::Password => "•".repeat(form.password.chars().count()),
    }
}

fn placeholder(field: LoginField) -> &'static str {
    match field {
        LoginField::Name => "Иван Иванов",
        LoginField::Email => "your@email.com",
        LoginField::Password => "••••••••",
    }
}

/// Renders the login dialog over `area`.
pub fn render_login_dialog(
    frame: &mut Frame,
    area: Rect,
    dialog: &LoginDialogState,
    form: &SessionForm,
) {
    let fields = dialog.mode.fields();
    let hints = [
        InputHint::new("Tab", "поле"),
        InputHint::new("Ctrl+T", "режим"),
        InputHint::new("Enter", dialog.mode.submit_label()),
        InputHint::new("Esc", "закрыть"),
    ];
    // description, blank, tabs, separator, 2 lines per field, hint (2), button
    let height = 2 + 2 + 2 + (fields.len() as u16 * 2) + 1 + 3 + 1 + 1;
    let body = render_overlay(
        frame,
        area,
        &OverlayConfig {
            title: "Вход в систему",
            border_color: DIALOG_COLOR,
            width: 64,
            height,
            hints: &hints,
        },
    );
    let row = |offset: u16| Rect::new(body.x, body.y + offset, body.width, 1);
    let mut y = 0;

    if y < body.height {
        frame.render_widget(
            Paragraph::new(Span::styled(
                "Войдите или зарегистрируйтесь для полного доступа",
                Style::default().fg(Color::Gray),
            )),
            row(y),
        );
    }
    y += 2;
    if y < body.height {
        frame.render_widget(Paragraph::new(mode_tabs(dialog)), row(y));
    }
    render_separator(frame, body, y + 1);
    y += 2;

    let focused = dialog.focused_field();
    for &field in fields {
        if y + 1 >= body.height {
            break;
        }
        let is_focused = field == focused;
        let label_style = if is_focused {
            Style::default()
                .fg(DIALOG_COLOR)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        frame.render_widget(
            Paragraph::new(Span::styled(field.label(), label_style)),
            row(y),
        );
        let value = field_value(form, field);
        render_input_line(
            frame,
            row(y + 1),
            &InputLine {
                value: &value,
                placeholder: Some(placeholder(field)),
                prompt: "> ",
                focused: is_focused,
                prompt_color: if is_focused {
                    DIALOG_COLOR
                } else {
                    Color::DarkGray
                },
                text_color: Color::White,
                placeholder_color: Color::DarkGray,
                cursor_color: DIALOG_COLOR,
            },
        );
        y += 2;
    }

    if dialog.mode == crate::overlays::LoginMode::Login && y + 1 < body.height {
        let hint_area = Rect::new(body.x, body.y + y + 1, body.width, 2.min(body.height - y - 1));
        frame.render_widget(
            Paragraph::new(Span::styled(HINT_TEXT, Style::default().fg(Color::DarkGray)))
                .wrap(Wrap { trim: true }),
            hint_area,
        );
    }
    y += 4;

    if y < body.height {
        frame.render_widget(
            Paragraph::new(Span::styled(
                format!("[ {} ]", dialog.mode.submit_label()),
                Style::default()
                    .fg(Color::Black)
                    .bg(DIALOG_COLOR)
                    .add_modifier(Modifier::BOLD),
            ))
            .alignment(ratatui::layout::Alignment::Center),
            row(y),
        );
    }
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use vestnik_core::session;

    use super::*;
    use crate::overlays::LoginMode;

    fn line_text(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    fn render_dialog(dialog: &LoginDialogState, form: &SessionForm) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal
            .draw(|frame| render_login_dialog(frame, frame.area(), dialog, form))
            .unwrap();
        let buffer = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn test_user_block_anonymous() {
        let session = Session::new();
        assert!(line_text(&user_block(&session)).contains("Войти"));
    }

    #[test]
    fn test_user_block_shows_role_and_initial() {
        let mut session = Session::new();
        session.current = Some(session::login("admin@test.com", ""));
        let text = line_text(&user_block(&session));
        assert!(text.starts_with("admin"));
        assert!(text.contains("Администратор"));
        assert!(text.contains("(A)"));
        assert!(text.contains("выйти"));
    }

    #[test]
    fn test_dialog_masks_password() {
        let form = SessionForm {
            email: "reader@site.com".to_string(),
            password: "secret".to_string(),
            name: String::new(),
        };
        let screen = render_dialog(&LoginDialogState::open(), &form);
        assert!(screen.contains("reader@site.com"));
        assert!(screen.contains("••••••"));
        assert!(!screen.contains("secret"));
        assert!(screen.contains("Подсказка"));
    }

    #[test]
    fn test_register_mode_shows_name_field() {
        let dialog = LoginDialogState {
            mode: LoginMode::Register,
            focus: 0,
        };
        let screen = render_dialog(&dialog, &SessionForm::default());
        assert!(screen.contains("Имя"));
        assert!(screen.contains("Зарегистрироваться"));
        assert!(!screen.contains("Подсказка"));
    }
}
