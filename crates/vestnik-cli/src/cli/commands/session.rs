//! Login / register command handlers.
//!
//! Both go through `Session` the same way the login dialog does, then print
//! the resulting user and the panel that user would see.

use anyhow::{Context, Result};
use serde::Serialize;
use vestnik_core::User;
use vestnik_core::format::role_label;
use vestnik_core::panel::{PanelVariant, panel_for};
use vestnik_core::session::Session;

#[derive(Serialize)]
struct SessionOutput<'a> {
    user: &'a User,
    panel: &'static str,
}

pub fn login(email: &str, password: &str, json: bool) -> Result<()> {
    let mut session = Session::new();
    session.form.email = email.to_string();
    session.form.password = password.to_string();
    print_user(session.login(), json)
}

pub fn register(name: &str, email: &str, password: &str, json: bool) -> Result<()> {
    let mut session = Session::new();
    session.form.name = name.to_string();
    session.form.email = email.to_string();
    session.form.password = password.to_string();
    print_user(session.register(), json)
}

fn print_user(user: &User, json: bool) -> Result<()> {
    let panel = panel_for(Some(user));
    if json {
        let output = SessionOutput {
            user,
            panel: panel.as_str(),
        };
        let text = serde_json::to_string_pretty(&output).context("serialize user")?;
        println!("{text}");
    } else {
        print!("{}", render_text(user, panel));
    }
    Ok(())
}

fn render_text(user: &User, panel: PanelVariant) -> String {
    let panel_title = panel.content().map_or("нет", |content| content.title);
    format!(
        "Имя: {}\nEmail: {}\nРоль: {}\nПанель: {}\n",
        user.name,
        user.email,
        role_label(user.role),
        panel_title
    )
}

#[cfg(test)]
mod tests {
    use vestnik_core::session;

    use super::*;

    #[test]
    fn test_render_text_for_moderator() {
        let user = session::login("moderator@test.com", "");
        let text = render_text(&user, panel_for(Some(&user)));
        assert!(text.contains("Имя: moderator"));
        assert!(text.contains("Роль: Модератор"));
        assert!(text.contains("Панель: Панель модератора"));
    }

    #[test]
    fn test_render_text_for_reader() {
        let user = session::register("Иван", "admin@test.com", "");
        let text = render_text(&user, panel_for(Some(&user)));
        assert!(text.contains("Роль: Читатель"));
        assert!(text.contains("Панель: нет"));
    }
}
