//! Auth feature reducer.
//!
//! Applies session mutations produced by the login dialog and main-view keys.

use vestnik_core::session::{Session, SessionForm};

use super::LoginField;
use crate::mutations::{FieldEdit, SessionMutation};

fn field_mut(form: &mut SessionForm, field: LoginField) -> &mut String {
    match field {
        LoginField::Name => &mut form.name,
        LoginField::Email => &mut form.email,
        LoginField::Password => &mut form.password,
    }
}

/// Applies a session mutation.
pub fn apply_session_mutation(session: &mut Session, mutation: SessionMutation) {
    match mutation {
        SessionMutation::Edit { field, edit } => {
            let value = field_mut(&mut session.form, field);
            match edit {
                FieldEdit::Insert(c) => value.push(c),
                // Pasted text is single-line
                FieldEdit::InsertStr(text) => {
                    value.extend(text.chars().filter(|c| !c.is_control()));
                }
                FieldEdit::Backspace => {
                    value.pop();
                }
                FieldEdit::Clear => value.clear(),
            }
        }
        SessionMutation::Login => {
            session.login();
        }
        SessionMutation::Register => {
            session.register();
        }
        SessionMutation::Logout => session.logout(),
    }
}

#[cfg(test)]
mod tests {
    use vestnik_core::Role;

    use super::*;

    fn type_into(session: &mut Session, field: LoginField, text: &str) {
        for c in text.chars() {
            apply_session_mutation(
                session,
                SessionMutation::Edit {
                    field,
                    edit: FieldEdit::Insert(c),
                },
            );
        }
    }

    #[test]
    fn test_edits_target_the_field() {
        let mut session = Session::new();
        type_into(&mut session, LoginField::Email, "ab");
        type_into(&mut session, LoginField::Password, "pw");
        apply_session_mutation(
            &mut session,
            SessionMutation::Edit {
                field: LoginField::Email,
                edit: FieldEdit::Backspace,
            },
        );
        assert_eq!(session.form.email, "a");
        assert_eq!(session.form.password, "pw");
        assert!(session.form.name.is_empty());
    }

    #[test]
    fn test_paste_drops_newlines() {
        let mut session = Session::new();
        apply_session_mutation(
            &mut session,
            SessionMutation::Edit {
                field: LoginField::Email,
                edit: FieldEdit::InsertStr("admin@test.com\n".to_string()),
            },
        );
        assert_eq!(session.form.email, "admin@test.com");
    }

    #[test]
    fn test_login_then_logout_clears_form() {
        let mut session = Session::new();
        type_into(&mut session, LoginField::Email, "moderator@test.com");
        apply_session_mutation(&mut session, SessionMutation::Login);
        let user = session.current_user().unwrap();
        assert_eq!(user.role, Role::Moderator);
        assert_eq!(user.name, "moderator");

        apply_session_mutation(&mut session, SessionMutation::Logout);
        assert!(!session.is_authenticated());
        assert!(session.form.is_empty());
    }

    #[test]
    fn test_register_is_always_reader() {
        let mut session = Session::new();
        type_into(&mut session, LoginField::Name, "Админ");
        type_into(&mut session, LoginField::Email, "admin@test.com");
        apply_session_mutation(&mut session, SessionMutation::Register);
        let user = session.current_user().unwrap();
        assert_eq!(user.role, Role::Reader);
        assert_eq!(user.name, "Админ");
        assert_eq!(user.id, "2");
    }
}
