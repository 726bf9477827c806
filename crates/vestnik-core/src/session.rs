//! Session and role controller.
//!
//! Login and registration are simulated: they never validate the password,
//! never check whether the account exists, and always succeed. The role is
//! derived from the email address, never asserted by the caller.

use crate::models::{Role, User};

/// Id assigned to users created through the login form.
const LOGIN_USER_ID: &str = "1";
/// Id assigned to users created through the registration form.
const REGISTER_USER_ID: &str = "2";

/// Classifies an email into a role by literal substring match.
///
/// "admin" wins over "moderator"; everything else is a reader.
pub fn classify_role(email: &str) -> Role {
    if email.contains("admin") {
        Role::Admin
    } else if email.contains("moderator") {
        Role::Moderator
    } else {
        Role::Reader
    }
}

/// Display name derived from the local part of an email.
///
/// Without an "@" the whole string is used.
pub fn name_from_email(email: &str) -> &str {
    email.split('@').next().unwrap_or_default()
}

/// Simulated login. Always succeeds.
pub fn login(email: &str, _password: &str) -> User {
    User {
        id: LOGIN_USER_ID.to_string(),
        name: name_from_email(email).to_string(),
        email: email.to_string(),
        role: classify_role(email),
    }
}

/// Simulated registration. Always succeeds, always yields a reader.
pub fn register(name: &str, email: &str, _password: &str) -> User {
    User {
        id: REGISTER_USER_ID.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        role: Role::Reader,
    }
}

/// Login/registration form fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionForm {
    pub email: String,
    pub password: String,
    pub name: String,
}

impl SessionForm {
    pub fn is_empty(&self) -> bool {
        self.email.is_empty() && self.password.is_empty() && self.name.is_empty()
    }

    pub fn clear(&mut self) {
        self.email.clear();
        self.password.clear();
        self.name.clear();
    }
}

/// The session part of the view state: at most one current user plus the
/// form fields the login dialog edits.
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub current: Option<User>,
    pub form: SessionForm,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_user(&self) -> Option<&User> {
        self.current.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    /// Logs in with the current form fields, replacing any current user.
    ///
    /// Form fields are left untouched.
    pub fn login(&mut self) -> &User {
        let user = login(&self.form.email, &self.form.password);
        tracing::info!(name = %user.name, role = user.role.as_str(), "login");
        self.current.insert(user)
    }

    /// Registers with the current form fields, replacing any current user.
    pub fn register(&mut self) -> &User {
        let user = register(&self.form.name, &self.form.email, &self.form.password);
        tracing::info!(name = %user.name, "register");
        self.current.insert(user)
    }

    /// Clears the current user and the email, password and name fields.
    pub fn logout(&mut self) {
        if let Some(user) = self.current.take() {
            tracing::info!(name = %user.name, "logout");
        }
        self.form.clear();
    }
}
