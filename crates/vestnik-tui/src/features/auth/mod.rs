//! Auth feature slice: simulated session, header user block, login dialog.
//!
//! ## Module Structure
//!
//! - `update.rs`: Applies session mutations (field edits, login, register, logout)
//! - `render.rs`: Header user block and login dialog rendering

mod render;
mod update;

pub use render::{render_login_dialog, user_block};
pub use update::apply_session_mutation;

/// Form field edited by the login dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginField {
    Name,
    Email,
    Password,
}

impl LoginField {
    pub fn label(&self) -> &'static str {
        match self {
            LoginField::Name => "Имя",
            LoginField::Email => "Email",
            LoginField::Password => "Пароль",
        }
    }
}
