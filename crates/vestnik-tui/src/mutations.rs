//! State mutations requested by key handlers.
//!
//! Overlay and feature key handlers only borrow state immutably; they
//! describe changes as `StateMutation`s which the reducer applies.

use vestnik_core::Tab;

use crate::auth::LoginField;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateMutation {
    Session(SessionMutation),
    Feed(FeedMutation),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionMutation {
    Edit { field: LoginField, edit: FieldEdit },
    Login,
    Register,
    Logout,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEdit {
    Insert(char),
    InsertStr(String),
    Backspace,
    Clear,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedMutation {
    SelectTab(Tab),
    /// Scroll by a signed number of lines, clamped to the content.
    ScrollBy(i32),
    ScrollToTop,
    ScrollToBottom,
}
