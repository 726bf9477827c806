//! Shared rendering helpers.

pub mod blocks;
pub mod text;

pub use blocks::{boxed, join_columns, pad_line};
pub use text::{truncate_start_with_ellipsis, truncate_with_ellipsis, wrap_clamped, wrap_text};
