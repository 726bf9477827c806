//! CLI command handlers.

pub mod config;
pub mod feed;
#[cfg(feature = "tui")]
pub mod portal;
pub mod session;
