//! Core domain for Vestnik: news model, seed store, simulated session,
//! content filter, role panels, configuration and logging.

pub mod config;
pub mod feed;
pub mod format;
pub mod logging;
pub mod models;
pub mod panel;
pub mod session;
pub mod store;

pub use models::{NewsItem, NewsType, Role, Tab, User};
pub use store::NewsStore;
