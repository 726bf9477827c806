//! Feed feature slice: tab selection, scrolling, hero and card grid.
//!
//! ## Module Structure
//!
//! - `state.rs`: FeedState (active tab, scroll bounds)
//! - `update.rs`: Main-view key handling
//! - `render.rs`: Hero, card grid and tab navigation rendering

mod render;
mod state;
mod update;

pub use render::{grid_columns, grid_section, hero_section, render_tab_nav};
pub use state::FeedState;
pub use update::handle_main_key;
