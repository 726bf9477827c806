//! Full-screen TUI for the Честные Новости portal.

pub mod common;
pub mod effects;
pub mod events;
pub mod features;
pub mod mutations;
pub mod overlays;
pub mod render;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod update;

use std::io::{IsTerminal, stdout};

use anyhow::Result;
pub use features::{auth, feed, footer, panel};
pub use runtime::PortalRuntime;
use vestnik_core::Tab;
use vestnik_core::config::Config;

/// Runs the interactive portal until the user quits.
///
/// `tab` overrides the configured start tab; unknown names open the main tab.
/// Logs go to a file because the alternate screen covers the terminal.
pub fn run_portal(config: &Config, tab: Option<&str>) -> Result<()> {
    // The portal requires a terminal to render the TUI
    if !stdout().is_terminal() {
        anyhow::bail!(
            "The portal requires a terminal.\n\
             Use `vestnik feed` for non-interactive output."
        );
    }

    let _log_guard = vestnik_core::logging::init_file_logging(config)?;
    let tab = tab.map_or_else(|| config.initial_tab(), Tab::resolve);
    tracing::info!(tab = tab.name(), "portal started");

    let mut runtime = PortalRuntime::new(config, tab)?;
    runtime.run()?;
    drop(runtime);

    tracing::info!("portal closed");
    Ok(())
}
