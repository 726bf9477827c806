//! Interactive portal command handler.

use anyhow::Result;
use vestnik_core::config::Config;

pub fn run(config: &Config, tab: Option<&str>) -> Result<()> {
    vestnik_tui::run_portal(config, tab)
}
