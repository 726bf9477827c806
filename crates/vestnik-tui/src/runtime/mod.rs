//! TUI runtime - owns terminal, runs event loop, executes effects.
//!
//! This is the "Elm runtime" boundary: all side effects happen here.
//! The reducer stays pure and produces effects; this module executes them.
//!
//! The portal has no background work, so the loop is synchronous: it blocks
//! on terminal input for at most `IDLE_POLL_DURATION`, drains whatever else is
//! queued, and renders only when something changed.

use std::io::Stdout;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use vestnik_core::Tab;
use vestnik_core::config::Config;
use vestnik_core::format::BRAND;

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::state::AppState;
use crate::{render, terminal, update};

/// Poll duration when waiting for input.
pub const IDLE_POLL_DURATION: Duration = Duration::from_millis(250);

/// Full-screen TUI runtime.
///
/// Owns the terminal and state. Runs the event loop and executes effects.
/// Terminal state is restored on drop and on panic.
pub struct PortalRuntime {
    /// Terminal instance.
    terminal: Terminal<CrosstermBackend<Stdout>>,
    /// Application state (split: tui + overlay).
    pub state: AppState,
    /// Terminal size at the last render.
    last_size: (u16, u16),
}

impl PortalRuntime {
    /// Creates a new TUI runtime.
    pub fn new(config: &Config, tab: Tab) -> Result<Self> {
        // Set up panic hook BEFORE entering alternate screen
        terminal::install_panic_hook();

        let terminal = terminal::setup_terminal(BRAND).context("Failed to setup terminal")?;

        Ok(Self {
            terminal,
            state: AppState::new(config, tab),
            last_size: (0, 0),
        })
    }

    /// Runs the main event loop until a quit effect.
    pub fn run(&mut self) -> Result<()> {
        while !self.state.tui.should_quit {
            let mut events = Self::collect_events()?;

            // Frame first so scroll bounds are current before input is applied
            let size = self.terminal.size()?;
            events.insert(
                0,
                UiEvent::Frame {
                    width: size.width,
                    height: size.height,
                },
            );

            let resized = self.last_size != (size.width, size.height);
            let dirty = resized || events.len() > 1;

            for event in events {
                let effects = update::update(&mut self.state, event);
                self.execute_effects(effects);
            }

            if dirty && !self.state.tui.should_quit {
                // Re-run layout so the first render after input uses fresh bounds
                update::update(
                    &mut self.state,
                    UiEvent::Frame {
                        width: size.width,
                        height: size.height,
                    },
                );
                self.terminal.draw(|frame| {
                    render::render(&self.state, frame);
                })?;
                self.last_size = (size.width, size.height);
            }
        }
        Ok(())
    }

    /// Blocks for the first terminal event (up to the poll duration), then
    /// drains any that are already queued.
    fn collect_events() -> Result<Vec<UiEvent>> {
        let mut events = Vec::new();
        let mut timeout = IDLE_POLL_DURATION;
        while event::poll(timeout).context("Failed to poll terminal events")? {
            events.push(UiEvent::Terminal(
                event::read().context("Failed to read terminal event")?,
            ));
            timeout = Duration::ZERO;
        }
        Ok(events)
    }

    fn execute_effects(&mut self, effects: Vec<UiEffect>) {
        for effect in effects {
            self.execute_effect(effect);
        }
    }

    fn execute_effect(&mut self, effect: UiEffect) {
        match effect {
            UiEffect::Quit => {
                tracing::info!("quit requested");
                self.state.tui.should_quit = true;
            }
        }
    }
}

impl Drop for PortalRuntime {
    fn drop(&mut self) {
        let _ = terminal::restore_terminal();
    }
}
