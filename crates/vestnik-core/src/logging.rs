//! Tracing subscriber setup.
//!
//! The TUI owns the terminal, so interactive sessions log to
//! `${VESTNIK_HOME}/logs/vestnik.log` at the configured level. One-shot
//! commands log warnings to stderr unless `VESTNIK_LOG` asks for more.

use std::fs;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::{Config, paths};

/// Environment variable overriding the configured log filter.
pub const LOG_ENV_VAR: &str = "VESTNIK_LOG";

const LOG_FILE_NAME: &str = "vestnik.log";

/// Builds the filter: `VESTNIK_LOG` wins over `fallback`.
/// Invalid directives fall back to `info`.
fn env_filter(fallback: &str) -> EnvFilter {
    let directives = std::env::var(LOG_ENV_VAR).unwrap_or_else(|_| fallback.to_string());
    EnvFilter::try_new(&directives).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Installs a non-blocking file subscriber.
///
/// Keep the returned guard alive until exit so buffered lines are flushed.
///
/// # Errors
/// Returns an error if the log directory cannot be created or a global
/// subscriber is already installed.
pub fn init_file_logging(config: &Config) -> Result<WorkerGuard> {
    let dir = paths::logs_dir();
    fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let appender = tracing_appender::rolling::never(&dir, LOG_FILE_NAME);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false),
        )
        .with(env_filter(&config.log_level))
        .try_init()
        .context("Failed to install file logger")?;

    Ok(guard)
}

/// Installs a stderr subscriber for non-interactive commands.
///
/// # Errors
/// Returns an error if a global subscriber is already installed.
pub fn init_stderr_logging() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(env_filter("warn"))
        .try_init()
        .context("Failed to install stderr logger")?;
    Ok(())
}
