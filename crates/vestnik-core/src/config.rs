//! Configuration management for Vestnik.
//!
//! Loads configuration from ${VESTNIK_HOME}/config.toml with sensible defaults.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::models::Tab;

/// Returns the default config template with comments.
///
/// Embedded from default_config.toml at compile time.
fn default_config_template() -> &'static str {
    include_str!("../default_config.toml")
}

pub mod paths {
    //! Path resolution for Vestnik configuration and data directories.
    //!
    //! VESTNIK_HOME resolution order:
    //! 1. VESTNIK_HOME environment variable (if set)
    //! 2. ~/.config/vestnik (default)
    //! 3. ./.vestnik when no home directory can be determined

    use std::path::PathBuf;

    /// Returns the Vestnik home directory.
    pub fn vestnik_home() -> PathBuf {
        if let Ok(home) = std::env::var("VESTNIK_HOME") {
            return PathBuf::from(home);
        }

        dirs::home_dir().map_or_else(
            || PathBuf::from(".vestnik"),
            |h| h.join(".config").join("vestnik"),
        )
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        vestnik_home().join("config.toml")
    }

    /// Returns the directory log files are written to.
    pub fn logs_dir() -> PathBuf {
        vestnik_home().join("logs")
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Tab selected at startup (unrecognized names fall back to main)
    pub default_tab: String,

    /// Whether the footer is rendered below the feed
    pub show_footer: bool,

    /// Log filter directive (e.g. "info", "vestnik_tui=debug")
    pub log_level: String,
}

impl Config {
    const DEFAULT_TAB: &str = "main";
    const DEFAULT_LOG_LEVEL: &str = "info";

    /// Loads configuration from the default config path.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if file doesn't exist.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config from {}", path.display()))
        } else {
            Ok(Config::default())
        }
    }

    /// The tab to open with. Unrecognized names resolve to [`Tab::Main`].
    pub fn initial_tab(&self) -> Tab {
        Tab::resolve(&self.default_tab)
    }

    /// Creates a default config file at the given path.
    ///
    /// # Errors
    /// Returns an error if the file already exists or cannot be written.
    pub fn init(path: &Path) -> Result<()> {
        if path.exists() {
            anyhow::bail!("Config file already exists at {}", path.display());
        }

        Self::write_config(path, default_config_template())
    }

    /// Writes config content to a file, creating parent directories as needed.
    /// Uses atomic write (temp file + rename) to prevent corruption.
    fn write_config(path: &Path, content: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        let tmp_path = path.with_extension("toml.tmp");
        fs::write(&tmp_path, content)
            .with_context(|| format!("Failed to write config to {}", tmp_path.display()))?;
        fs::rename(&tmp_path, path).with_context(|| {
            format!(
                "Failed to rename {} to {}",
                tmp_path.display(),
                path.display()
            )
        })?;

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_tab: Self::DEFAULT_TAB.to_string(),
            show_footer: true,
            log_level: Self::DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}
