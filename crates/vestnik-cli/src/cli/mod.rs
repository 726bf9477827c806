//! CLI entry and dispatch.

use anyhow::{Context, Result};
use clap::Parser;
use vestnik_core::config;

mod commands;

#[derive(Parser)]
#[command(name = "vestnik")]
#[command(version = "0.1")]
#[command(about = "Честные Новости: terminal news portal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Tab to open the portal on (main, video, regional, popular)
    #[arg(long, value_name = "TAB")]
    tab: Option<String>,
}

/// Credentials shared by `login` and `register`.
#[derive(clap::Args, Debug, Clone)]
struct CredentialArgs {
    /// Email address; its content decides the role on login
    #[arg(long)]
    email: String,

    /// Password (never checked)
    #[arg(long, default_value = "")]
    password: String,

    /// Print JSON instead of text
    #[arg(long)]
    json: bool,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Print the feed for a tab
    Feed {
        /// Tab to show (main, video, regional, popular)
        #[arg(long, value_name = "TAB")]
        tab: Option<String>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Simulate a login and show the resulting user and panel
    Login {
        #[command(flatten)]
        credentials: CredentialArgs,
    },

    /// Simulate a registration and show the resulting user and panel
    Register {
        /// Display name
        #[arg(long)]
        name: String,

        #[command(flatten)]
        credentials: CredentialArgs,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Print the config file path
    Path,
    /// Create a default config file
    Init,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = config::Config::load().context("load config")?;

    let Some(command) = cli.command else {
        return run_portal(&config, cli.tab.as_deref());
    };

    vestnik_core::logging::init_stderr_logging()?;

    match command {
        Commands::Feed { tab, json } => {
            let tab = tab.as_deref().or(cli.tab.as_deref());
            commands::feed::run(&config, tab, json)
        }
        Commands::Login { credentials } => commands::session::login(
            &credentials.email,
            &credentials.password,
            credentials.json,
        ),
        Commands::Register { name, credentials } => commands::session::register(
            &name,
            &credentials.email,
            &credentials.password,
            credentials.json,
        ),
        Commands::Config { command } => match command {
            ConfigCommands::Path => {
                commands::config::path();
                Ok(())
            }
            ConfigCommands::Init => commands::config::init(),
        },
    }
}

#[cfg(feature = "tui")]
fn run_portal(config: &config::Config, tab: Option<&str>) -> Result<()> {
    commands::portal::run(config, tab)
}

#[cfg(not(feature = "tui"))]
fn run_portal(_config: &config::Config, _tab: Option<&str>) -> Result<()> {
    anyhow::bail!("This build has no interactive portal. Use `vestnik feed`.")
}
