//! CLI for the urlopen browser launcher.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use urlopen_core::config::{self, UrlopenConfig};
use urlopen_core::Platform;

use commands::{run_config_path, run_open, run_strategy};

/// Top-level CLI for urlopen.
#[derive(Debug, Parser)]
#[command(name = "urlopen")]
#[command(about = "Open a URL in the default web browser", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Open a URL; inputs without a scheme are opened as https.
    Open {
        /// URL or bare host/path, e.g. `example.com/docs`.
        url: String,

        /// Print the launcher command instead of running it.
        #[arg(long)]
        dry_run: bool,

        /// Treat the host as this OS (darwin, windows, linux, freebsd).
        #[arg(long, value_name = "OS")]
        platform: Option<Platform>,
    },

    /// Show which launcher program would be used.
    Strategy {
        /// Treat the host as this OS (darwin, windows, linux, freebsd).
        #[arg(long, value_name = "OS")]
        platform: Option<Platform>,
    },

    /// Print the config file path.
    ConfigPath,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Open {
                url,
                dry_run,
                platform,
            } => run_open(&load_config()?, &url, platform, dry_run)?,
            CliCommand::Strategy { platform } => run_strategy(&load_config()?, platform)?,
            CliCommand::ConfigPath => run_config_path()?,
        }

        Ok(())
    }
}

/// Loads the config file; `config-path` skips this so it works with a broken file.
fn load_config() -> Result<UrlopenConfig> {
    let cfg = config::load_or_init()?;
    tracing::debug!("loaded config: {:?}", cfg);
    Ok(cfg)
}
