//! Config command - create or locate the configuration file.

use clap::Subcommand;
use swailpilot::config::{config_file_path, ConfigFile};

use crate::error::CliError;

/// Configuration subcommands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Write a config.ini with default values
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },

    /// Show the configuration file path
    Path,
}

/// Run a config subcommand.
pub fn run(command: ConfigCommands) -> Result<(), CliError> {
    match command {
        ConfigCommands::Init { force } => run_init(force),
        ConfigCommands::Path => run_path(),
    }
}

fn run_init(force: bool) -> Result<(), CliError> {
    let path = config_file_path();

    if path.exists() && !force {
        println!("Configuration file already exists: {}", path.display());
        println!("Use --force to overwrite it.");
        return Ok(());
    }

    ConfigFile::default().save()?;

    println!("Created configuration file: {}", path.display());
    println!();
    println!("Set user_token and boat_id in the [boat] section, then run:");
    println!("  swailpilot infos");
    Ok(())
}

fn run_path() -> Result<(), CliError> {
    println!("{}", config_file_path().display());
    Ok(())
}
