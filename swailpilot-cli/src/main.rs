//! SwailPilot CLI - autopilot for boats sailing on swail.io
//!
//! Reads boat telemetry over HTTP and keeps the course set by a steering
//! strategy until interrupted with Ctrl-C.

mod commands;
mod error;
mod runner;

use clap::{Parser, Subcommand};

use commands::common::GlobalArgs;
use commands::config::ConfigCommands;
use error::CliError;

#[derive(Parser)]
#[command(name = "swailpilot")]
#[command(version = swailpilot::VERSION)]
#[command(about = "Autopilot for boats sailing on swail.io", long_about = None)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print current boat telemetry
    Infos,

    /// Print the boat's polar table
    Polars,

    /// Steer a direct line to a waypoint
    #[command(allow_negative_numbers = true)]
    Goto {
        /// Waypoint latitude in decimal degrees
        lat: String,
        /// Waypoint longitude in decimal degrees
        lon: String,
    },

    /// Hold a constant true wind angle (negative = wind from port)
    #[command(allow_negative_numbers = true)]
    Windvane {
        /// Target true wind angle in degrees, -180 to 180
        twa: i32,
    },

    /// Manage the configuration file
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = run(cli);
    if let Err(e) = result {
        e.exit();
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let global = cli.global;
    match cli.command {
        Commands::Infos => commands::infos::run(&global),
        Commands::Polars => commands::polars::run(&global),
        Commands::Goto { lat, lon } => commands::goto::run(&global, &lat, &lon),
        Commands::Windvane { twa } => commands::windvane::run(&global, twa),
        Commands::Config { command } => commands::config::run(command),
    }
}
