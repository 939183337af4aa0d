//! CLI error handling with user-friendly messages.
//!
//! Centralizes error handling for the CLI, providing consistent formatting
//! and appropriate exit codes.

use std::fmt;
use std::process;

use swailpilot::boat::BoatError;
use swailpilot::config::{config_file_path, ConfigFileError};
use swailpilot::geo::CoordError;

/// CLI-specific errors with user-friendly messages.
#[derive(Debug)]
pub enum CliError {
    /// Failed to initialize logging
    LoggingInit(String),
    /// Configuration error
    Config(String),
    /// Config file could not be read, parsed or written
    ConfigFile(ConfigFileError),
    /// Waypoint or wind angle given on the command line is invalid
    InvalidInput(String),
    /// Request to the boat-control endpoint failed
    Boat(BoatError),
    /// Failed to start the async runtime or signal handler
    Runtime(String),
}

impl CliError {
    /// Exit the process with an appropriate error message and code.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);

        match self {
            CliError::Config(_) => {
                eprintln!();
                eprintln!("Pass --user-token and --boat-id, or set them in:");
                eprintln!("  {}", config_file_path().display());
                eprintln!("Create it with: swailpilot config init");
            }
            CliError::Boat(e) if e.is_transport() => {
                eprintln!();
                eprintln!("Common issues:");
                eprintln!("  1. No network connection or swail.io is down");
                eprintln!("  2. Wrong --base-url or [api] base_url in config.ini");
                eprintln!("  3. Invalid user token or boat id (the endpoint answers 4xx)");
            }
            _ => {}
        }

        process::exit(1)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::LoggingInit(msg) => write!(f, "Failed to initialize logging: {}", msg),
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CliError::ConfigFile(e) => write!(f, "{}", e),
            CliError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            CliError::Boat(e) => write!(f, "Boat request failed: {}", e),
            CliError::Runtime(msg) => write!(f, "Runtime error: {}", msg),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::ConfigFile(e) => Some(e),
            CliError::Boat(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigFileError> for CliError {
    fn from(e: ConfigFileError) -> Self {
        CliError::ConfigFile(e)
    }
}

impl From<BoatError> for CliError {
    fn from(e: BoatError) -> Self {
        CliError::Boat(e)
    }
}

impl From<CoordError> for CliError {
    fn from(e: CoordError) -> Self {
        CliError::InvalidInput(e.to_string())
    }
}
