//! Configuration file for the autopilot (`~/.swailpilot/config.ini`).
//!
//! Settings structs live in [`settings`], INI parsing in `parser` and
//! serialization in `writer`. Library components take the typed configs
//! ([`BoatClientConfig`](crate::boat::BoatClientConfig),
//! [`AutopilotConfig`](crate::autopilot::AutopilotConfig)) built from here.

mod file;
mod parser;
mod settings;
mod writer;

pub use file::{config_directory, config_file_path, ConfigFile, ConfigFileError};
pub use parser::normalize_base_url;
pub use settings::{ApiSettings, AutopilotSettings, BoatSettings, LoggingSettings};
