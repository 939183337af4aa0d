//! Arguments shared by every command.

use clap::Args;
use swailpilot::config::{normalize_base_url, ConfigFile};

use crate::error::CliError;

/// Global options; any value given here overrides config.ini.
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalArgs {
    /// User token issued by swail.io
    #[arg(short = 'u', long, global = true)]
    pub user_token: Option<String>,

    /// Identifier of the boat to control
    #[arg(short = 'b', long, global = true)]
    pub boat_id: Option<String>,

    /// Base URL of the boat-control API
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,
}

impl GlobalArgs {
    /// Apply command-line overrides on top of values loaded from file.
    ///
    /// `--base-url` goes through the same check as the config file key.
    pub fn apply_to(&self, config: &mut ConfigFile) -> Result<(), CliError> {
        if let Some(token) = &self.user_token {
            config.boat.user_token = Some(token.clone());
        }
        if let Some(boat_id) = &self.boat_id {
            config.boat.boat_id = Some(boat_id.clone());
        }
        if let Some(base_url) = &self.base_url {
            config.api.base_url = normalize_base_url(base_url)?;
        }
        Ok(())
    }
}
