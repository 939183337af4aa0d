//! Settings structs, one per `[section]` of the INI file.

use std::path::PathBuf;
use std::time::Duration;

use crate::autopilot::{AutopilotConfig, DEFAULT_POLL_INTERVAL_SECS};
use crate::boat::{BoatClientConfig, DEFAULT_BASE_URL, DEFAULT_HTTP_TIMEOUT_SECS};
use crate::logging::{default_log_dir, default_log_file};

/// Complete application configuration loaded from config.ini.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigFile {
    pub boat: BoatSettings,
    pub api: ApiSettings,
    pub autopilot: AutopilotSettings,
    pub logging: LoggingSettings,
}

/// Boat identity.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoatSettings {
    /// User token obtained after signing in on the web site
    pub user_token: Option<String>,
    /// Identifier of the boat to control
    pub boat_id: Option<String>,
}

/// Endpoint settings.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiSettings {
    pub base_url: String,
    /// HTTP timeout in seconds
    pub timeout: u64,
}

/// Autopilot loop settings.
#[derive(Debug, Clone, PartialEq)]
pub struct AutopilotSettings {
    /// Seconds between two cycles
    pub poll_interval: u64,
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq)]
pub struct LoggingSettings {
    pub file: PathBuf,
}

impl ConfigFile {
    /// HTTP client configuration derived from the `[api]` section.
    pub fn boat_client_config(&self) -> BoatClientConfig {
        BoatClientConfig::new()
            .with_base_url(self.api.base_url.clone())
            .with_timeout(Duration::from_secs(self.api.timeout))
    }

    /// Loop configuration derived from the `[autopilot]` section.
    pub fn autopilot_config(&self) -> AutopilotConfig {
        AutopilotConfig::new().with_poll_interval(Duration::from_secs(self.autopilot.poll_interval))
    }
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_HTTP_TIMEOUT_SECS,
        }
    }
}

impl Default for AutopilotSettings {
    fn default() -> Self {
        Self {
            poll_interval: DEFAULT_POLL_INTERVAL_SECS,
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            file: default_log_dir().join(default_log_file()),
        }
    }
}
