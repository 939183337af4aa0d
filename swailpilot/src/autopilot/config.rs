//! Configuration for the autopilot loop.

use std::time::Duration;

/// Default time between two autopilot cycles.
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 10;

/// Configuration for [`Autopilot`](super::Autopilot).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutopilotConfig {
    /// How often telemetry is sampled and the course re-evaluated.
    pub poll_interval: Duration,
}

impl AutopilotConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the poll interval.
    pub fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self
    }
}

impl Default for AutopilotConfig {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_secs(DEFAULT_POLL_INTERVAL_SECS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AutopilotConfig::default();
        assert_eq!(config.poll_interval, Duration::from_secs(10));
    }

    #[test]
    fn test_with_poll_interval() {
        let config = AutopilotConfig::new().with_poll_interval(Duration::from_millis(250));
        assert_eq!(config.poll_interval, Duration::from_millis(250));
    }
}
