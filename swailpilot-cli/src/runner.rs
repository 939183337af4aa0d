//! CLI runner for common setup and operations.
//!
//! Encapsulates config loading, logging initialization, client creation and
//! the async runtime so command handlers stay short.

use std::future::Future;

use tokio_util::sync::CancellationToken;
use tracing::info;

use swailpilot::autopilot::run_autopilot;
use swailpilot::boat::{BoatHandle, SwailClient};
use swailpilot::config::ConfigFile;
use swailpilot::logging::{default_log_file, init_logging, LoggingGuard};
use swailpilot::pilot::PilotStrategy;

use crate::commands::common::GlobalArgs;
use crate::error::CliError;

/// Runner that manages CLI lifecycle and common operations.
pub struct CliRunner {
    /// Logging guard - keeps logging active while runner exists
    #[allow(dead_code)]
    logging_guard: LoggingGuard,
    /// Loaded configuration with CLI overrides applied
    config: ConfigFile,
    runtime: tokio::runtime::Runtime,
}

impl CliRunner {
    /// Load config, apply global CLI overrides and initialize logging.
    pub fn new(global: &GlobalArgs) -> Result<Self, CliError> {
        let mut config = ConfigFile::load()?;
        global.apply_to(&mut config)?;

        let log_path = &config.logging.file;
        let log_dir = log_path
            .parent()
            .map(|p| p.to_path_buf())
            .unwrap_or_else(|| ".".into());
        let log_file = log_path
            .file_name()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| default_log_file().to_string());

        let logging_guard = init_logging(&log_dir, &log_file, true, global.debug)
            .map_err(|e| CliError::LoggingInit(e.to_string()))?;

        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
            .map_err(|e| CliError::Runtime(e.to_string()))?;

        Ok(Self {
            logging_guard,
            config,
            runtime,
        })
    }

    /// Log startup information for a command.
    pub fn log_startup(&self, command: &str) {
        info!("SwailPilot v{}", swailpilot::VERSION);
        info!("SwailPilot CLI: {} command", command);
    }

    /// Create the HTTP client for the configured boat.
    pub fn create_client(&self) -> Result<SwailClient, CliError> {
        let user_token = self
            .config
            .boat
            .user_token
            .clone()
            .ok_or_else(|| CliError::Config("no user token given".to_string()))?;
        let boat_id = self
            .config
            .boat
            .boat_id
            .clone()
            .ok_or_else(|| CliError::Config("no boat id given".to_string()))?;

        let handle = BoatHandle::new(user_token, boat_id);
        SwailClient::new(handle, self.config.boat_client_config()).map_err(CliError::from)
    }

    /// Run a future to completion on the runner's runtime.
    pub fn block_on<F: Future>(&self, future: F) -> F::Output {
        self.runtime.block_on(future)
    }

    /// Run the autopilot until Ctrl-C.
    pub fn run_autopilot<P>(&self, client: SwailClient, strategy: P) -> Result<(), CliError>
    where
        P: PilotStrategy,
    {
        let shutdown = CancellationToken::new();
        let on_signal = shutdown.clone();
        ctrlc::set_handler(move || on_signal.cancel())
            .map_err(|e| CliError::Runtime(format!("Failed to set signal handler: {}", e)))?;

        let autopilot_config = self.config.autopilot_config();

        info!(
            strategy = %strategy,
            boat_id = %client.handle().boat_id,
            "Starting autopilot"
        );
        println!("Starting autopilot with strategy {}", strategy);
        println!(
            "Polling every {}s. Press Ctrl-C to stop",
            autopilot_config.poll_interval.as_secs()
        );

        let summary = self.block_on(run_autopilot(client, strategy, autopilot_config, shutdown));

        println!();
        println!(
            "Autopilot stopped after {} cycles ({} course changes, {} failed cycles)",
            summary.cycles, summary.course_changes, summary.failures
        );
        Ok(())
    }
}
