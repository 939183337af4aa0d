//! SwailPilot - Autopilot for the swail.io sailing simulation
//!
//! Samples boat telemetry from the simulation, computes a desired bearing
//! with a pluggable pilot strategy and sends course corrections back.
//!
//! # Modules
//!
//! - [`geo`] - great-circle distance and bearing
//! - [`boat`] - boat-control endpoint (telemetry, course commands, HTTP client)
//! - [`pilot`] - wind-vane and direct-line strategies
//! - [`autopilot`] - the periodic sense-compute-act loop
//! - [`config`] - `~/.swailpilot/config.ini`
//! - [`logging`] - `tracing` subscriber setup
//!
//! # Example
//!
//! ```ignore
//! use swailpilot::autopilot::{run_autopilot, AutopilotConfig};
//! use swailpilot::boat::{BoatClientConfig, BoatHandle, SwailClient};
//! use swailpilot::pilot::WindVane;
//! use tokio_util::sync::CancellationToken;
//!
//! let client = SwailClient::new(BoatHandle::new(token, boat_id), BoatClientConfig::default())?;
//! let shutdown = CancellationToken::new();
//! run_autopilot(client, WindVane::new(-39), AutopilotConfig::default(), shutdown).await;
//! ```

pub mod autopilot;
pub mod boat;
pub mod config;
pub mod geo;
pub mod logging;
pub mod pilot;

/// Version of the SwailPilot library and CLI.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
