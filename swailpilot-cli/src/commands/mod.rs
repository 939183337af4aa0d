//! CLI command implementations.
//!
//! # Command Modules
//!
//! - [`config`] - Configuration management (init, path)
//! - [`goto`] - Direct-line autopilot to a waypoint
//! - [`infos`] - Print current boat telemetry
//! - [`polars`] - Print the boat's polar table
//! - [`windvane`] - Wind-vane autopilot holding a true wind angle

pub mod common;
pub mod config;
pub mod goto;
pub mod infos;
pub mod polars;
pub mod windvane;
