//! Boat-control endpoint: telemetry reads and course commands.
//!
//! # Architecture
//!
//! ```text
//! Autopilot loop
//!     │
//!     ├── TelemetrySource::boat_infos() ──┐
//!     │                                   ├── SwailClient (reqwest) → swail.io
//!     └── BoatControl::set_course() ──────┘
//! ```
//!
//! Any type implementing the two traits can stand in for the HTTP client,
//! which is how the autopilot is tested against an in-memory boat.

mod client;
mod config;
mod error;
mod telemetry;

pub use client::{BoatControl, BoatHandle, SwailClient, TelemetrySource};
pub use config::{BoatClientConfig, DEFAULT_BASE_URL, DEFAULT_HTTP_TIMEOUT_SECS};
pub use error::BoatError;
pub use telemetry::{position_from_coord, BoatInfos, BoatPolar};
