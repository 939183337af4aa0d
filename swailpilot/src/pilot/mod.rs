//! Pilot strategies: turn a telemetry snapshot into a desired bearing.
//!
//! Two strategies share the [`PilotStrategy`] capability:
//!
//! - [`WindVane`] holds a fixed true wind angle.
//! - [`DirectLine`] steers the great-circle bearing to a fixed waypoint.
//!
//! Strategies keep no state between calls. Each bearing is a pure function
//! of the strategy's target and the latest snapshot.

mod direct_line;
mod wind_vane;

pub use direct_line::DirectLine;
pub use wind_vane::WindVane;

use std::fmt;
use std::future::Future;

use thiserror::Error;

use crate::boat::{BoatError, BoatInfos, TelemetrySource};

/// Errors produced while computing a bearing.
#[derive(Debug, Error)]
pub enum PilotError {
    /// Telemetry could not be fetched or is unusable for navigation.
    #[error("Telemetry unavailable: {0}")]
    Telemetry(#[from] BoatError),
}

/// A policy computing the desired bearing from the latest telemetry.
pub trait PilotStrategy: Send + Sync + fmt::Display {
    /// Bearing in whole degrees (0-359) for the given snapshot.
    fn bearing_for(&self, infos: &BoatInfos) -> Result<i32, PilotError>;

    /// Fetch a fresh snapshot from `source` and compute the bearing for it.
    fn bearing<S: TelemetrySource>(
        &self,
        source: &S,
    ) -> impl Future<Output = Result<i32, PilotError>> + Send {
        async move {
            let infos = source.boat_infos().await?;
            self.bearing_for(&infos)
        }
    }
}
