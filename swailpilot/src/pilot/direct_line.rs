//! Direct-line steering: head straight for a waypoint.

use std::fmt;

use super::{PilotError, PilotStrategy};
use crate::boat::BoatInfos;
use crate::geo::Position;

/// Steers the initial great-circle bearing from the boat to `target`.
///
/// Ignores the wind entirely, like a motor boat would.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectLine {
    target: Position,
}

impl DirectLine {
    pub fn new(target: Position) -> Self {
        Self { target }
    }

    pub fn target(&self) -> Position {
        self.target
    }
}

impl PilotStrategy for DirectLine {
    fn bearing_for(&self, infos: &BoatInfos) -> Result<i32, PilotError> {
        let current = infos.position()?;

        let distance = current.distance_to(&self.target);
        let raw_bearing = current.bearing_to(&self.target);
        let course = raw_bearing as i32;

        tracing::info!(
            dtw_nm = format_args!("{:.1}", distance),
            bearing = format_args!("{:.1}", raw_bearing),
            course,
            "Distance to waypoint"
        );
        Ok(course)
    }
}

impl fmt::Display for DirectLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "direct line to {}", self.target)
    }
}
