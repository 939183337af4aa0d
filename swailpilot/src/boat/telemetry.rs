//! Telemetry snapshot and polar table returned by the boat-control endpoint.

use std::fmt;

use serde::Deserialize;

use super::error::BoatError;
use crate::geo::Position;

/// Point-in-time read of the boat state.
///
/// Field names follow the endpoint's JSON. Missing fields decode to their
/// default value.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct BoatInfos {
    #[serde(rename = "Bti")]
    pub boat_type: String,

    #[serde(rename = "Colour")]
    pub colour: String,

    /// Current heading in whole degrees (0-359).
    #[serde(rename = "Dir")]
    pub heading: i32,

    /// Position as delivered by the endpoint: `[longitude, latitude]`.
    #[serde(rename = "Coord")]
    pub coord: Vec<f64>,

    #[serde(rename = "Name")]
    pub name: String,

    #[serde(rename = "Speed")]
    pub speed: f32,

    /// True wind angle, signed degrees.
    #[serde(rename = "TWA")]
    pub twa: i32,

    /// True wind speed.
    #[serde(rename = "TWS")]
    pub tws: f32,
}

impl BoatInfos {
    /// Current boat position.
    ///
    /// Fails with [`BoatError::InvalidCoordinates`] when the coordinate pair
    /// is malformed.
    pub fn position(&self) -> Result<Position, BoatError> {
        position_from_coord(&self.coord)
    }

    /// Rejects a snapshot that cannot be used for navigation.
    ///
    /// Heading must be in [0, 360) and TWA in [-180, 180].
    pub fn validate(&self) -> Result<(), BoatError> {
        if !(0..360).contains(&self.heading) {
            return Err(BoatError::InvalidAngle {
                field: "heading",
                value: self.heading,
            });
        }
        if !(-180..=180).contains(&self.twa) {
            return Err(BoatError::InvalidAngle {
                field: "TWA",
                value: self.twa,
            });
        }
        self.position().map(|_| ())
    }
}

impl fmt::Display for BoatInfos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) heading {}° TWA {}° TWS {:.1}kn speed {:.1}kn at {:?}",
            self.name, self.boat_type, self.heading, self.twa, self.tws, self.speed, self.coord
        )
    }
}

/// Converts the endpoint's `[longitude, latitude]` pair into a [`Position`].
///
/// The endpoint orders the pair longitude first; positions are latitude
/// first. Anything other than exactly two values is rejected.
pub fn position_from_coord(coord: &[f64]) -> Result<Position, BoatError> {
    match coord {
        [lon, lat] => Ok(Position::new(*lat, *lon)),
        _ => Err(BoatError::InvalidCoordinates(coord.to_vec())),
    }
}

/// One entry of the boat's polar table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct BoatPolar {
    /// Course over ground, degrees.
    #[serde(rename = "Dir")]
    pub cog: i32,

    #[serde(rename = "Speed")]
    pub speed: f32,
}
