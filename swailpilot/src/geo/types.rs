//! Geographic type definitions

use std::fmt;

/// Valid latitude range
pub const MIN_LAT: f64 = -90.0;
pub const MAX_LAT: f64 = 90.0;

/// Valid longitude range
pub const MIN_LON: f64 = -180.0;
pub const MAX_LON: f64 = 180.0;

/// A signed angle in decimal degrees.
///
/// Used for both latitude and longitude. The range is not constrained at the
/// type level; use [`Position::new_checked`] when the value comes from a user.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct GeoAngle(pub f64);

impl GeoAngle {
    /// Angle in degrees.
    #[inline]
    pub fn degrees(self) -> f64 {
        self.0
    }

    /// Angle in radians.
    #[inline]
    pub fn to_radians(self) -> f64 {
        self.0.to_radians()
    }
}

impl From<f64> for GeoAngle {
    fn from(degrees: f64) -> Self {
        GeoAngle(degrees)
    }
}

impl std::ops::Sub for GeoAngle {
    type Output = GeoAngle;

    fn sub(self, rhs: GeoAngle) -> GeoAngle {
        GeoAngle(self.0 - rhs.0)
    }
}

impl fmt::Display for GeoAngle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.5}°", self.0)
    }
}

/// A point on the earth's surface.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    pub latitude: GeoAngle,
    pub longitude: GeoAngle,
}

impl Position {
    /// Create a position from latitude and longitude in degrees.
    ///
    /// No range check is performed. Values past the ±180° seam are accepted
    /// and handled by the distance and bearing math.
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self {
            latitude: GeoAngle(lat),
            longitude: GeoAngle(lon),
        }
    }

    /// Create a position, rejecting out-of-range or non-finite coordinates.
    pub fn new_checked(lat: f64, lon: f64) -> Result<Self, CoordError> {
        if !lat.is_finite() || !(MIN_LAT..=MAX_LAT).contains(&lat) {
            return Err(CoordError::InvalidLatitude(lat));
        }
        if !lon.is_finite() || !(MIN_LON..=MAX_LON).contains(&lon) {
            return Err(CoordError::InvalidLongitude(lon));
        }
        Ok(Self::new(lat, lon))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.5}, {:.5})", self.latitude.0, self.longitude.0)
    }
}

/// Errors raised when validating user-supplied coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum CoordError {
    /// Latitude is outside valid range (-90.0 to 90.0)
    InvalidLatitude(f64),
    /// Longitude is outside valid range (-180.0 to 180.0)
    InvalidLongitude(f64),
    /// Text could not be parsed as a decimal degree value
    Unparseable { field: &'static str, input: String },
}

impl fmt::Display for CoordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoordError::InvalidLatitude(lat) => {
                write!(
                    f,
                    "Invalid latitude: {} (must be between {} and {})",
                    lat, MIN_LAT, MAX_LAT
                )
            }
            CoordError::InvalidLongitude(lon) => {
                write!(
                    f,
                    "Invalid longitude: {} (must be between {} and {})",
                    lon, MIN_LON, MAX_LON
                )
            }
            CoordError::Unparseable { field, input } => {
                write!(f, "Invalid {}: '{}' is not a decimal degree value", field, input)
            }
        }
    }
}

impl std::error::Error for CoordError {}
