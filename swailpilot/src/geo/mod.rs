//! Great-circle geodesy
//!
//! Distance and initial bearing between two [`Position`]s on a spherical
//! earth. Longitude differences are taken on the raw signed degree values, so
//! positions written past the ±180° seam (e.g. `-180.0167` and `180.0167`)
//! still resolve to the short path across the date line.

mod types;

pub use types::{CoordError, GeoAngle, Position, MAX_LAT, MAX_LON, MIN_LAT, MIN_LON};

/// Mean earth radius used by the haversine formula.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Kilometres per nautical mile.
pub const KM_PER_NM: f64 = 1.852;

impl Position {
    /// Great-circle distance to `other`, in nautical miles.
    ///
    /// Haversine formula, see <http://www.movable-type.co.uk/scripts/latlong.html>.
    pub fn distance_to(&self, other: &Position) -> f64 {
        let phi1 = self.latitude.to_radians();
        let phi2 = other.latitude.to_radians();
        let delta_phi = (other.latitude - self.latitude).to_radians();
        let delta_lambda = (other.longitude - self.longitude).to_radians();

        let a = (delta_phi / 2.0).sin().powi(2)
            + phi1.cos() * phi2.cos() * (delta_lambda / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        EARTH_RADIUS_KM * c / KM_PER_NM
    }

    /// Initial great-circle bearing to `other`, in true degrees within `[0, 360)`.
    ///
    /// Coincident points yield `0.0`.
    pub fn bearing_to(&self, other: &Position) -> f64 {
        let phi1 = self.latitude.to_radians();
        let phi2 = other.latitude.to_radians();
        let delta_lambda = (other.longitude - self.longitude).to_radians();

        let y = delta_lambda.sin() * phi2.cos();
        let x = phi1.cos() * phi2.sin() - phi1.sin() * phi2.cos() * delta_lambda.cos();

        // atan2 lands in (-180, 180]; one wrap is enough
        let mut bearing = y.atan2(x).to_degrees() + 360.0;
        if bearing >= 360.0 {
            bearing -= 360.0;
        }
        bearing
    }
}

/// Parses a latitude/longitude pair given as decimal degree strings.
///
/// Used to validate a waypoint before any strategy is built.
pub fn parse_position(lat: &str, lon: &str) -> Result<Position, CoordError> {
    let lat_value: f64 = lat.trim().parse().map_err(|_| CoordError::Unparseable {
        field: "latitude",
        input: lat.to_string(),
    })?;
    let lon_value: f64 = lon.trim().parse().map_err(|_| CoordError::Unparseable {
        field: "longitude",
        input: lon.to_string(),
    })?;

    Position::new_checked(lat_value, lon_value)
}
