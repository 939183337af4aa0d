//! Wind-vane steering: hold a constant true wind angle.

use std::fmt;

use super::{PilotError, PilotStrategy};
use crate::boat::BoatInfos;

/// Steers so the boat sails at `target_twa` to the wind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindVane {
    target_twa: i32,
}

impl WindVane {
    pub fn new(target_twa: i32) -> Self {
        Self { target_twa }
    }
}

impl PilotStrategy for WindVane {
    fn bearing_for(&self, infos: &BoatInfos) -> Result<i32, PilotError> {
        // heading = wind direction + TWA, so wind direction = heading - TWA.
        // Widened so out-of-range telemetry cannot overflow.
        let wind_angle_zero = i64::from(infos.heading) - i64::from(infos.twa);
        let bearing = (wind_angle_zero + i64::from(self.target_twa)).rem_euclid(360);
        Ok(bearing as i32)
    }
}

impl fmt::Display for WindVane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "wind vane (TWA {}°)", self.target_twa)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boat::{BoatError, TelemetrySource};

    struct TestBoat {
        infos: BoatInfos,
    }

    impl TelemetrySource for TestBoat {
        async fn boat_infos(&self) -> Result<BoatInfos, BoatError> {
            Ok(self.infos.clone())
        }
    }

    struct OfflineBoat;

    impl TelemetrySource for OfflineBoat {
        async fn boat_infos(&self) -> Result<BoatInfos, BoatError> {
            Err(BoatError::HttpError("connection refused".to_string()))
        }
    }

    fn infos(twa: i32, heading: i32) -> BoatInfos {
        BoatInfos {
            twa,
            heading,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_wind_vane_bearings() {
        // (target TWA, current TWA, current heading, expected bearing)
        let cases = [(-90, 0, 0, 270), (90, 0, 0, 90), (90, 0, 180, 270), (-39, -11, 234, 206)];

        for (target, twa, heading, expected) in cases {
            let boat = TestBoat {
                infos: infos(twa, heading),
            };
            let bearing = WindVane::new(target).bearing(&boat).await.unwrap();
            assert_eq!(
                bearing, expected,
                "target {} twa {} heading {}",
                target, twa, heading
            );
        }
    }

    #[test]
    fn test_wind_vane_wraps_above_360() {
        let bearing = WindVane::new(150).bearing_for(&infos(-120, 300)).unwrap();
        assert_eq!(bearing, 210);
    }

    #[test]
    fn test_wind_vane_never_negative() {
        for heading in (0..360).step_by(15) {
            for twa in [-180, -90, -1, 0, 1, 90, 180] {
                let bearing = WindVane::new(-170).bearing_for(&infos(twa, heading)).unwrap();
                assert!((0..360).contains(&bearing), "bearing {} out of range", bearing);
            }
        }
    }

    #[test]
    fn test_wind_vane_extreme_telemetry_does_not_overflow() {
        // i32::MAX + 1 + 10 = 2147483658, which is 138 modulo 360
        let bearing = WindVane::new(10).bearing_for(&infos(-1, i32::MAX)).unwrap();
        assert_eq!(bearing, 138);

        let bearing = WindVane::new(-180).bearing_for(&infos(i32::MAX, i32::MIN)).unwrap();
        assert!((0..360).contains(&bearing));
    }

    #[test]
    fn test_wind_vane_ignores_position() {
        // No coordinates: the wind vane does not navigate by position
        let result = WindVane::new(45).bearing_for(&infos(45, 10));
        assert_eq!(result.unwrap(), 10);
    }

    #[tokio::test]
    async fn test_wind_vane_propagates_fetch_error() {
        let result = WindVane::new(90).bearing(&OfflineBoat).await;
        assert!(matches!(
            result,
            Err(PilotError::Telemetry(BoatError::HttpError(_)))
        ));
    }

    #[test]
    fn test_display() {
        assert_eq!(WindVane::new(-39).to_string(), "wind vane (TWA -39°)");
    }
}
