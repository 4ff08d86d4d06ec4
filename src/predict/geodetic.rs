use std::f64::consts::PI;

use serde::Serialize;
use utoipa::ToSchema;

use crate::time::reduce;

/// Earth flattening, 1/298.25642 (IERS 2003).
pub const EARTH_FLATTENING: f64 = 0.003_352_819_697_896_192_8;
/// Equatorial radius, km.
pub const EARTH_RADIUS_KM: f64 = 6378.1366;

const LATITUDE_TOLERANCE_RAD: f64 = 1e-6;
const MAX_LATITUDE_ITERATIONS: usize = 100;

/// Sub-satellite point, degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, ToSchema)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}

/// Geodetic latitude and longitude below an ECI position (km), for the given
/// Greenwich apparent sidereal time (radians).
pub fn calculate_position(x: f64, y: f64, z: f64, gast: f64) -> Location {
    let rho = (x * x + y * y).sqrt();

    let longitude = reduce(y.atan2(x) - gast, -PI, PI);

    let e2 = 0.006_705_621_364_635_388 - EARTH_FLATTENING * EARTH_FLATTENING;
    let mut latitude = z.atan2(rho);
    for _ in 0..MAX_LATITUDE_ITERATIONS {
        let previous = latitude;
        let sin_lat = previous.sin();
        let curvature = 1.0 / (1.0 - e2 * sin_lat * sin_lat).sqrt();
        latitude = (z + EARTH_RADIUS_KM * curvature * e2 * sin_lat).atan2(rho);

        if !latitude.is_finite() || (previous - latitude).abs() <= LATITUDE_TOLERANCE_RAD {
            break;
        }
    }

    Location {
        latitude: latitude.to_degrees(),
        longitude: longitude.to_degrees(),
    }
}
