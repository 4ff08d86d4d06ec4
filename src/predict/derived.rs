use serde::Serialize;
use utoipa::ToSchema;

use super::geodetic::EARTH_RADIUS_KM;
use crate::telemetry::StateVector;

const KM_PER_NAUTICAL_MILE: f64 = 1.852;
const KM_PER_STATUTE_MILE: f64 = 1.609344;
const METERS_PER_STATUTE_MILE: f64 = 1609.344;

const ALTITUDE_UNITS: &str = "kilometers (km), nautical miles (nm), statute miles (sm)";
const SPEED_UNITS: &str = "meters per second (mps), kilometers per hour (kph), miles per hour (mph)";

/// Height above the equatorial radius.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, ToSchema)]
pub struct Altitude {
    #[schema(value_type = String)]
    pub description: &'static str,
    pub km: f64,
    pub nm: f64,
    pub sm: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, ToSchema)]
pub struct Speed {
    #[schema(value_type = String)]
    pub description: &'static str,
    pub mps: f64,
    pub kph: f64,
    pub mph: f64,
}

fn magnitude([x, y, z]: [f64; 3]) -> f64 {
    (x * x + y * y + z * z).sqrt()
}

pub fn altitude(state: &StateVector) -> Altitude {
    let km = magnitude(state.position()) - EARTH_RADIUS_KM;
    Altitude {
        description: ALTITUDE_UNITS,
        km,
        nm: km / KM_PER_NAUTICAL_MILE,
        sm: km / KM_PER_STATUTE_MILE,
    }
}

pub fn speed(state: &StateVector) -> Speed {
    let mps = magnitude(state.velocity()) * 1000.0;
    Speed {
        description: SPEED_UNITS,
        mps,
        kph: mps * 3.6,
        mph: mps / METERS_PER_STATUTE_MILE * 3600.0,
    }
}
