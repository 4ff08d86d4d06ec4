use serde::Serialize;
use utoipa::ToSchema;

use super::MissionPhase;

/// Range, rate and pointing angles from the tracking network.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct LookAngle {
    pub description: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub range: f64,
    pub rate: f64,
    pub azimuth: f64,
    pub elevation: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VehicleInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    pub signal: bool,
    pub temperature_f: f64,
    pub temperature_c: f64,
    pub humidity: f64,
    #[serde(rename = "airpressure")]
    pub air_pressure: f64,
    #[schema(value_type = String)]
    pub phase: MissionPhase,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Attitude {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    pub roll: f64,
    pub pitch: f64,
    pub yaw: f64,
}

/// Earth-centered inertial Cartesian state, kilometers and kilometers per
/// second.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StateVector {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub description: Option<&'static str>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub kind: Option<&'static str>,
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub velocity_x: f64,
    pub velocity_y: f64,
    pub velocity_z: f64,
    /// Telemetry timestamp, fractional hours on the source clock.
    pub time: f64,
    /// Local GMT of the request that produced this vector.
    pub gmt: f64,
}

impl StateVector {
    /// The same state without its source labels.
    pub fn unlabeled(self) -> Self {
        Self {
            description: None,
            kind: None,
            ..self
        }
    }

    pub fn position(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    pub fn velocity(&self) -> [f64; 3] {
        [self.velocity_x, self.velocity_y, self.velocity_z]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Designator {
    pub launch_year: String,
    pub launch_number: Option<i64>,
    pub launch_piece: String,
}

/// Mean orbital elements decoded from a two-line element set. Angles are in
/// radians, mean motion in radians per minute.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct KeplerianElements {
    #[schema(value_type = String)]
    pub description: &'static str,
    #[serde(rename = "type")]
    #[schema(value_type = String)]
    pub kind: &'static str,
    pub satellite: Option<i64>,
    pub classification: String,
    pub designator: Designator,
    pub epoch_year: Option<i32>,
    /// Day of year with fraction, one-based.
    pub epoch: f64,
    #[serde(rename = "epochFirstDerivate")]
    pub epoch_first_derivative: f64,
    #[serde(rename = "epochSecondDerivate")]
    pub epoch_second_derivative: f64,
    pub drag: f64,
    pub inclination: f64,
    #[serde(rename = "rightAscending")]
    pub right_ascension: f64,
    pub eccentricity: f64,
    pub perigee: f64,
    pub mean_anomaly: f64,
    pub mean_motion: f64,
    pub julian_epoch: f64,
}
