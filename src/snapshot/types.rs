use serde::Serialize;
use utoipa::ToSchema;

use crate::predict::{Altitude, Location, Speed};
use crate::telemetry::{Attitude, KeplerianElements, LookAngle, StateVector, VehicleInfo};

/// Quantities derived from the state vector propagated to the request time.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Computed {
    pub propagated_state_vector: StateVector,
    pub altitude: Altitude,
    pub speed: Speed,
    pub location: Location,
}

/// Everything known about the vehicle at the moment of the request.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ComputedSnapshot {
    pub look_angle: LookAngle,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info: Option<VehicleInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attitude: Option<Attitude>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_vector: Option<StateVector>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compute: Option<Computed>,
    #[serde(rename = "keplarian", skip_serializing_if = "Option::is_none")]
    pub keplerian: Option<KeplerianElements>,
}

/// Telemetry as received, without propagation.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RawSnapshot {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info: Option<VehicleInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attitude: Option<Attitude>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_vector: Option<StateVector>,
    #[serde(rename = "keplarian", skip_serializing_if = "Option::is_none")]
    pub keplerian: Option<KeplerianElements>,
}
