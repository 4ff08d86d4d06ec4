mod fields;
mod phase;
mod state_vector;
mod status;
mod tle;
mod tracking;
mod types;

pub use phase::MissionPhase;
pub use state_vector::{parse_state_vector_blob, parse_state_vector_lines};
pub use status::{parse_status, StatusVariant};
pub use tle::scan_two_line_elements;
pub use tracking::{parse_tracking, reference_look_angle};
pub use types::{Attitude, Designator, KeplerianElements, LookAngle, StateVector, VehicleInfo};

/// Lowercase prefix of the lines that belong to the tracked vehicle.
pub const VEHICLE_TAG: &str = "iss";
