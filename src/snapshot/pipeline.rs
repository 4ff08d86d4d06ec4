use chrono::{DateTime, TimeZone};

use super::{Computed, ComputedSnapshot, RawSnapshot};
use crate::predict::{altitude, calculate_position, correct_position, speed};
use crate::telemetry::{
    parse_state_vector_blob, parse_state_vector_lines, parse_status, parse_tracking,
    reference_look_angle, StateVector, StatusVariant,
};
use crate::time::TimeState;

/// Telemetry text for one snapshot, one buffer per logical file.
#[derive(Debug, Clone, Copy)]
pub struct Telemetry<'a> {
    pub status: &'a str,
    pub state_vector: &'a str,
    /// Tracking-angle record; the reference look angle is used without it.
    pub tracking: Option<&'a str>,
}

/// Parses the status and state vector telemetry and propagates the vector to
/// `now`.
pub fn computed_snapshot<Tz: TimeZone>(telemetry: &Telemetry, now: &DateTime<Tz>) -> ComputedSnapshot {
    let status = parse_status(telemetry.status, StatusVariant::Annotated);
    let time = TimeState::at(now).with_server_gmt(status.server_gmt);
    let report = parse_state_vector_lines(telemetry.state_vector, time.local_gmt);

    let look_angle = telemetry
        .tracking
        .map(parse_tracking)
        .unwrap_or_else(reference_look_angle);

    ComputedSnapshot {
        look_angle,
        info: status.info,
        attitude: status.attitude,
        compute: report.state.as_ref().map(|state| compute(state, &time)),
        state_vector: report.state,
        keplerian: report.elements,
    }
}

/// Parses the status and state vector telemetry as received.
pub fn raw_snapshot<Tz: TimeZone>(telemetry: &Telemetry, now: &DateTime<Tz>) -> RawSnapshot {
    let status = parse_status(telemetry.status, StatusVariant::Raw);
    let time = TimeState::at(now).with_server_gmt(status.server_gmt);
    let report = parse_state_vector_blob(telemetry.state_vector, time.local_gmt);

    RawSnapshot {
        info: status.info,
        attitude: status.attitude,
        state_vector: report.state,
        keplerian: report.elements,
    }
}

fn compute(state: &StateVector, time: &TimeState) -> Computed {
    let delta = (time.local_gmt - state.time) * 60.0;

    log::debug!(
        "local GMT {} server GMT {:?} GAST {} state vector time {} delta {} ({})",
        time.local_gmt,
        time.server_gmt,
        time.gast,
        state.time,
        delta,
        std::time::Duration::try_from_secs_f64(delta.abs())
            .map(|d| humantime::format_duration(d).to_string())
            .unwrap_or_else(|_| "n/a".into()),
    );

    let propagated = StateVector {
        time: time.local_gmt,
        ..correct_position(state, delta).unlabeled()
    };

    Computed {
        location: calculate_position(propagated.x, propagated.y, propagated.z, time.gast),
        altitude: altitude(&propagated),
        speed: speed(&propagated),
        propagated_state_vector: propagated,
    }
}
