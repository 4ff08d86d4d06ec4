use super::fields::{fields, float_at, starts_with_tag, FEET_TO_KM};
use super::{scan_two_line_elements, KeplerianElements, StateVector};

/// Lowercase prefix of the Cartesian state lines in the line-oriented form.
const STATE_LINE_TAG: &str = "c";

const DESCRIPTION: &str = "position (ft), velocity (ft/sec)";
const KIND: &str = "Earth-centered inertial (ECI), Cartesian systems of Mean of 1950 (M50)";

#[derive(Debug, Clone, PartialEq, Default)]
pub struct StateVectorReport {
    pub state: Option<StateVector>,
    pub elements: Option<KeplerianElements>,
}

/// Line-oriented state vector file: every line starting with `c` carries
/// position (ft), velocity (ft/s) and the telemetry time from field 1 on. The
/// last such line wins.
pub fn parse_state_vector_lines(text: &str, gmt: f64) -> StateVectorReport {
    let state = text
        .lines()
        .filter(|line| starts_with_tag(line, STATE_LINE_TAG))
        .last()
        .map(|line| StateVector {
            description: Some(DESCRIPTION),
            kind: Some(KIND),
            ..state_from_fields(&fields(line), 1, gmt)
        });

    if state.is_none() {
        log::warn!("state vector telemetry has no Cartesian line");
    }

    StateVectorReport {
        state,
        elements: scan_two_line_elements(text),
    }
}

/// Whole state vector file read as one record, position starting at field 2.
pub fn parse_state_vector_blob(text: &str, gmt: f64) -> StateVectorReport {
    let elements = scan_two_line_elements(text);
    let fields = fields(text);

    StateVectorReport {
        state: Some(state_from_fields(&fields, 2, gmt)),
        elements,
    }
}

fn state_from_fields(fields: &[&str], first: usize, gmt: f64) -> StateVector {
    let km = |offset: usize| float_at(fields, first + offset) * FEET_TO_KM;

    StateVector {
        x: km(0),
        y: km(1),
        z: km(2),
        velocity_x: km(3),
        velocity_y: km(4),
        velocity_z: km(5),
        time: float_at(fields, first + 6),
        gmt,
        ..StateVector::default()
    }
}
