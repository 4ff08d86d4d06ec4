use super::fields::{fields, float_at};
use super::LookAngle;

const DESCRIPTION: &str = "Air Force Satellite Control Network, frame of reference";
const KIND: &str = "Metric data";

/// Range, rate, azimuth and elevation from a tracking-angle record.
pub fn parse_tracking(text: &str) -> LookAngle {
    let fields = fields(text);
    look_angle(
        float_at(&fields, 0),
        float_at(&fields, 1),
        float_at(&fields, 2),
        float_at(&fields, 3),
    )
}

/// Fixed look angle reported when no tracking file is read.
pub fn reference_look_angle() -> LookAngle {
    look_angle(774.6, 1.03, -2.09, -19.97)
}

fn look_angle(range: f64, rate: f64, azimuth: f64, elevation: f64) -> LookAngle {
    LookAngle {
        description: DESCRIPTION.to_string(),
        kind: KIND.to_string(),
        range,
        rate,
        azimuth,
        elevation,
    }
}
