use super::fields::{fields, float_at, int_at, int_prefix, starts_with_tag};
use super::{Attitude, MissionPhase, VehicleInfo, VEHICLE_TAG};

/// Whether the parsed status carries the descriptive labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusVariant {
    Annotated,
    Raw,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct StatusReport {
    /// GMT in the header line of the status file.
    pub server_gmt: Option<f64>,
    pub info: Option<VehicleInfo>,
    pub attitude: Option<Attitude>,
}

/// Parses a vehicle status file: a header line carrying the server GMT and
/// the first line tagged with the vehicle name.
pub fn parse_status(text: &str, variant: StatusVariant) -> StatusReport {
    let mut lines = text.lines();

    let server_gmt = lines
        .next()
        .map(|header| float_at(&fields(header), 1))
        .filter(|gmt| !gmt.is_nan());

    let Some(line) = text.lines().find(|l| starts_with_tag(l, VEHICLE_TAG)) else {
        log::warn!("status telemetry has no '{}' line", VEHICLE_TAG);
        return StatusReport {
            server_gmt,
            ..Default::default()
        };
    };

    let (info, attitude) = parse_status_line(line, variant);
    StatusReport {
        server_gmt,
        info: Some(info),
        attitude: Some(attitude),
    }
}

fn parse_status_line(line: &str, variant: StatusVariant) -> (VehicleInfo, Attitude) {
    match variant {
        StatusVariant::Annotated => log::info!("Parsing Cartesian vector..."),
        StatusVariant::Raw => log::info!("Parsing Cartesian vector (raw data)..."),
    }

    let fields = fields(line);
    let annotated = variant == StatusVariant::Annotated;
    let label = |text: &str| annotated.then(|| text.to_string());

    let temperature_f = float_at(&fields, 5);
    let info = VehicleInfo {
        description: label("International Space Station"),
        kind: label("Space Station"),
        signal: fields
            .get(1)
            .and_then(|flag| int_prefix(flag, 2))
            .is_some_and(|flag| flag == 1),
        temperature_f,
        temperature_c: (5.0 / 9.0) * (temperature_f - 32.0),
        humidity: float_at(&fields, 6),
        air_pressure: float_at(&fields, 7),
        phase: MissionPhase::from_code(int_at(&fields, 8)),
    };

    let attitude = Attitude {
        description: label("Flight Dynamics"),
        kind: label("Orientation"),
        roll: float_at(&fields, 2),
        pitch: float_at(&fields, 3),
        yaw: float_at(&fields, 4),
    };

    (info, attitude)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const STATUS: &str = "GMT 292.5 2026\nISS 1 2.0 1.0 0.5 70.0 45 14.5 201\n";

    #[test]
    fn annotated_status_line() {
        let report = parse_status(STATUS, StatusVariant::Annotated);
        assert_eq!(report.server_gmt, Some(292.5));

        let info = report.info.unwrap();
        assert!(info.signal);
        assert_relative_eq!(info.temperature_f, 70.0);
        assert_relative_eq!(info.temperature_c, 21.111, epsilon = 1e-3);
        assert_relative_eq!(info.humidity, 45.0);
        assert_relative_eq!(info.air_pressure, 14.5);
        assert_eq!(info.phase, MissionPhase::OrbitCoast);
        assert_eq!(info.description.as_deref(), Some("International Space Station"));

        let attitude = report.attitude.unwrap();
        assert_relative_eq!(attitude.roll, 2.0);
        assert_relative_eq!(attitude.pitch, 1.0);
        assert_relative_eq!(attitude.yaw, 0.5);
        assert_eq!(attitude.kind.as_deref(), Some("Orientation"));
    }

    #[test]
    fn raw_status_has_no_labels() {
        let report = parse_status(STATUS, StatusVariant::Raw);
        let info = report.info.unwrap();
        assert_eq!(info.description, None);
        assert_eq!(info.kind, None);
        assert_eq!(report.attitude.unwrap().description, None);
    }

    #[test]
    fn bad_fields_do_not_abort_the_record() {
        let report = parse_status(
            "GMT x\niss 0 2.0 nope 0.5 hot 45 14.5 phase\n",
            StatusVariant::Raw,
        );
        assert_eq!(report.server_gmt, None);

        let info = report.info.unwrap();
        assert!(!info.signal);
        assert!(info.temperature_f.is_nan());
        assert!(info.temperature_c.is_nan());
        assert_eq!(info.phase, MissionPhase::OnOrbit);
        assert!(report.attitude.unwrap().pitch.is_nan());
    }

    #[test]
    fn missing_status_line_leaves_sections_empty() {
        let report = parse_status("GMT 10.0\nnothing here\n", StatusVariant::Annotated);
        assert_eq!(report.server_gmt, Some(10.0));
        assert!(report.info.is_none());
        assert!(report.attitude.is_none());
    }
}
