use chrono::{DateTime, Datelike, Offset, TimeZone, Utc};

use super::gast;

const MILLIS_PER_HOUR: f64 = 3_600_000.0;

/// Time values shared by one snapshot computation.
///
/// Built once at the start of every top-level operation and passed down
/// explicitly, so concurrent requests never observe each other's clock.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeState {
    /// Hours since the start of the local year, expressed in GMT and biased by
    /// one day.
    pub local_gmt: f64,
    /// GMT reported by the telemetry source in the status file, if any.
    pub server_gmt: Option<f64>,
    /// Greenwich apparent sidereal time for `local_gmt`, radians.
    pub gast: f64,
}

impl TimeState {
    pub fn at<Tz: TimeZone>(now: &DateTime<Tz>) -> Self {
        let local_gmt = local_gmt(now);
        Self {
            local_gmt,
            server_gmt: None,
            gast: gast(local_gmt / 24.0),
        }
    }

    pub fn with_server_gmt(self, server_gmt: Option<f64>) -> Self {
        Self { server_gmt, ..self }
    }
}

/// Hours elapsed since local midnight of January 1st, shifted into GMT by the
/// zone's offset at the start of the year, plus 24.
///
/// The one-day bias keeps `local_gmt - telemetry time` non-negative for
/// telemetry stamped on the previous day.
pub fn local_gmt<Tz: TimeZone>(now: &DateTime<Tz>) -> f64 {
    let zone = now.timezone();
    let start_of_year = zone
        .with_ymd_and_hms(now.year(), 1, 1, 0, 0, 0)
        .earliest()
        .map(|start| {
            (
                start.timestamp_millis(),
                start.offset().fix().local_minus_utc(),
            )
        });

    let (start_millis, local_minus_utc) = match start_of_year {
        Some(start) => start,
        None => {
            log::warn!("local start of year {} does not exist, using UTC", now.year());
            let start = Utc
                .with_ymd_and_hms(now.year(), 1, 1, 0, 0, 0)
                .single()
                .map(|s| s.timestamp_millis())
                .unwrap_or_default();
            (start, 0)
        }
    };

    let elapsed_hours = (now.timestamp_millis() - start_millis) as f64 / MILLIS_PER_HOUR;
    let offset_hours = -f64::from(local_minus_utc) / 3600.0;

    elapsed_hours + offset_hours + 24.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::FixedOffset;

    #[test]
    fn local_gmt_in_utc_counts_hours_of_year() {
        let now = Utc.with_ymd_and_hms(2026, 1, 1, 6, 0, 0).unwrap();
        assert_relative_eq!(local_gmt(&now), 30.0);

        let now = Utc.with_ymd_and_hms(2026, 1, 3, 12, 30, 0).unwrap();
        assert_relative_eq!(local_gmt(&now), 2.0 * 24.0 + 12.5 + 24.0);
    }

    #[test]
    fn local_gmt_is_independent_of_zone() {
        let utc = Utc.with_ymd_and_hms(2026, 3, 14, 9, 15, 0).unwrap();
        let east = utc.with_timezone(&FixedOffset::east_opt(2 * 3600).unwrap());
        let west = utc.with_timezone(&FixedOffset::west_opt(7 * 3600).unwrap());

        assert_relative_eq!(local_gmt(&east), local_gmt(&utc), epsilon = 1e-9);
        assert_relative_eq!(local_gmt(&west), local_gmt(&utc), epsilon = 1e-9);
    }

    #[test]
    fn time_state_derives_gast_from_local_gmt() {
        let now = Utc.with_ymd_and_hms(2026, 7, 4, 18, 0, 0).unwrap();
        let state = TimeState::at(&now);

        assert_relative_eq!(state.gast, gast(state.local_gmt / 24.0));
        assert_eq!(state.server_gmt, None);
        assert_eq!(state.with_server_gmt(Some(12.5)).server_gmt, Some(12.5));
    }
}
