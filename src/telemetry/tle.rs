use std::f64::consts::PI;

use super::fields::{column, float, int_prefix, starts_with_tag};
use super::{Designator, KeplerianElements, VEHICLE_TAG};
use crate::time::julian_date_of_year;

const MINUTES_PER_DAY: f64 = 1440.0;

const DESCRIPTION: &str = "Keplarian elements";
const KIND: &str = "epoch time (0), drag (float), inclination (rad), right ascension (longitude), perigee (rad), eccentricity (float), mean anomaly (rad), mean motion (float)";

/// Finds the last `tag / line 1 / line 2` triple in a telemetry blob and
/// decodes it.
pub fn scan_two_line_elements(text: &str) -> Option<KeplerianElements> {
    let lines: Vec<&str> = text.lines().collect();

    lines
        .windows(3)
        .filter(|w| {
            starts_with_tag(w[0], VEHICLE_TAG) && w[1].starts_with('1') && w[2].starts_with('2')
        })
        .last()
        .map(|w| parse_two_line_element(w[1], w[2]))
}

/// Decodes a NORAD two-line element set by fixed columns.
pub fn parse_two_line_element(line1: &str, line2: &str) -> KeplerianElements {
    log::info!("Parsing Two-Line-Element set...");

    let epoch_year = int_prefix(column(line1, 18, 20), 10).map(|yy| full_year(yy as i32));
    let epoch = float(column(line1, 20, 32));
    let julian_epoch = epoch_year.map_or(f64::NAN, |year| julian_date_of_year(year) + epoch);

    KeplerianElements {
        description: DESCRIPTION,
        kind: KIND,
        satellite: int_prefix(column(line1, 2, 7), 10),
        classification: column(line1, 7, 8).to_string(),
        designator: Designator {
            launch_year: column(line1, 9, 11).to_string(),
            launch_number: int_prefix(column(line1, 11, 14), 10),
            launch_piece: column(line1, 14, 17).trim().to_string(),
        },
        epoch_year,
        epoch,
        epoch_first_derivative: float(column(line1, 33, 43)),
        epoch_second_derivative: implied_exponent(column(line1, 44, 50), column(line1, 50, 52)),
        drag: implied_exponent(column(line1, 53, 59), column(line1, 59, 61)),
        inclination: float(column(line2, 8, 16)).to_radians(),
        right_ascension: float(column(line2, 17, 25)).to_radians(),
        eccentricity: float(column(line2, 26, 33)) * 1e-7,
        perigee: float(column(line2, 34, 42)).to_radians(),
        mean_anomaly: float(column(line2, 43, 51)).to_radians(),
        mean_motion: float(column(line2, 52, 63)) * (2.0 * PI) / MINUTES_PER_DAY,
        julian_epoch,
    }
}

/// Two-digit TLE year: 57 and later are 19xx, earlier ones 20xx.
pub fn full_year(two_digit: i32) -> i32 {
    if two_digit < 57 {
        two_digit + 2000
    } else {
        two_digit + 1900
    }
}

/// `" 12345-4"` style field: a five digit mantissa with an assumed leading
/// decimal point and a power of ten exponent.
fn implied_exponent(mantissa: &str, exponent: &str) -> f64 {
    let exponent = int_prefix(exponent, 10).map_or(f64::NAN, |e| e as f64);
    float(mantissa) * 10f64.powf(exponent - 5.0)
}
