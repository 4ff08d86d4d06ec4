use std::f64::consts::PI;

use super::{DAYS_PER_JULIAN_CENTURY, JD_1900, JD_2000, SECONDS_PER_DAY};

/// Radians of rotation per second of sidereal time.
const RADIANS_PER_SIDEREAL_SECOND: f64 = 7.272_205_216_643_039_903_848_712e-5;

/// Periodic range reduction of `value` into `[min, max)`.
pub fn reduce(value: f64, min: f64, max: f64) -> f64 {
    let period = max - min;
    let mut reduced = value + ((max - value) / period).floor() * period;
    if reduced >= max {
        reduced -= period;
    }
    reduced
}

/// Greenwich Apparent Sidereal Time in radians, `[0, 2π)`.
///
/// `days` is a day count whose integer part selects the 0h epoch and whose
/// fractional part is the elapsed fraction of that day.
pub fn gast(days: f64) -> f64 {
    let fraction = days - days.trunc();
    let epoch = (days + JD_1900) - 0.5 - fraction;
    let t = (epoch - JD_2000) / DAYS_PER_JULIAN_CENTURY;

    // 0h Greenwich mean sidereal time, seconds
    let gmst = 24110.54841 + 8640184.812866 * t + 0.093104 * t * t - 6.2e-6 * t * t * t;
    let rate = 1.002_737_909_350_795 + 5.9006e-11 * t - 5.9e-15 * t * t;

    let seconds = gmst + rate * fraction * SECONDS_PER_DAY;
    reduce(seconds * RADIANS_PER_SIDEREAL_SECOND, 0.0, 2.0 * PI)
}

/// Julian Date of day zero of the given Gregorian year, so that adding a
/// one-based day-of-year yields the date itself.
pub fn julian_date_of_year(year: i32) -> f64 {
    let year = f64::from(year - 1);
    let a = (year / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();
    (365.25 * year).floor() + 428.0 + 1720994.5 + b
}
