mod sidereal;
mod state;

pub use sidereal::{gast, julian_date_of_year, reduce};
pub use state::TimeState;

pub const SECONDS_PER_DAY: f64 = 86400.0;
pub const DAYS_PER_JULIAN_CENTURY: f64 = 36525.0;
/// Julian Date of 1899-12-31 12:00, the origin of the day count fed to [`gast`].
pub const JD_1900: f64 = 2415020.0;
/// Julian Date of the J2000.0 reference epoch.
pub const JD_2000: f64 = 2451545.0;
