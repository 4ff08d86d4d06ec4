mod derived;
mod geodetic;
mod kepler;

pub use derived::{altitude, speed, Altitude, Speed};
pub use geodetic::{calculate_position, Location};
pub use kepler::correct_position;
