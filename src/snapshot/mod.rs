mod pipeline;
mod types;

pub use pipeline::{computed_snapshot, raw_snapshot, Telemetry};
pub use types::{Computed, ComputedSnapshot, RawSnapshot};
