pub mod error;
pub mod snapshot;
