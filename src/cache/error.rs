use thiserror::Error;

#[derive(Debug, Error)]
pub enum CacheError {
    #[error("Telemetry file not found: {0}")]
    NotFound(String),
    #[error("Telemetry file read error: {0}")]
    FileRead(#[from] std::io::Error),
}
