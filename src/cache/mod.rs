mod error;

pub use error::CacheError;

use std::path::PathBuf;

use strum_macros::{Display, IntoStaticStr};

/// Telemetry files kept in the cache folder, named as the source publishes
/// them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, IntoStaticStr)]
pub enum TelemetryKind {
    #[strum(serialize = "veh.rndz")]
    Tracking,
    #[strum(serialize = "veh.data")]
    Status,
    #[strum(serialize = "veh.sv")]
    StateVector,
}

/// Read side of the telemetry cache. Whatever fetches the files keeps them
/// current; every read returns the file as it is on disk now.
pub struct TelemetryCache {
    folder: PathBuf,
}

impl TelemetryCache {
    pub fn new(folder: PathBuf) -> Self {
        Self { folder }
    }

    fn path(&self, kind: TelemetryKind) -> PathBuf {
        let name: &'static str = kind.into();
        self.folder.join(name)
    }

    pub fn read(&self, kind: TelemetryKind) -> Result<String, CacheError> {
        let path = self.path(kind);

        if !path.exists() {
            return Err(CacheError::NotFound(path.display().to_string()));
        }

        log::debug!("Reading {} from {}", kind, path.display());
        Ok(std::fs::read_to_string(path)?)
    }

    /// Like [`read`](Self::read), but a missing file is `None`.
    pub fn read_optional(&self, kind: TelemetryKind) -> Result<Option<String>, CacheError> {
        match self.read(kind) {
            Ok(text) => Ok(Some(text)),
            Err(CacheError::NotFound(path)) => {
                log::debug!("No cached {} at {}", kind, path);
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }
}
