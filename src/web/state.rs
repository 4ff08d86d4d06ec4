use std::sync::Arc;

use crate::cache::TelemetryCache;

use super::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub cache: Arc<TelemetryCache>,
}
