use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::cache::TelemetryCache;

use super::api::snapshot as snapshot_handlers;
use super::api_doc;
use super::config::Config;
use super::state::AppState;

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/nasa/all", get(snapshot_handlers::all))
        .route("/nasa/statevector", get(snapshot_handlers::statevector))
        .route("/nasa/{datatype}", get(snapshot_handlers::unknown))
        .route("/api-doc/openapi.json", get(api_doc::openapi_json))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run_server(config: Config) -> std::io::Result<()> {
    let bind_addr = config.web.bind.clone();
    let cache = TelemetryCache::new(config.cache.folder.clone());

    if config.cache.use_tracking_file {
        log::info!("Reporting tracking angles from the cache");
    }

    let state = AppState {
        config: Arc::new(config),
        cache: Arc::new(cache),
    };

    let app = router(state);

    log::info!("Starting server on {}", bind_addr);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app).await
}
