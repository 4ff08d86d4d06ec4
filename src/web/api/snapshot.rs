use axum::{
    extract::{Path, State},
    http::HeaderName,
    response::IntoResponse,
    Json,
};
use chrono::Local;

use crate::cache::TelemetryKind;
use crate::snapshot::{computed_snapshot, raw_snapshot, ComputedSnapshot, RawSnapshot, Telemetry};

use super::error::{ApiError, ApiResult, ErrorResponse};
use crate::web::state::AppState;

const SOURCE_PROTOCOL: &str = "ISP (Information Sharing Protocol)";
const SOURCE_ORIGIN: &str = "Mission Control Center";

fn source_headers() -> [(HeaderName, &'static str); 2] {
    [
        (HeaderName::from_static("data-source-protocol"), SOURCE_PROTOCOL),
        (HeaderName::from_static("data-origin"), SOURCE_ORIGIN),
    ]
}

/// Time-corrected snapshot: status, propagated position and look angle.
#[utoipa::path(
    get,
    path = "/nasa/all",
    tag = "nasa",
    responses(
        (status = 200, description = "Snapshot propagated to the current time", body = ComputedSnapshot),
        (status = 503, description = "Telemetry not cached yet", body = ErrorResponse),
        (status = 500, description = "Telemetry cache unreadable", body = ErrorResponse),
    )
)]
pub async fn all(State(state): State<AppState>) -> ApiResult<impl IntoResponse> {
    let status = state.cache.read(TelemetryKind::Status)?;
    let state_vector = state.cache.read(TelemetryKind::StateVector)?;
    let tracking = if state.config.cache.use_tracking_file {
        state.cache.read_optional(TelemetryKind::Tracking)?
    } else {
        None
    };

    let telemetry = Telemetry {
        status: &status,
        state_vector: &state_vector,
        tracking: tracking.as_deref(),
    };
    let snapshot = computed_snapshot(&telemetry, &Local::now());

    Ok((source_headers(), Json(snapshot)))
}

/// Parsed telemetry without propagation.
#[utoipa::path(
    get,
    path = "/nasa/statevector",
    tag = "nasa",
    responses(
        (status = 200, description = "Telemetry as last published", body = RawSnapshot),
        (status = 503, description = "Telemetry not cached yet", body = ErrorResponse),
        (status = 500, description = "Telemetry cache unreadable", body = ErrorResponse),
    )
)]
pub async fn statevector(State(state): State<AppState>) -> ApiResult<impl IntoResponse> {
    let status = state.cache.read(TelemetryKind::Status)?;
    let state_vector = state.cache.read(TelemetryKind::StateVector)?;

    let telemetry = Telemetry {
        status: &status,
        state_vector: &state_vector,
        tracking: None,
    };
    let snapshot = raw_snapshot(&telemetry, &Local::now());

    Ok((source_headers(), Json(snapshot)))
}

#[utoipa::path(
    get,
    path = "/nasa/{datatype}",
    tag = "nasa",
    params(("datatype" = String, Path, description = "Requested data type")),
    responses(
        (status = 400, description = "Unknown data type", body = ErrorResponse),
    )
)]
pub async fn unknown(Path(datatype): Path<String>) -> ApiError {
    ApiError::UnknownDataType(datatype)
}
