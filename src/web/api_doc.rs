use axum::Json;
use utoipa::OpenApi;

use super::api::error::ErrorResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        super::api::snapshot::all,
        super::api::snapshot::statevector,
        super::api::snapshot::unknown,
    ),
    components(
        schemas(
            ErrorResponse,
            crate::snapshot::ComputedSnapshot,
            crate::snapshot::RawSnapshot,
        )
    ),
    info(
        title = "ISS-O-Mat Telemetry API",
        description = "ISS telemetry snapshots propagated to the time of the request",
        version = "0.1.0"
    ),
    tags(
        (name = "nasa", description = "Vehicle telemetry")
    )
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
