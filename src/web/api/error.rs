use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::cache::CacheError;

pub enum ApiError {
    UnknownDataType(String),
    Cache(CacheError),
}

impl From<CacheError> for ApiError {
    fn from(e: CacheError) -> Self {
        ApiError::Cache(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::UnknownDataType(name) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::with_message(
                    "syntax_error",
                    &format!("unknown data type '{}'", name),
                )),
            )
                .into_response(),
            ApiError::Cache(e @ CacheError::NotFound(_)) => {
                log::warn!("{}", e);
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    Json(ErrorResponse::with_message(
                        "telemetry_unavailable",
                        &e.to_string(),
                    )),
                )
                    .into_response()
            }
            ApiError::Cache(e) => {
                log::error!("{}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse::with_message("cache_error", &e.to_string())),
                )
                    .into_response()
            }
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ErrorResponse {
    pub fn with_message(error: &str, message: &str) -> Self {
        ErrorResponse {
            error: error.to_string(),
            message: Some(message.to_string()),
        }
    }
}
