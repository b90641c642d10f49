//! Error responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use cajachica_core::BookkeepingError;
use cajachica_shared::AppError;
use serde_json::json;

/// Handler error, rendered as `{"error": message}` with the matching status.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl From<BookkeepingError> for ApiError {
    fn from(err: BookkeepingError) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status.is_server_error() {
            tracing::error!(code = self.0.error_code(), error = %self.0, "Request failed");
        } else {
            tracing::debug!(code = self.0.error_code(), error = %self.0, "Request rejected");
        }

        (status, Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}
