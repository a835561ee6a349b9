use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Handler error: any failure that reaches the HTTP boundary.
///
/// Rendered as `500 {"detail": "<error text>"}`.
#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct ApiError(#[from] pub crate::Error);

pub type ApiResult<T> = Result<T, ApiError>;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let detail = self.0.to_string();
        tracing::error!(error = %detail, "Request failed");

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            axum::Json(json!({ "detail": detail })),
        )
            .into_response()
    }
}
