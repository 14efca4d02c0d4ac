use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// The approval service could not be reached (network/HTTP failure).
    /// The tracker recovers from this locally — logged, flag retained.
    #[error("approval lookup failed: {0}")]
    ApprovalTransport(String),

    /// The approval service answered with a payload we cannot decode.
    /// Recovered the same way as a transport failure.
    #[error("approval lookup returned malformed payload: {0}")]
    ApprovalMalformed(String),

    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_type, code, msg) = match &self {
            AppError::ApprovalTransport(e) => (
                StatusCode::BAD_GATEWAY,
                "upstream_error",
                "approval_lookup_failed",
                e.clone(),
            ),
            AppError::ApprovalMalformed(e) => (
                StatusCode::BAD_GATEWAY,
                "upstream_error",
                "approval_payload_malformed",
                e.clone(),
            ),
            AppError::Internal(e) => {
                tracing::error!("Internal error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "internal_server_error",
                    "internal server error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "message": msg,
                "type": error_type,
                "code": code,
            }
        }));

        (status, body).into_response()
    }
}
