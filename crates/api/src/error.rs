use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use vitals_core::error::CoreError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent `{"error": ...}`
/// JSON bodies.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `vitals_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// The request body could not be parsed on an analysis endpoint.
    #[error("Unsupported Media Type")]
    UnsupportedMediaType,

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            // --- CoreError variants (screening path) ---
            AppError::Core(core) => match core {
                CoreError::MissingField { field, .. } => (
                    StatusCode::BAD_REQUEST,
                    format!("Missing required field: '{field}'"),
                ),
                CoreError::EmptyBatch | CoreError::EmptyThresholds => (
                    StatusCode::BAD_REQUEST,
                    "Missing 'data_list' or 'thresholds' in request".to_string(),
                ),
                CoreError::MissingThreshold(key) => {
                    tracing::error!(threshold = %key, "Threshold lookup failed");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        format!("Missing threshold '{key}'"),
                    )
                }
            },

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::UnsupportedMediaType => (
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                "Unsupported Media Type".to_string(),
            ),
            AppError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, msg.clone())
            }
        };

        let body = json!({ "error": message });
        (status, axum::Json(body)).into_response()
    }
}
