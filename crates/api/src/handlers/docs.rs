//! Serves the machine-readable API description.

use axum::http::header::CONTENT_TYPE;
use axum::response::IntoResponse;

/// The OpenAPI description, embedded at compile time.
const OPENAPI_SPEC: &str = include_str!("../../openapi.json");

/// GET /apispec.json -- the OpenAPI document for this service.
pub async fn apispec() -> impl IntoResponse {
    ([(CONTENT_TYPE, "application/json")], OPENAPI_SPEC)
}
