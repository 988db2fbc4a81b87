//! HTTP route table.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{analysis, docs, home, screening};
use crate::state::AppState;

/// Build the application route tree.
///
/// ```text
/// GET  /                   service status and uptime
/// GET  /apispec.json       OpenAPI description
/// POST /check_health       quick screening, five-field set
/// POST /check_health_quad  quick screening, ten-field set
/// POST /analyze            robust analysis, five-field set
/// POST /report             robust analysis, ten-field set
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(home::home))
        .route("/apispec.json", get(docs::apispec))
        .route("/check_health", post(screening::check_health))
        .route("/check_health_quad", post(screening::check_health_quad))
        .route("/analyze", post(analysis::analyze))
        .route("/report", post(analysis::report))
}
