//! Root status endpoint.

use axum::extract::State;
use axum::Json;
use chrono::Utc;
use serde::Serialize;

use crate::state::AppState;

/// Response payload for the root status endpoint.
#[derive(Serialize)]
pub struct HomeResponse {
    pub status: &'static str,
    pub message: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Whole seconds since process start.
    pub uptime_seconds: i64,
}

/// GET / -- service status, version, and uptime.
pub async fn home(State(state): State<AppState>) -> Json<HomeResponse> {
    let uptime_seconds = (Utc::now() - state.started_at).num_seconds();

    Json(HomeResponse {
        status: "success",
        message: "Welcome to the Machine Vitals API",
        version: env!("CARGO_PKG_VERSION"),
        uptime_seconds,
    })
}
