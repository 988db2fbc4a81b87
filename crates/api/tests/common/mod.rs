//! Shared helpers for integration tests.
#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderName, Method, Request, Response, StatusCode};
use axum::Router;
use chrono::Utc;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use vitals_api::config::ServerConfig;
use vitals_api::routes;
use vitals_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5000".to_string()],
        request_timeout_secs: 30,
    }
}

/// Build the full application router with all middleware layers.
///
/// This mirrors the router construction in `main.rs` so integration tests
/// exercise the same middleware stack (CORS, request ID, timeout, tracing,
/// panic recovery) that production uses.
pub fn build_test_app() -> Router {
    let state = AppState {
        config: Arc::new(test_config()),
        started_at: Utc::now(),
    };

    let cors = CorsLayer::new()
        .allow_origin(["http://localhost:5000".parse().unwrap()])
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(3600));

    let request_id_header = HeaderName::from_static("x-request-id");

    Router::new()
        .merge(routes::router())
        .layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(30),
        ))
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .layer(cors)
        .with_state(state)
}

/// Send a GET request to the app.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a POST request with a JSON body.
pub async fn post_json(app: Router, uri: &str, body: &Value) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a POST request with a raw body and content type.
pub async fn post_raw(app: Router, uri: &str, content_type: &str, body: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, content_type)
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Read a response body as JSON.
pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// A healthy single-record ten-field payload matching the default bands
/// in [`quad_thresholds`].
pub fn quad_reading() -> Value {
    json!({
        "temperature_one": 35,
        "temperature_two": 40,
        "vibration_x": 0.2,
        "vibration_y": 0.3,
        "vibration_z": 0.1,
        "magnetic_flux_x": 0.15,
        "magnetic_flux_y": 0.25,
        "magnetic_flux_z": 0.35,
        "ultrasound_one": 45,
        "ultrasound_two": 50
    })
}

/// The full threshold map for the ten-field set.
pub fn quad_thresholds() -> Value {
    json!({
        "temperature_skin_healthy": 30,
        "temperature_skin_warning": 50,
        "temperature_bearing_healthy": 35,
        "temperature_bearing_warning": 55,
        "vibration_X_healthy": 0.1,
        "vibration_X_warning": 0.5,
        "vibration_Y_healthy": 0.1,
        "vibration_Y_warning": 0.5,
        "vibration_Z_healthy": 0.1,
        "vibration_Z_warning": 0.5,
        "magnetic_flux_X_healthy": 0.1,
        "magnetic_flux_X_warning": 0.6,
        "magnetic_flux_Y_healthy": 0.1,
        "magnetic_flux_Y_warning": 0.6,
        "magnetic_flux_Z_healthy": 0.1,
        "magnetic_flux_Z_warning": 0.6,
        "ultrasound_one_healthy": 40,
        "ultrasound_one_warning": 60,
        "ultrasound_two_healthy": 40,
        "ultrasound_two_warning": 60
    })
}

/// A healthy single-record payload for the ten-field endpoints.
pub fn quad_payload() -> Value {
    json!({
        "data_list": [quad_reading()],
        "thresholds": quad_thresholds()
    })
}

/// A healthy payload for the five-field endpoints (the quad payload works
/// there too: extra record keys are ignored, extra thresholds unused).
pub fn duo_payload() -> Value {
    quad_payload()
}
