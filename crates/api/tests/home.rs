//! Integration tests for the root status endpoint and the API description.

mod common;

use axum::http::StatusCode;
use common::{body_json, get};

#[tokio::test]
async fn home_reports_status_version_and_uptime() {
    let app = common::build_test_app();
    let response = get(app, "/").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "success");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    assert!(json["message"].is_string());

    let uptime = json["uptime_seconds"]
        .as_i64()
        .expect("uptime_seconds must be an integer");
    assert!(uptime >= 0);
}

#[tokio::test]
async fn apispec_is_served_as_json() {
    let app = common::build_test_app();
    let response = get(app, "/apispec.json").await;

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response
        .headers()
        .get("content-type")
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(content_type.starts_with("application/json"));

    let json = body_json(response).await;
    assert!(json["openapi"].is_string());
    assert!(json["paths"]["/check_health"].is_object());
}
