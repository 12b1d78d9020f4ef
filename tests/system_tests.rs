//! Integration tests for System API endpoints.
//!
//! Tests liveness, readiness, status and metrics exposition.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use reelbox::config::Config;
use tower::ServiceExt;

async fn spawn_app() -> Router {
    let mut config = Config::default();
    config.general.database_path = "sqlite::memory:".to_string();

    let state = reelbox::api::create_app_state_from_config(config, None)
        .await
        .expect("Failed to create app state");

    reelbox::api::router(state)
}

async fn get_json(app: &Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_health_live() {
    let app = spawn_app().await;

    let (status, body_json) = get_json(&app, "/api/system/health/live").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body_json["success"].as_bool().unwrap_or(false));
    assert_eq!(body_json["data"]["status"], "alive");
}

#[tokio::test]
async fn test_health_ready() {
    let app = spawn_app().await;

    let (status, body_json) = get_json(&app, "/api/system/health/ready").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body_json["success"].as_bool().unwrap_or(false));
    assert_eq!(body_json["data"]["ready"], true);
    assert_eq!(body_json["data"]["checks"]["database"], true);
}

#[tokio::test]
async fn test_get_status_counts_movies() {
    let app = spawn_app().await;

    let (status, body_json) = get_json(&app, "/api/system/status").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body_json["success"].as_bool().unwrap());

    let data = body_json["data"].as_object().unwrap();
    assert_eq!(data["version"], env!("CARGO_PKG_VERSION"));
    assert!(data.get("uptime").is_some());
    assert_eq!(data["movie_count"], 0);

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/movies")
                .header("Content-Type", "application/json")
                .body(Body::from(r#"{"title":"Alien","releaseYear":1979}"#))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let (_, body_json) = get_json(&app, "/api/system/status").await;
    assert_eq!(body_json["data"]["movie_count"], 1);
}

#[tokio::test]
async fn test_metrics_without_recorder() {
    let app = spawn_app().await;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/metrics")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let text = String::from_utf8(body.to_vec()).unwrap();
    assert!(text.contains("not enabled"));
}

#[tokio::test]
async fn test_unknown_route_passes_through_request_tracking() {
    let app = spawn_app().await;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/not-a-route")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
