use std::{sync::Arc, time::Duration};

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use pomodoro_timer::{create_router, AppState, TimerController};
use serde_json::Value;
use tower::ServiceExt;

fn app() -> Router {
    let timer = Arc::new(TimerController::default());
    create_router(Arc::new(AppState::new(20525, "127.0.0.1".to_string(), timer)))
}

async fn call(app: &Router, method: Method, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test(start_paused = true)]
async fn status_shows_initial_render() {
    let app = app();
    let (status, body) = call(&app, Method::GET, "/status").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["display"], "25:00");
    assert_eq!(body["timer"]["readout"]["minutes"], "25");
    assert_eq!(body["timer"]["readout"]["seconds"], "00");
    assert_eq!(body["timer"]["run_state"], "paused");
    assert_eq!(body["last_action"], Value::Null);
}

#[tokio::test(start_paused = true)]
async fn start_pause_reset_cycle() {
    let app = app();

    let (status, body) = call(&app, Method::POST, "/start").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "running");

    // Second start must not double the countdown speed
    call(&app, Method::POST, "/start").await;
    tokio::time::sleep(Duration::from_millis(4_500)).await;

    let (_, body) = call(&app, Method::POST, "/pause").await;
    assert_eq!(body["status"], "paused");
    assert_eq!(body["display"], "24:56");

    let (_, body) = call(&app, Method::GET, "/status").await;
    assert_eq!(body["last_action"], "pause");
    assert_eq!(body["timer"]["remaining_seconds"], 1496);

    let (_, body) = call(&app, Method::POST, "/reset").await;
    assert_eq!(body["status"], "paused");
    assert_eq!(body["display"], "25:00");
}

#[tokio::test]
async fn health_reports_ok() {
    let app = app();
    let (status, body) = call(&app, Method::GET, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn controls_reject_get() {
    let app = app();
    let request = Request::builder()
        .uri("/start")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}
