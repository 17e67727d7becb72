//! Shared test helpers for API integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;
use visceraverse_core::clock::Clock;
use visceraverse_generation::service::{
    LlmScenarioGenerator, PredefinedScenarioGenerator, ScenarioGenerator,
};
use visceraverse_test_support::{FixedClock, ScriptedLlmClient};

use visceraverse_api::routes;
use visceraverse_api::state::AppState;

/// Fixed timestamp used across all integration tests.
fn fixed_clock() -> Arc<dyn Clock + Send + Sync> {
    Arc::new(FixedClock(
        chrono::TimeZone::with_ymd_and_hms(&chrono::Utc, 2026, 1, 15, 10, 0, 0).unwrap(),
    ))
}

/// Build the full app router with the predefined generator and a fixed
/// clock. Uses the same route structure as `main.rs`. The router is cheap
/// to clone and all clones share the same session and scene.
pub fn build_test_app() -> Router {
    build_test_app_with(Arc::new(PredefinedScenarioGenerator))
}

/// Build the full app router around a custom generation service.
pub fn build_test_app_with(generator: Arc<dyn ScenarioGenerator>) -> Router {
    let app_state = AppState::new(generator, fixed_clock());

    Router::new()
        .merge(routes::health::router())
        .nest("/api/v1/scenario", routes::scenario::router())
        .nest("/api/v1/session", routes::session::router())
        .nest("/api/v1/scene", routes::scene::router())
        .with_state(app_state)
}

/// Build the full app router with a scripted generative backend.
pub fn build_test_app_with_backend(client: ScriptedLlmClient) -> Router {
    build_test_app_with(Arc::new(LlmScenarioGenerator::new(Arc::new(client))))
}

/// Send a POST request with a JSON body and return the response.
pub async fn post_json(
    app: Router,
    uri: &str,
    body: &serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap();

    send(app, request).await
}

/// Send a POST request without a body and return the response.
pub async fn post_empty(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    send(app, request).await
}

/// Send a GET request and return the response.
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    send(app, request).await
}

/// Send a DELETE request and return the response.
pub async fn delete_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    send(app, request).await
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}
