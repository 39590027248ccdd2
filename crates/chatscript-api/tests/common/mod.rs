//! Shared test helpers for API integration tests.
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use chatscript_api::adapters::InMemorySessionStore;
use chatscript_api::routes;
use chatscript_api::state::AppState;
use chatscript_core::clock::Clock;
use chatscript_core::event::EventSink;
use chatscript_core::presentation::PresentationConfig;
use chatscript_core::rng::DeterministicRng;
use chatscript_core::user::StaticDirectory;
use chatscript_test_support::{FixedClock, MockRng, RecordingEventSink};

/// Fixed timestamp used across all integration tests.
fn fixed_clock() -> Arc<dyn Clock> {
    Arc::new(FixedClock(
        chrono::TimeZone::with_ymd_and_hms(&chrono::Utc, 2026, 1, 15, 10, 0, 0).unwrap(),
    ))
}

/// Build shared application state with an in-memory store and a
/// recording event sink, so state persists across requests within one
/// test.
pub fn test_state(script: &str) -> (AppState, Arc<RecordingEventSink>) {
    let events = Arc::new(RecordingEventSink::new());
    let rng: Arc<Mutex<dyn DeterministicRng + Send>> = Arc::new(Mutex::new(MockRng));
    let state = AppState::new(
        Arc::from(script),
        Arc::new(InMemorySessionStore::new()),
        Arc::new(StaticDirectory(Some("John Doe".to_owned()))),
        events.clone() as Arc<dyn EventSink>,
        fixed_clock(),
        rng,
        Arc::new(PresentationConfig::default()),
    );
    (state, events)
}

/// Build the full app router around the given state. Uses the same
/// route structure as `main.rs`.
pub fn build_app(state: AppState) -> Router {
    Router::new()
        .merge(routes::health::router())
        .nest("/api/v1/script", routes::script::router())
        .nest("/api/v1/chat", routes::session::router())
        .with_state(state)
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

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

/// Send a GET request and return the response.
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}
