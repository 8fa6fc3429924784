/// Common test utilities and fixtures
use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::Value;
use std::sync::Arc;
use study_playback::PlayerOptions;
use study_server::{api, state::AppState};
use study_storage::MemoryStorage;
use tower::util::ServiceExt;

/// Router over fresh in-memory storage and default player options
pub fn create_test_app() -> Router {
    let storage = Arc::new(MemoryStorage::new());
    api::router(AppState::new(storage, PlayerOptions::default()))
}

/// Send a request with an optional JSON body, returning status and parsed body
///
/// Empty bodies come back as `Value::Null`.
pub async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app.clone().oneshot(builder.body(body).unwrap()).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

pub mod fixtures {
    use serde_json::{json, Value};

    pub fn goal(text: &str, order: i32) -> Value {
        json!({ "text": text, "order": order })
    }

    pub fn session(duration: i32) -> Value {
        json!({ "duration": duration, "background": "library", "soundscape": "rain" })
    }
}
