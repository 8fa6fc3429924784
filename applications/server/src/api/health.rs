/// Health check API routes
use crate::state::AppState;
use axum::{extract::State, Json};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// "ok", or "degraded" when storage cannot be read
    pub status: &'static str,
    pub version: &'static str,
    pub goals: Option<usize>,
    pub sessions: Option<usize>,
}

/// GET /api/health - Health check endpoint
pub async fn health(State(app_state): State<AppState>) -> Json<HealthResponse> {
    let goals = app_state.storage.get_goals().await.ok().map(|g| g.len());
    let sessions = app_state.storage.get_sessions().await.ok().map(|s| s.len());

    let status = if goals.is_some() && sessions.is_some() {
        "ok"
    } else {
        "degraded"
    };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        goals,
        sessions,
    })
}
