/// Study session API routes
use crate::{
    error::{Result, ServerError},
    state::AppState,
};
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use study_core::{NewStudySession, StudySession};

const INVALID_SESSION: &str = "Invalid session data";

/// GET /api/sessions
/// Completed sessions, newest first
pub async fn list_sessions(State(app_state): State<AppState>) -> Result<Json<Vec<StudySession>>> {
    let sessions = app_state.storage.get_sessions().await?;
    Ok(Json(sessions))
}

/// POST /api/sessions
/// Record a finished session; the server stamps `completedAt`
pub async fn create_session(
    State(app_state): State<AppState>,
    payload: std::result::Result<Json<NewStudySession>, JsonRejection>,
) -> Result<(StatusCode, Json<StudySession>)> {
    let Json(new_session) =
        payload.map_err(|e| ServerError::invalid(INVALID_SESSION, e.body_text()))?;
    new_session
        .validate()
        .map_err(|e| ServerError::invalid(INVALID_SESSION, e.to_string()))?;

    let session = app_state.storage.create_session(new_session).await?;
    tracing::info!(
        duration = session.duration,
        background = %session.background,
        soundscape = %session.soundscape,
        "Study session recorded"
    );
    Ok((StatusCode::CREATED, Json(session)))
}
