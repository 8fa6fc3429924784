/// Goals API routes
use crate::{
    error::{Result, ServerError},
    state::AppState,
};
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use study_core::{Goal, GoalId, GoalPatch, NewGoal};

const INVALID_GOAL: &str = "Invalid goal data";
const GOAL_NOT_FOUND: &str = "Goal not found";

/// GET /api/goals
/// All goals in display order
pub async fn list_goals(State(app_state): State<AppState>) -> Result<Json<Vec<Goal>>> {
    let goals = app_state.storage.get_goals().await?;
    Ok(Json(goals))
}

/// GET /api/goals/:id
pub async fn get_goal(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
) -> Result<Json<Goal>> {
    let goal = app_state
        .storage
        .get_goal(&GoalId::new(id))
        .await?
        .ok_or_else(|| ServerError::NotFound(GOAL_NOT_FOUND.to_string()))?;

    Ok(Json(goal))
}

/// POST /api/goals
/// Create a goal; 400 with details when the body is malformed or the text is blank
pub async fn create_goal(
    State(app_state): State<AppState>,
    payload: std::result::Result<Json<NewGoal>, JsonRejection>,
) -> Result<(StatusCode, Json<Goal>)> {
    let Json(new_goal) = payload.map_err(|e| ServerError::invalid(INVALID_GOAL, e.body_text()))?;
    new_goal
        .validate()
        .map_err(|e| ServerError::invalid(INVALID_GOAL, e.to_string()))?;

    let goal = app_state.storage.create_goal(new_goal).await?;
    Ok((StatusCode::CREATED, Json(goal)))
}

/// PATCH /api/goals/:id
/// Merge a partial update; the id itself is never changed
pub async fn update_goal(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
    payload: std::result::Result<Json<GoalPatch>, JsonRejection>,
) -> Result<Json<Goal>> {
    let Json(patch) = payload.map_err(|e| ServerError::invalid(INVALID_GOAL, e.body_text()))?;
    patch
        .validate()
        .map_err(|e| ServerError::invalid(INVALID_GOAL, e.to_string()))?;

    let goal = app_state
        .storage
        .update_goal(&GoalId::new(id), patch)
        .await?
        .ok_or_else(|| ServerError::NotFound(GOAL_NOT_FOUND.to_string()))?;

    Ok(Json(goal))
}

/// DELETE /api/goals/:id
pub async fn delete_goal(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
) -> Result<StatusCode> {
    if app_state.storage.delete_goal(&GoalId::new(id)).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ServerError::NotFound(GOAL_NOT_FOUND.to_string()))
    }
}
