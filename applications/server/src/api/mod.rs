/// API route modules
pub mod catalog;
pub mod goals;
pub mod health;
pub mod sessions;

use crate::state::AppState;
use axum::{
    routing::{get, patch},
    Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};

/// Build the full application router under `/api`
pub fn router(app_state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/health", get(health::health))
        .route("/catalog", get(catalog::get_catalog))
        // Goals
        .route("/goals", get(goals::list_goals).post(goals::create_goal))
        .route(
            "/goals/:id",
            patch(goals::update_goal)
                .get(goals::get_goal)
                .delete(goals::delete_goal),
        )
        // Study sessions
        .route(
            "/sessions",
            get(sessions::list_sessions).post(sessions::create_session),
        );

    Router::new()
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::default()))
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}
