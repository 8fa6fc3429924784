/// Catalog API routes
use crate::state::AppState;
use axum::{extract::State, Json};
use serde::Serialize;
use study_core::catalog::{self, Background, Soundscape};

/// Player settings clients should use for their own reconciler
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerDefaults {
    pub volume: f32,
    pub fade_in_ms: u64,
    pub fade_out_ms: u64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogResponse {
    pub backgrounds: &'static [Background],
    pub soundscapes: &'static [Soundscape],
    pub default_background: &'static str,
    pub silence: &'static str,
    pub player: PlayerDefaults,
}

/// GET /api/catalog
pub async fn get_catalog(State(app_state): State<AppState>) -> Json<CatalogResponse> {
    let options = &app_state.playback;

    Json(CatalogResponse {
        backgrounds: catalog::BACKGROUNDS,
        soundscapes: catalog::SOUNDSCAPES,
        default_background: catalog::default_background().id,
        silence: catalog::SILENCE,
        player: PlayerDefaults {
            volume: options.target_volume(),
            fade_in_ms: options.fade_in_ms,
            fade_out_ms: options.fade_out_ms,
        },
    })
}
