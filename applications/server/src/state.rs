/// Shared application state
use study_core::StudyStorage;
use study_playback::PlayerOptions;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub storage: Arc<dyn StudyStorage>,
    /// Player defaults advertised through the catalog
    pub playback: PlayerOptions,
}

impl AppState {
    pub fn new(storage: Arc<dyn StudyStorage>, playback: PlayerOptions) -> Self {
        Self { storage, playback }
    }
}
