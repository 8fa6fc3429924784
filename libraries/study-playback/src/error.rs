//! Error types for soundscape playback

use std::time::Duration;
use thiserror::Error;

/// Failure reported by an audio element for a single load or play request
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MediaError {
    /// Source could not be decoded
    #[error("decode failed: {0}")]
    Decode(String),

    /// Source could not be fetched
    #[error("network error: {0}")]
    Network(String),

    /// Playback refused, usually an autoplay policy that wants a user gesture
    #[error("not allowed: {0}")]
    NotAllowed(String),

    /// The element dropped the request without answering
    #[error("request aborted")]
    Aborted,

    /// No answer within the configured load timeout
    #[error("timed out after {0:?}")]
    TimedOut(Duration),
}

/// Playback errors surfaced to callers
///
/// None of these are fatal: the player returns to idle and a later
/// `play()` may try again.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlaybackError {
    /// Source failed to load
    #[error("Failed to load audio {url}: {source}")]
    Load {
        url: String,
        #[source]
        source: MediaError,
    },

    /// The element refused to start playing
    #[error("Failed to play audio {url}: {source}")]
    Play {
        url: String,
        #[source]
        source: MediaError,
    },

    /// Priming the element for later playback failed
    #[error("Failed to unlock audio: {0}")]
    Unlock(#[source] MediaError),

    /// The player task has shut down
    #[error("Player is closed")]
    Closed,
}

impl PlaybackError {
    /// URL of the failed attempt, if any
    pub fn url(&self) -> Option<&str> {
        match self {
            Self::Load { url, .. } | Self::Play { url, .. } => Some(url),
            Self::Unlock(_) | Self::Closed => None,
        }
    }
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlaybackError>;
