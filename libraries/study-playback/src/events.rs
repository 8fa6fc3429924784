//! Player Events
//!
//! Event-based communication for UI synchronization. Events are emitted at
//! key points:
//! - Status changes (playing/loading/url)
//! - Fade start, completion and cancellation
//! - Failed start sequences
//! - Completed stops

use serde::Serialize;
use tokio::sync::{broadcast, watch};

use crate::error::PlaybackError;
use crate::types::PlaybackStatus;

/// Which way a fade moves the volume
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FadeDirection {
    /// Ramping up to the configured volume
    In,
    /// Ramping down to silence
    Out,
}

/// Events emitted by the player task
#[derive(Debug, Clone, Serialize)]
pub enum PlayerEvent {
    /// Status changed
    StatusChanged {
        /// The new status
        status: PlaybackStatus,
    },

    /// A fade started; any previous fade was cancelled or finished first
    FadeStarted {
        direction: FadeDirection,
        /// Target volume (0.0-1.0)
        target: f32,
        /// Fade duration in milliseconds
        duration_ms: u64,
    },

    /// The active fade reached its target
    FadeFinished {
        direction: FadeDirection,
    },

    /// The active fade was abandoned before reaching its target
    FadeCancelled {
        direction: FadeDirection,
        /// Volume at the moment of cancellation
        volume: f32,
    },

    /// A start sequence failed
    Failed {
        /// Error message
        message: String,
        /// URL of the failed attempt
        url: Option<String>,
    },

    /// Stop sequence finished: element paused, rewound and silent
    Stopped,
}

impl PlayerEvent {
    pub(crate) fn failed(error: &PlaybackError) -> Self {
        Self::Failed {
            message: error.to_string(),
            url: error.url().map(str::to_owned),
        }
    }
}

/// The player task's outputs: the status channel and the event stream
pub(crate) struct EventSink {
    status: watch::Sender<PlaybackStatus>,
    events: broadcast::Sender<PlayerEvent>,
}

impl EventSink {
    pub(crate) fn new(
        status: watch::Sender<PlaybackStatus>,
        events: broadcast::Sender<PlayerEvent>,
    ) -> Self {
        Self { status, events }
    }

    pub(crate) fn emit(&self, event: PlayerEvent) {
        // No subscribers is fine
        let _ = self.events.send(event);
    }

    /// Store `status` and announce it, unless it equals the last one
    pub(crate) fn publish(&self, status: PlaybackStatus) {
        let changed = self.status.send_if_modified(|current| {
            if *current == status {
                false
            } else {
                *current = status.clone();
                true
            }
        });

        if changed {
            self.emit(PlayerEvent::StatusChanged { status });
        }
    }
}
