//! Core types for soundscape playback

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// What the caller wants to hear
///
/// Mutated only by the control operations on `AudioPlayer`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaybackIntent {
    /// Source to play; empty means silence
    pub desired_url: String,

    /// Whether the desired source should be audible
    pub should_be_playing: bool,
}

impl PlaybackIntent {
    /// Whether the intent asks for audible output
    pub fn wants_sound(&self) -> bool {
        self.should_be_playing && !self.desired_url.is_empty()
    }
}

/// What the player is actually doing
///
/// Derived from element events, never from intent alone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaybackStatus {
    /// The element is playing (possibly still fading)
    pub is_playing: bool,

    /// A start sequence is running: from the load request until the
    /// fade-in completes or the attempt fails
    pub is_loading: bool,

    /// The desired URL, so UIs highlight the selection immediately
    pub current_url: String,

    /// The URL actually loaded and started; empty while silent
    pub loaded_url: String,
}

/// Player configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerOptions {
    /// Target volume after fade-in (0.0-1.0, default: 0.5)
    pub volume: f32,

    /// Fade-in duration in milliseconds (default: 2000)
    pub fade_in_ms: u64,

    /// Fade-out duration in milliseconds (default: 500)
    pub fade_out_ms: u64,

    /// Give up on a load after this many milliseconds (default: wait forever)
    pub load_timeout_ms: Option<u64>,
}

impl Default for PlayerOptions {
    fn default() -> Self {
        Self {
            volume: 0.5,
            fade_in_ms: 2000,
            fade_out_ms: 500,
            load_timeout_ms: None,
        }
    }
}

impl PlayerOptions {
    /// Target volume clamped to the element's range
    pub fn target_volume(&self) -> f32 {
        if self.volume.is_nan() {
            return 0.0;
        }
        self.volume.clamp(0.0, 1.0)
    }

    pub fn fade_in(&self) -> Duration {
        Duration::from_millis(self.fade_in_ms)
    }

    pub fn fade_out(&self) -> Duration {
        Duration::from_millis(self.fade_out_ms)
    }

    pub fn load_timeout(&self) -> Option<Duration> {
        self.load_timeout_ms.map(Duration::from_millis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options() {
        let options = PlayerOptions::default();
        assert_eq!(options.volume, 0.5);
        assert_eq!(options.fade_in(), Duration::from_millis(2000));
        assert_eq!(options.fade_out(), Duration::from_millis(500));
        assert!(options.load_timeout().is_none());
    }

    #[test]
    fn partial_options_fill_defaults() {
        let options: PlayerOptions = serde_json::from_str(r#"{"volume":0.8}"#).unwrap();
        assert_eq!(options.volume, 0.8);
        assert_eq!(options.fade_in_ms, 2000);
        assert_eq!(options.fade_out_ms, 500);
    }

    #[test]
    fn target_volume_is_clamped() {
        let loud = PlayerOptions {
            volume: 3.0,
            ..PlayerOptions::default()
        };
        let negative = PlayerOptions {
            volume: -1.0,
            ..PlayerOptions::default()
        };
        assert_eq!(loud.target_volume(), 1.0);
        assert_eq!(negative.target_volume(), 0.0);
    }

    #[test]
    fn empty_url_never_wants_sound() {
        let intent = PlaybackIntent {
            desired_url: String::new(),
            should_be_playing: true,
        };
        assert!(!intent.wants_sound());
    }
}
