//! Study Room Playback - Ambient soundscape player
//!
//! Plays one looping soundscape at a time with smooth fades between them.
//! Callers state what they want to hear; the player works out how to get
//! there from whatever the audio element is doing right now.
//!
//! # Features
//!
//! - **Intent-based controls**: `play`, `pause`, `resume`, `stop`, `toggle`
//!   and `set_sound` only record what should be audible
//! - **Reconciliation**: a single task converges the element on the latest
//!   intent, so rapid clicks never leave two sources playing
//! - **Fades**: 30-step linear fade-in on start, fade-out before switching
//!   or stopping; a new fade always replaces the old one
//! - **One-shot completions**: every load/play answer fires at most once and
//!   answers for superseded sources are discarded
//! - **Status**: `is_playing`, `is_loading`, desired and loaded URL,
//!   published through a `watch` channel plus a `broadcast` event stream
//!
//! # Example
//!
//! ```rust
//! use study_playback::{AudioPlayer, HeadlessAudio, PlayerOptions};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let audio = HeadlessAudio::new();
//! let player = AudioPlayer::new(audio, PlayerOptions::default());
//!
//! player.play("https://example.com/rain.mp3");
//! let status = player.wait_for(|s| s.is_playing).await.unwrap();
//! assert_eq!(status.loaded_url, "https://example.com/rain.mp3");
//!
//! player.shutdown().await;
//! # }
//! ```

pub mod element;
pub mod error;
pub mod events;
pub mod fade;
pub mod headless;
mod player;
mod reconciler;
mod sequence;
pub mod types;

pub use element::{AudioElement, Completer, Completion};
pub use error::{MediaError, PlaybackError, Result};
pub use events::{FadeDirection, PlayerEvent};
pub use fade::{Fade, FadeStep, FADE_STEPS};
pub use headless::{HeadlessAudio, HeadlessController};
pub use player::AudioPlayer;
pub use reconciler::ErrorHandler;
pub use types::{PlaybackIntent, PlaybackStatus, PlayerOptions};
