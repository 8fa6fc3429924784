//! Audio player handle
//!
//! `AudioPlayer` is a cheap front for the player task. Control methods only
//! record intent and return immediately; the task reconciles the element in
//! the background and publishes the resulting status.

use tokio::sync::{broadcast, mpsc, oneshot, watch};
use tracing::debug;

use crate::element::AudioElement;
use crate::error::{PlaybackError, Result};
use crate::events::PlayerEvent;
use crate::reconciler::{Command, ErrorHandler, IntentChange, Reconciler};
use crate::types::{PlaybackStatus, PlayerOptions};

/// Events buffered per subscriber before the slowest one starts lagging
const EVENT_CAPACITY: usize = 1024;

/// Intent-driven player for a single looping soundscape
///
/// Dropping the handle (or calling [`AudioPlayer::shutdown`]) stops the
/// player task, cancels any fade and releases the element's source.
#[derive(Debug)]
pub struct AudioPlayer {
    commands: mpsc::UnboundedSender<Command>,
    status: watch::Receiver<PlaybackStatus>,
    events: broadcast::Sender<PlayerEvent>,
}

impl AudioPlayer {
    /// Spawn a player task that owns `audio`
    ///
    /// Must be called from within a Tokio runtime. The element is set to loop
    /// and muted before the first command is handled.
    pub fn new<A: AudioElement>(audio: A, options: PlayerOptions) -> Self {
        let (commands, command_rx) = mpsc::unbounded_channel();
        let (status_tx, status) = watch::channel(PlaybackStatus::default());
        let (events, _) = broadcast::channel(EVENT_CAPACITY);

        let reconciler = Reconciler::new(audio, options, status_tx, events.clone());
        tokio::spawn(reconciler.run(command_rx));

        Self {
            commands,
            status,
            events,
        }
    }

    /// Choose the soundscape without changing whether it should play
    pub fn set_sound(&self, url: impl Into<String>) {
        self.send_intent(IntentChange::SetSound(url.into()));
    }

    /// Play `url`, fading out whatever is audible first
    ///
    /// An empty URL means silence.
    pub fn play(&self, url: impl Into<String>) {
        self.send_intent(IntentChange::Play {
            url: url.into(),
            on_error: None,
        });
    }

    /// Like [`AudioPlayer::play`], calling `on_error` once if this start fails
    ///
    /// If a start of the same URL is already under way the handler joins it,
    /// and every handler attached to that start is called once on failure.
    /// The handler is dropped unused if the start succeeds, is superseded, or
    /// the URL is already audible.
    pub fn play_with_handler<F>(&self, url: impl Into<String>, on_error: F)
    where
        F: FnOnce(PlaybackError) + Send + 'static,
    {
        self.send_intent(IntentChange::Play {
            url: url.into(),
            on_error: Some(Box::new(on_error)),
        });
    }

    /// Fade out and stop, remembering the sound for `resume`
    pub fn pause(&self) {
        self.send_intent(IntentChange::Pause);
    }

    /// Play the remembered sound again; no-op if none was chosen
    pub fn resume(&self) {
        self.send_intent(IntentChange::Resume);
    }

    /// Fade out, stop and forget the sound
    pub fn stop(&self) {
        self.send_intent(IntentChange::Stop);
    }

    /// Pause if audible, otherwise play `url` (or resume when `None`)
    pub fn toggle(&self, url: Option<&str>) {
        self.send_intent(IntentChange::Toggle {
            url: url.map(str::to_owned),
            on_error: None,
        });
    }

    /// Like [`AudioPlayer::toggle`], with a one-shot failure handler
    pub fn toggle_with_handler<F>(&self, url: Option<&str>, on_error: F)
    where
        F: FnOnce(PlaybackError) + Send + 'static,
    {
        let on_error: ErrorHandler = Box::new(on_error);
        self.send_intent(IntentChange::Toggle {
            url: url.map(str::to_owned),
            on_error: Some(on_error),
        });
    }

    /// Prime the element from inside a user gesture
    ///
    /// Needed once on platforms whose autoplay policy rejects `play()`
    /// without one. Does not change intent or status.
    pub async fn unlock(&self) -> Result<()> {
        let (reply, answer) = oneshot::channel();
        self.commands
            .send(Command::Unlock(reply))
            .map_err(|_| PlaybackError::Closed)?;

        let completion = answer.await.map_err(|_| PlaybackError::Closed)?;
        completion
            .await
            .map_err(|_| PlaybackError::Closed)?
            .map_err(PlaybackError::Unlock)
    }

    /// Latest published status
    pub fn status(&self) -> PlaybackStatus {
        self.status.borrow().clone()
    }

    pub fn is_playing(&self) -> bool {
        self.status.borrow().is_playing
    }

    pub fn is_loading(&self) -> bool {
        self.status.borrow().is_loading
    }

    /// The desired URL (empty when no sound is chosen)
    pub fn current_url(&self) -> String {
        self.status.borrow().current_url.clone()
    }

    /// The URL actually playing (empty while silent)
    pub fn loaded_url(&self) -> String {
        self.status.borrow().loaded_url.clone()
    }

    /// Receiver that observes every status change
    pub fn watch(&self) -> watch::Receiver<PlaybackStatus> {
        self.status.clone()
    }

    /// Subscribe to player events
    pub fn subscribe(&self) -> broadcast::Receiver<PlayerEvent> {
        self.events.subscribe()
    }

    /// Wait until the status satisfies `predicate`, returning that status
    pub async fn wait_for<F>(&self, mut predicate: F) -> Result<PlaybackStatus>
    where
        F: FnMut(&PlaybackStatus) -> bool,
    {
        let mut status = self.status.clone();
        let matched = status
            .wait_for(|current| predicate(current))
            .await
            .map_err(|_| PlaybackError::Closed)?;
        Ok(matched.clone())
    }

    /// Stop the player task and wait for it to release the element
    pub async fn shutdown(self) {
        let (ack, done) = oneshot::channel();
        if self.commands.send(Command::Shutdown(ack)).is_ok() {
            let _ = done.await;
        }
    }

    fn send_intent(&self, change: IntentChange) {
        if self.commands.send(Command::Intent(change)).is_err() {
            debug!("Player task is gone, dropping command");
        }
    }
}
