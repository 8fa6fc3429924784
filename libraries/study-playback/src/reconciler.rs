//! Playback reconciler
//!
//! One task owns the audio element, the caller's intent, the derived status,
//! at most one fade and at most one start sequence. Commands only change
//! intent; every command, fade tick and element answer is followed by
//! [`Reconciler::reconcile`], which compares intent with what the element is
//! doing and issues the next load/fade/play/pause. `reconcile` is idempotent,
//! so running it after an event that changed nothing is harmless.

use std::time::Duration;

use tokio::sync::{broadcast, mpsc, oneshot, watch};
use tokio::time::{self, Instant};
use tracing::{debug, warn};

use crate::element::{AudioElement, Completion};
use crate::error::PlaybackError;
use crate::events::{EventSink, FadeDirection, PlayerEvent};
use crate::fade::Fade;
use crate::sequence::{next_tick, settle, ActiveFade, AfterFade, Attempt, Settled};
use crate::types::{PlaybackIntent, PlaybackStatus, PlayerOptions};

/// Callback invoked once if the start sequence it was registered with fails
pub type ErrorHandler = Box<dyn FnOnce(PlaybackError) + Send + 'static>;

/// Messages from `AudioPlayer` handles to the player task
pub(crate) enum Command {
    Intent(IntentChange),
    Unlock(oneshot::Sender<Completion>),
    Shutdown(oneshot::Sender<()>),
}

/// Intent mutations; each one re-arms automatic starts after a failure
pub(crate) enum IntentChange {
    SetSound(String),
    Play {
        url: String,
        on_error: Option<ErrorHandler>,
    },
    Pause,
    Resume,
    Stop,
    Toggle {
        url: Option<String>,
        on_error: Option<ErrorHandler>,
    },
}

enum Wake {
    Command(Option<Command>),
    FadeTick,
    Settled(Settled),
}

pub(crate) struct Reconciler<A: AudioElement> {
    audio: A,
    options: PlayerOptions,
    intent: PlaybackIntent,
    /// Handler from the latest play/toggle, claimed by the next start sequence
    on_error: Option<ErrorHandler>,
    is_playing: bool,
    is_loading: bool,
    loaded_url: String,
    fade: Option<ActiveFade>,
    attempt: Attempt,
    /// URL whose last attempt failed; not retried until intent changes
    failed_url: Option<String>,
    sink: EventSink,
}

impl<A: AudioElement> Reconciler<A> {
    pub(crate) fn new(
        mut audio: A,
        options: PlayerOptions,
        status: watch::Sender<PlaybackStatus>,
        events: broadcast::Sender<PlayerEvent>,
    ) -> Self {
        audio.set_looping(true);
        audio.set_volume(0.0);

        Self {
            audio,
            options,
            intent: PlaybackIntent::default(),
            on_error: None,
            is_playing: false,
            is_loading: false,
            loaded_url: String::new(),
            fade: None,
            attempt: Attempt::Idle,
            failed_url: None,
            sink: EventSink::new(status, events),
        }
    }

    /// Run until every handle is dropped or a shutdown is requested
    pub(crate) async fn run(mut self, mut commands: mpsc::UnboundedReceiver<Command>) {
        loop {
            let wake = tokio::select! {
                command = commands.recv() => Wake::Command(command),
                () = next_tick(&mut self.fade) => Wake::FadeTick,
                settled = settle(&mut self.attempt) => Wake::Settled(settled),
            };

            match wake {
                Wake::Command(None) => break,
                Wake::Command(Some(Command::Shutdown(ack))) => {
                    self.teardown();
                    let _ = ack.send(());
                    return;
                }
                Wake::Command(Some(Command::Unlock(reply))) => {
                    let _ = reply.send(self.audio.unlock());
                }
                Wake::Command(Some(Command::Intent(change))) => self.apply(change),
                Wake::FadeTick => self.step_fade(),
                Wake::Settled(settled) => self.on_settled(settled),
            }

            self.reconcile();
            self.publish();
        }

        self.teardown();
    }

    fn apply(&mut self, change: IntentChange) {
        match change {
            IntentChange::SetSound(url) => self.intent.desired_url = url,
            IntentChange::Play { url, on_error } => self.play(url, on_error),
            IntentChange::Pause => self.intent.should_be_playing = false,
            IntentChange::Resume => self.resume(),
            IntentChange::Stop => {
                self.intent.should_be_playing = false;
                self.intent.desired_url.clear();
            }
            IntentChange::Toggle { url, on_error } => {
                if self.is_playing {
                    self.intent.should_be_playing = false;
                } else if let Some(url) = url {
                    self.play(url, on_error);
                } else {
                    self.resume();
                }
            }
        }
        self.failed_url = None;
    }

    fn play(&mut self, url: String, on_error: Option<ErrorHandler>) {
        self.intent.desired_url = url;
        self.intent.should_be_playing = true;
        self.on_error = on_error;
    }

    fn resume(&mut self) {
        if !self.intent.desired_url.is_empty() {
            self.intent.should_be_playing = true;
        }
    }

    /// Drive the element toward the intent
    fn reconcile(&mut self) {
        if self.intent.wants_sound() {
            let desired = self.intent.desired_url.as_str();
            let in_flight = self.attempt.url() == Some(desired);
            let failed = self.failed_url.as_deref() == Some(desired);
            let idle = !self.is_playing && !self.is_loading;

            if in_flight {
                if let Some(on_error) = self.on_error.take() {
                    self.attempt.attach_handler(on_error);
                }
            } else if desired == self.loaded_url && self.is_fading_out() {
                self.fade_back_in();
            } else if !failed && (desired != self.loaded_url || idle) {
                let url = desired.to_owned();
                self.start_playback(url);
            }
        } else if self.is_playing {
            if !self.is_stopping() {
                self.begin_stop();
            }
        } else if !matches!(self.attempt, Attempt::Idle) {
            self.abandon_attempt();
        }

        // A handler not claimed by a new sequence belongs to nothing
        self.on_error = None;
    }

    fn start_playback(&mut self, url: String) {
        debug!(url = %url, "Starting playback sequence");
        let on_error = self.on_error.take();

        self.is_loading = true;
        self.cancel_fade();
        self.attempt = Attempt::Idle;

        if self.is_playing {
            self.attempt = Attempt::Draining { url, on_error };
            self.start_fade(0.0, self.options.fade_out(), FadeDirection::Out, AfterFade::LoadNext);
        } else {
            self.begin_load(url, on_error);
        }
    }

    fn begin_load(&mut self, url: String, on_error: Option<ErrorHandler>) {
        self.audio.set_src(&url);
        self.audio.set_volume(0.0);
        let ready = self.audio.load();
        let deadline = self
            .options
            .load_timeout()
            .map(|timeout| (Instant::now() + timeout, timeout));

        self.attempt = Attempt::Loading {
            url,
            on_error,
            ready,
            deadline,
        };
    }

    fn on_settled(&mut self, settled: Settled) {
        match (std::mem::take(&mut self.attempt), settled) {
            (Attempt::Loading { url, on_error, .. }, Settled::Loaded(Ok(()))) => {
                debug!(url = %url, "Source ready, starting playback");
                let started = self.audio.play();
                self.attempt = Attempt::Starting {
                    url,
                    on_error,
                    started,
                };
            }
            (Attempt::Loading { url, on_error, .. }, Settled::Loaded(Err(source))) => {
                self.audio.pause();
                self.fail(PlaybackError::Load { url, source }, on_error);
            }
            (Attempt::Starting { url, .. }, Settled::Started(Ok(()))) => {
                debug!(url = %url, "Playback started, fading in");
                self.loaded_url = url;
                self.is_playing = true;
                let target = self.options.target_volume();
                self.start_fade(target, self.options.fade_in(), FadeDirection::In, AfterFade::FinishLoading);
            }
            (Attempt::Starting { url, on_error, .. }, Settled::Started(Err(source))) => {
                self.fail(PlaybackError::Play { url, source }, on_error);
            }
            (attempt, _) => self.attempt = attempt,
        }
    }

    fn fail(&mut self, error: PlaybackError, on_error: Option<ErrorHandler>) {
        warn!(error = %error, "Playback sequence failed");
        self.is_loading = false;
        self.is_playing = false;
        self.failed_url = error.url().map(str::to_owned);
        self.sink.emit(PlayerEvent::failed(&error));

        if let Some(on_error) = on_error {
            on_error(error);
        }
    }

    fn begin_stop(&mut self) {
        debug!(url = %self.loaded_url, "Stopping playback");
        self.attempt = Attempt::Idle;
        self.start_fade(0.0, self.options.fade_out(), FadeDirection::Out, AfterFade::Halt);
    }

    /// Drop a start sequence that has not produced sound yet
    fn abandon_attempt(&mut self) {
        debug!(url = ?self.attempt.url(), "Abandoning start sequence");
        self.attempt = Attempt::Idle;
        self.audio.pause();
        self.is_loading = false;
    }

    fn is_stopping(&self) -> bool {
        matches!(
            self.fade,
            Some(ActiveFade {
                then: AfterFade::Halt,
                ..
            })
        )
    }

    fn is_fading_out(&self) -> bool {
        self.fade.as_ref().is_some_and(ActiveFade::is_fading_out)
    }

    /// The loaded source was chosen again while fading out: keep it
    fn fade_back_in(&mut self) {
        debug!(url = %self.loaded_url, "Sound chosen again, fading back in");
        self.attempt = Attempt::Idle;
        self.is_loading = true;
        let target = self.options.target_volume();
        self.start_fade(target, self.options.fade_in(), FadeDirection::In, AfterFade::FinishLoading);
    }

    /// Start a fade from the element's current volume, replacing any fade in progress
    fn start_fade(&mut self, target: f32, duration: Duration, direction: FadeDirection, then: AfterFade) {
        self.cancel_fade();

        let fade = Fade::new(self.audio.volume(), target, duration);
        self.sink.emit(PlayerEvent::FadeStarted {
            direction,
            target: fade.target_volume(),
            duration_ms: duration.as_millis() as u64,
        });

        if fade.is_instant() {
            self.audio.set_volume(fade.target_volume());
            self.finish_fade(direction, then);
            return;
        }

        let period = fade.step_interval();
        let ticker = time::interval_at(Instant::now() + period, period);
        self.fade = Some(ActiveFade {
            fade,
            ticker,
            direction,
            then,
        });
    }

    fn step_fade(&mut self) {
        let Some(active) = self.fade.as_mut() else {
            return;
        };
        let step = active.fade.advance();
        self.audio.set_volume(step.volume);

        if step.finished {
            if let Some(active) = self.fade.take() {
                self.finish_fade(active.direction, active.then);
            }
        }
    }

    fn finish_fade(&mut self, direction: FadeDirection, then: AfterFade) {
        self.sink.emit(PlayerEvent::FadeFinished { direction });

        match then {
            AfterFade::LoadNext => {
                self.audio.pause();
                self.is_playing = false;
                self.loaded_url.clear();
                if let Attempt::Draining { url, on_error } = std::mem::take(&mut self.attempt) {
                    self.begin_load(url, on_error);
                }
            }
            AfterFade::FinishLoading => self.is_loading = false,
            AfterFade::Halt => {
                self.audio.pause();
                self.audio.rewind();
                self.is_playing = false;
                self.is_loading = false;
                self.loaded_url.clear();
                debug!("Playback stopped");
                self.sink.emit(PlayerEvent::Stopped);
            }
        }
    }

    fn cancel_fade(&mut self) {
        if let Some(active) = self.fade.take() {
            self.sink.emit(PlayerEvent::FadeCancelled {
                direction: active.direction,
                volume: self.audio.volume(),
            });
        }
    }

    fn publish(&self) {
        self.sink.publish(PlaybackStatus {
            is_playing: self.is_playing,
            is_loading: self.is_loading,
            current_url: self.intent.desired_url.clone(),
            loaded_url: self.loaded_url.clone(),
        });
    }

    /// Release the element so no late callback can touch it
    fn teardown(&mut self) {
        self.cancel_fade();
        self.attempt = Attempt::Idle;
        self.audio.pause();
        self.audio.set_src("");
        debug!("Player torn down");
    }
}
