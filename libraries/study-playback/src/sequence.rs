//! Start sequence and fade bookkeeping for the player task
//!
//! The reconciler holds at most one [`Attempt`] and one [`ActiveFade`];
//! [`settle`] and [`next_tick`] turn them into futures for its `select!`.

use std::time::Duration;

use tokio::time::{self, Instant, Interval};

use crate::element::Completion;
use crate::error::{MediaError, PlaybackError};
use crate::events::FadeDirection;
use crate::fade::Fade;
use crate::reconciler::ErrorHandler;

/// What happens when the active fade reaches its target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AfterFade {
    /// Old source is silent: pause it and load the draining attempt's URL
    LoadNext,
    /// Fade-in done: the start sequence is complete
    FinishLoading,
    /// Fade-out done: pause, rewind, go idle
    Halt,
}

pub(crate) struct ActiveFade {
    pub(crate) fade: Fade,
    pub(crate) ticker: Interval,
    pub(crate) direction: FadeDirection,
    pub(crate) then: AfterFade,
}

impl ActiveFade {
    /// Fading toward silence, either to switch sources or to stop
    pub(crate) fn is_fading_out(&self) -> bool {
        matches!(self.then, AfterFade::LoadNext | AfterFade::Halt)
    }
}

/// The current start sequence
#[derive(Default)]
pub(crate) enum Attempt {
    #[default]
    Idle,
    /// Fading out the previous source before loading `url`
    Draining {
        url: String,
        on_error: Option<ErrorHandler>,
    },
    Loading {
        url: String,
        on_error: Option<ErrorHandler>,
        ready: Completion,
        deadline: Option<(Instant, Duration)>,
    },
    Starting {
        url: String,
        on_error: Option<ErrorHandler>,
        started: Completion,
    },
}

impl Attempt {
    pub(crate) fn url(&self) -> Option<&str> {
        match self {
            Attempt::Idle => None,
            Attempt::Draining { url, .. }
            | Attempt::Loading { url, .. }
            | Attempt::Starting { url, .. } => Some(url),
        }
    }

    /// Register another failure handler on a running sequence
    ///
    /// Handlers already attached keep their place; on failure each one is
    /// called once, oldest first. Dropped when the attempt is idle.
    pub(crate) fn attach_handler(&mut self, handler: ErrorHandler) {
        let slot = match self {
            Attempt::Idle => return,
            Attempt::Draining { on_error, .. }
            | Attempt::Loading { on_error, .. }
            | Attempt::Starting { on_error, .. } => on_error,
        };

        let chained: ErrorHandler = match slot.take() {
            Some(previous) => Box::new(move |error: PlaybackError| {
                previous(error.clone());
                handler(error);
            }),
            None => handler,
        };
        *slot = Some(chained);
    }
}

pub(crate) enum Settled {
    Loaded(Result<(), MediaError>),
    Started(Result<(), MediaError>),
}

pub(crate) async fn next_tick(fade: &mut Option<ActiveFade>) {
    match fade {
        Some(active) => {
            active.ticker.tick().await;
        }
        None => std::future::pending().await,
    }
}

/// Resolve once the element answers the pending load or play
///
/// Never resolves while idle or draining. A load past its deadline settles
/// as `TimedOut`; a dropped completer settles as `Aborted`.
pub(crate) async fn settle(attempt: &mut Attempt) -> Settled {
    match attempt {
        Attempt::Loading {
            ready, deadline, ..
        } => {
            let answer = match *deadline {
                Some((at, timeout)) => time::timeout_at(at, ready)
                    .await
                    .unwrap_or(Ok(Err(MediaError::TimedOut(timeout)))),
                None => ready.await,
            };
            Settled::Loaded(answer.unwrap_or(Err(MediaError::Aborted)))
        }
        Attempt::Starting { started, .. } => {
            Settled::Started(started.await.unwrap_or(Err(MediaError::Aborted)))
        }
        Attempt::Idle | Attempt::Draining { .. } => std::future::pending().await,
    }
}
