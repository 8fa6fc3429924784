//! Headless audio element
//!
//! Tracks everything a real element would do (source, volume, paused state,
//! loads and plays) without producing sound. Used by the server's
//! `soundcheck` command and by tests, which script load and play outcomes
//! through a [`HeadlessController`].

use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::element::{completion, ready, AudioElement, Completer, Completion};
use crate::error::MediaError;

#[derive(Debug, Default)]
struct HeadlessState {
    src: String,
    volume: f32,
    looping: bool,
    playing: bool,
    rewinds: usize,
    unlocked: bool,
    hold_loads: bool,
    pending_load: Option<Completer>,
    failing: HashSet<String>,
    play_block: Option<String>,
    loads: Vec<String>,
    plays: Vec<String>,
}

fn lock(state: &Mutex<HeadlessState>) -> MutexGuard<'_, HeadlessState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Silent [`AudioElement`] whose loads and plays succeed immediately unless
/// scripted otherwise
#[derive(Debug, Clone, Default)]
pub struct HeadlessAudio {
    state: Arc<Mutex<HeadlessState>>,
}

impl HeadlessAudio {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle for inspecting and scripting this element after it moves
    /// into a player
    pub fn controller(&self) -> HeadlessController {
        HeadlessController {
            state: Arc::clone(&self.state),
        }
    }
}

impl AudioElement for HeadlessAudio {
    fn set_src(&mut self, url: &str) {
        let mut state = lock(&self.state);
        state.src = url.to_owned();
        state.playing = false;
        // Dropping the completer aborts the superseded load
        state.pending_load = None;
    }

    fn load(&mut self) -> Completion {
        let mut state = lock(&self.state);
        let (tx, rx) = completion();
        let src = state.src.clone();
        state.loads.push(src.clone());

        if src.is_empty() {
            let _ = tx.send(Err(MediaError::Decode("no source".to_string())));
        } else if state.failing.contains(&src) {
            let _ = tx.send(Err(MediaError::Network(format!("{} is unavailable", src))));
        } else if state.hold_loads {
            state.pending_load = Some(tx);
        } else {
            let _ = tx.send(Ok(()));
        }
        rx
    }

    fn play(&mut self) -> Completion {
        let mut state = lock(&self.state);
        let (tx, rx) = completion();
        let src = state.src.clone();
        state.plays.push(src);

        match state.play_block.clone() {
            Some(reason) => {
                let _ = tx.send(Err(MediaError::NotAllowed(reason)));
            }
            None => {
                state.playing = true;
                let _ = tx.send(Ok(()));
            }
        }
        rx
    }

    fn pause(&mut self) {
        lock(&self.state).playing = false;
    }

    fn rewind(&mut self) {
        lock(&self.state).rewinds += 1;
    }

    fn volume(&self) -> f32 {
        lock(&self.state).volume
    }

    fn set_volume(&mut self, volume: f32) {
        lock(&self.state).volume = volume.clamp(0.0, 1.0);
    }

    fn set_looping(&mut self, looping: bool) {
        lock(&self.state).looping = looping;
    }

    fn unlock(&mut self) -> Completion {
        let mut state = lock(&self.state);
        state.unlocked = true;
        state.play_block = None;
        ready()
    }
}

/// Scripting and inspection side of a [`HeadlessAudio`]
#[derive(Debug, Clone)]
pub struct HeadlessController {
    state: Arc<Mutex<HeadlessState>>,
}

impl HeadlessController {
    /// Keep loads pending until [`HeadlessController::finish_load`]
    pub fn hold_loads(&self, hold: bool) {
        lock(&self.state).hold_loads = hold;
    }

    /// Answer the pending load; returns false if none was pending
    pub fn finish_load(&self, result: Result<(), MediaError>) -> bool {
        match lock(&self.state).pending_load.take() {
            Some(tx) => tx.send(result).is_ok(),
            None => false,
        }
    }

    pub fn has_pending_load(&self) -> bool {
        lock(&self.state).pending_load.is_some()
    }

    /// Make every load of `url` fail with a network error
    pub fn fail_source(&self, url: impl Into<String>) {
        lock(&self.state).failing.insert(url.into());
    }

    /// Reject `play()` until unlocked, like a browser autoplay policy
    pub fn block_autoplay(&self, reason: impl Into<String>) {
        lock(&self.state).play_block = Some(reason.into());
    }

    pub fn src(&self) -> String {
        lock(&self.state).src.clone()
    }

    pub fn volume(&self) -> f32 {
        lock(&self.state).volume
    }

    pub fn is_looping(&self) -> bool {
        lock(&self.state).looping
    }

    /// Whether the element is producing (possibly silent) output
    pub fn is_playing(&self) -> bool {
        lock(&self.state).playing
    }

    pub fn is_unlocked(&self) -> bool {
        lock(&self.state).unlocked
    }

    pub fn rewinds(&self) -> usize {
        lock(&self.state).rewinds
    }

    /// Sources passed to `load()`, in order
    pub fn loads(&self) -> Vec<String> {
        lock(&self.state).loads.clone()
    }

    /// Sources passed to `play()`, in order
    pub fn plays(&self) -> Vec<String> {
        lock(&self.state).plays.clone()
    }
}
