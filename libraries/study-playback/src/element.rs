//! Platform-agnostic audio element trait
//!
//! Abstracts the single looping audio output the player drives: a browser
//! `<audio>` element over wasm, a decoder plus output stream on desktop, or
//! the headless element in tests.

use tokio::sync::oneshot;

use crate::error::MediaError;

/// Single-fire answer to a load or play request
///
/// Resolves at most once. Dropping it detaches the listener, so an answer
/// for a superseded request can never reach the player.
pub type Completion = oneshot::Receiver<std::result::Result<(), MediaError>>;

/// Sending half of a [`Completion`]
pub type Completer = oneshot::Sender<std::result::Result<(), MediaError>>;

/// Create a linked completer/completion pair
pub fn completion() -> (Completer, Completion) {
    oneshot::channel()
}

/// A completion that has already succeeded
pub fn ready() -> Completion {
    let (tx, rx) = completion();
    let _ = tx.send(Ok(()));
    rx
}

/// Audio output primitive owned by the player
///
/// All methods are called from the player task only. Implementations must
/// not block: anything slow (fetching, decoding, starting a device) is
/// reported later through the returned [`Completion`].
pub trait AudioElement: Send + 'static {
    /// Point the element at a new source (empty releases the current one)
    fn set_src(&mut self, url: &str);

    /// Start loading the current source
    ///
    /// Resolves `Ok` once enough is buffered to start playing, or `Err` if
    /// the source cannot be fetched or decoded.
    fn load(&mut self) -> Completion;

    /// Start playing the loaded source
    ///
    /// May be rejected, e.g. by an autoplay policy.
    fn play(&mut self) -> Completion;

    /// Pause without moving the playhead
    fn pause(&mut self);

    /// Move the playhead back to the start
    fn rewind(&mut self);

    /// Current volume (0.0-1.0)
    fn volume(&self) -> f32;

    /// Set volume (0.0-1.0)
    fn set_volume(&mut self, volume: f32);

    /// Loop the source forever when enabled
    fn set_looping(&mut self, looping: bool);

    /// Satisfy a user-gesture requirement before the first real `play()`
    ///
    /// Elements without such a policy have nothing to do.
    fn unlock(&mut self) -> Completion {
        ready()
    }
}
