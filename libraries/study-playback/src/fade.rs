//! Linear volume fades
//!
//! A fade walks the element volume from where it currently is to a target in
//! a fixed number of evenly spaced steps. The player drives the steps from a
//! ticker; this type only does the arithmetic so it can be tested without a
//! clock.

use std::time::Duration;

/// Number of volume steps in every fade
pub const FADE_STEPS: u32 = 30;

/// Volume to apply after one fade step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FadeStep {
    /// Volume for the element (0.0-1.0)
    pub volume: f32,

    /// Whether this was the final step
    pub finished: bool,
}

/// An in-progress linear volume ramp
#[derive(Debug, Clone, PartialEq)]
pub struct Fade {
    start_volume: f32,
    target_volume: f32,
    duration: Duration,
    step_index: u32,
    total_steps: u32,
}

impl Fade {
    /// Create a fade from `start_volume` to `target_volume` over `duration`
    pub fn new(start_volume: f32, target_volume: f32, duration: Duration) -> Self {
        Self {
            start_volume: start_volume.clamp(0.0, 1.0),
            target_volume: target_volume.clamp(0.0, 1.0),
            duration,
            step_index: 0,
            total_steps: FADE_STEPS,
        }
    }

    pub fn start_volume(&self) -> f32 {
        self.start_volume
    }

    pub fn target_volume(&self) -> f32 {
        self.target_volume
    }

    /// Steps already applied
    pub fn step_index(&self) -> u32 {
        self.step_index
    }

    /// Time between two steps (`duration / 30`)
    pub fn step_interval(&self) -> Duration {
        self.duration / self.total_steps
    }

    /// A fade too short to tick; the caller should snap to the target
    pub fn is_instant(&self) -> bool {
        self.step_interval().is_zero()
    }

    /// Progress from 0.0 to 1.0
    pub fn progress(&self) -> f32 {
        self.step_index as f32 / self.total_steps as f32
    }

    pub fn is_finished(&self) -> bool {
        self.step_index >= self.total_steps
    }

    /// Apply the next step
    ///
    /// Intermediate volumes are clamped to [0, 1]; the final step lands
    /// exactly on the target so no rounding residue is left behind.
    pub fn advance(&mut self) -> FadeStep {
        if self.is_finished() {
            return FadeStep {
                volume: self.target_volume,
                finished: true,
            };
        }

        self.step_index += 1;

        if self.is_finished() {
            return FadeStep {
                volume: self.target_volume,
                finished: true,
            };
        }

        let delta = self.target_volume - self.start_volume;
        let volume = (self.start_volume + delta * self.progress()).clamp(0.0, 1.0);
        FadeStep {
            volume,
            finished: false,
        }
    }
}
