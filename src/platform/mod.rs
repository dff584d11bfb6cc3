//! Platform abstraction layer
//!
//! Everything the game needs from the outside world:
//! - Monotonic millisecond ticks
//! - Controller/window events and held D-pad state
//! - Presenting a frame
//! - Fire-and-forget sound playback
//!
//! Window, GPU and audio device creation live behind this trait.

pub mod headless;

pub use headless::HeadlessPlatform;

use crate::audio::SoundEffect;
use crate::error::Result;
use crate::input::{HeldDirections, RawEvent};
use crate::renderer::Frame;

pub trait Platform {
    /// Acquire display, controller and audio. Called once before the loop.
    fn startup(&mut self) -> Result<()> {
        Ok(())
    }

    /// Release everything acquired in `startup`. Called once after the loop.
    fn shutdown(&mut self) {}

    /// Milliseconds since an arbitrary fixed point; never goes backwards
    fn ticks_ms(&self) -> u64;

    /// Drain events that arrived since the last call
    fn poll_events(&mut self) -> Vec<RawEvent>;

    /// Current D-pad state
    fn held_directions(&self) -> HeldDirections;

    /// Show a finished frame. Blocks for vsync on real displays.
    fn present(&mut self, frame: &Frame);

    /// Start a cue without waiting for it; overlapping cues are fine
    fn play_sound(&mut self, effect: SoundEffect, volume: f32);

    /// False once the host wants the process to wind down
    fn is_running(&self) -> bool {
        true
    }
}
