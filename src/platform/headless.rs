//! Scripted platform with no devices
//!
//! Replays a timeline of controller events against a fake clock that moves
//! forward one frame per `present`. Used by the native binary's demo run and
//! by tests.

use std::collections::BTreeMap;

use super::Platform;
use crate::audio::SoundEffect;
use crate::error::{GameError, Result};
use crate::input::{HeldDirections, RawEvent};
use crate::renderer::Frame;

/// Default frame time (60 Hz, whole milliseconds like a tick counter)
pub const DEFAULT_FRAME_MS: u64 = 16;

#[derive(Debug, Default)]
pub struct HeadlessPlatform {
    clock_ms: u64,
    frame_ms: u64,
    frame: u64,
    frame_limit: Option<u64>,
    /// Events delivered at the start of a given frame
    script: BTreeMap<u64, Vec<RawEvent>>,
    /// D-pad state taking effect from a given frame onward
    holds: BTreeMap<u64, HeldDirections>,
    controller_missing: bool,
    started: bool,
    last_frame: Option<Frame>,
    presented: u64,
    sounds: Vec<(SoundEffect, f32)>,
}

impl HeadlessPlatform {
    pub fn new() -> Self {
        Self {
            frame_ms: DEFAULT_FRAME_MS,
            ..Default::default()
        }
    }

    pub fn with_frame_ms(mut self, frame_ms: u64) -> Self {
        self.frame_ms = frame_ms;
        self
    }

    /// Stop reporting `is_running` after this many presented frames
    pub fn with_frame_limit(mut self, frames: u64) -> Self {
        self.frame_limit = Some(frames);
        self
    }

    /// Make `startup` fail as if no controller were plugged in
    pub fn with_missing_controller(mut self) -> Self {
        self.controller_missing = true;
        self
    }

    /// Deliver `event` at the start of `frame`
    pub fn at_frame(mut self, frame: u64, event: RawEvent) -> Self {
        self.script.entry(frame).or_default().push(event);
        self
    }

    /// Hold the D-pad this way from `frame` until the next hold change
    pub fn hold_from(mut self, frame: u64, held: HeldDirections) -> Self {
        self.holds.insert(frame, held);
        self
    }

    pub fn frames_presented(&self) -> u64 {
        self.presented
    }

    pub fn last_frame(&self) -> Option<&Frame> {
        self.last_frame.as_ref()
    }

    /// Every cue played so far, with its volume
    pub fn sounds(&self) -> &[(SoundEffect, f32)] {
        &self.sounds
    }

    pub fn is_started(&self) -> bool {
        self.started
    }
}

impl Platform for HeadlessPlatform {
    fn startup(&mut self) -> Result<()> {
        if self.controller_missing {
            return Err(GameError::Platform("no controller at index 0".to_string()));
        }
        self.started = true;
        log::info!("Headless platform started ({} ms frames)", self.frame_ms);
        Ok(())
    }

    fn shutdown(&mut self) {
        self.started = false;
        log::info!("Headless platform shut down after {} frames", self.presented);
    }

    fn ticks_ms(&self) -> u64 {
        self.clock_ms
    }

    fn poll_events(&mut self) -> Vec<RawEvent> {
        self.script.remove(&self.frame).unwrap_or_default()
    }

    fn held_directions(&self) -> HeldDirections {
        self.holds
            .range(..=self.frame)
            .next_back()
            .map(|(_, held)| *held)
            .unwrap_or_default()
    }

    fn present(&mut self, frame: &Frame) {
        self.last_frame = Some(frame.clone());
        self.presented += 1;
        self.frame += 1;
        self.clock_ms += self.frame_ms;
    }

    fn play_sound(&mut self, effect: SoundEffect, volume: f32) {
        log::trace!("Sound {:?} at {:.2} ({})", effect, volume, effect.asset_path());
        self.sounds.push((effect, volume));
    }

    fn is_running(&self) -> bool {
        self.frame_limit.is_none_or(|limit| self.presented < limit)
    }
}
