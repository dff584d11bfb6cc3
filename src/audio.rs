//! Sound cues
//!
//! The game has two short pops. Playback is fire-and-forget through the
//! platform; this module decides which cue and at what volume.

use serde::{Deserialize, Serialize};

use crate::platform::Platform;
use crate::settings::Settings;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoundEffect {
    /// Ball hits a side wall or a brick; also the auto-play toggle cue
    WallHit,
    /// Ball hits the paddle or the top edge; also the pause toggle cue
    PaddleHit,
}

impl SoundEffect {
    /// Asset the platform should load for this cue
    pub fn asset_path(&self) -> &'static str {
        match self {
            SoundEffect::WallHit => "sounds/pop1.wav",
            SoundEffect::PaddleHit => "sounds/pop2.wav",
        }
    }
}

/// Volume and mute handling in front of the platform's mixer
#[derive(Debug, Clone)]
pub struct AudioManager {
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioManager {
    pub fn new() -> Self {
        Self {
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        let mut audio = Self::new();
        audio.set_master_volume(settings.master_volume);
        audio.set_sfx_volume(settings.sfx_volume);
        audio.set_muted(settings.muted);
        audio
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = clamp_volume(vol);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = clamp_volume(vol);
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    /// Play a sound effect. Silent when the effective volume is zero.
    pub fn play<P: Platform + ?Sized>(&self, platform: &mut P, effect: SoundEffect) {
        let vol = self.effective_volume();
        if vol <= 0.0 {
            return;
        }
        platform.play_sound(effect, vol);
    }
}

fn clamp_volume(vol: f32) -> f32 {
    if vol.is_nan() { 0.0 } else { vol.clamp(0.0, 1.0) }
}
