//! Frame loop
//!
//! One thread, one loop: poll input, step the simulation unless paused,
//! render. Pacing comes from the platform's present call.

use crate::audio::AudioManager;
use crate::error::Result;
use crate::hud::Hud;
use crate::input::{Intent, collect_intents};
use crate::platform::Platform;
use crate::renderer::build_frame;
use crate::settings::Settings;
use crate::sim::{TickInput, WorldState, tick};

/// Game instance holding all state
#[derive(Debug, Clone)]
pub struct Game {
    pub state: WorldState,
    pub hud: Hud,
    audio: AudioManager,
    quit_requested: bool,
    previous_ticks: Option<u64>,
    frames: u64,
}

impl Game {
    pub fn new(settings: &Settings) -> Self {
        let state = WorldState::from_settings(settings);
        let hud = Hud::new(&state);
        Self {
            state,
            hud,
            audio: AudioManager::from_settings(settings),
            quit_requested: false,
            previous_ticks: None,
            frames: 0,
        }
    }

    pub fn should_close(&self) -> bool {
        self.quit_requested
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Apply one intent and play its feedback cue
    pub fn apply_intent<P: Platform + ?Sized>(&mut self, intent: Intent, platform: &mut P) {
        match intent {
            Intent::Quit => {
                log::info!("Quit requested");
                self.quit_requested = true;
            }
            Intent::TogglePause => {
                self.state.paused = !self.state.paused;
                log::debug!("Paused: {}", self.state.paused);
            }
            Intent::ToggleAutoPlay => {
                self.state.auto_play = !self.state.auto_play;
                log::debug!("Auto-play: {}", self.state.auto_play);
            }
        }
        if let Some(effect) = intent.sound() {
            self.audio.play(platform, effect);
        }
    }

    /// Elapsed seconds since the previous frame, from the platform clock
    fn elapsed(&mut self, now: u64) -> f32 {
        let dt = match self.previous_ticks {
            Some(prev) => now.saturating_sub(prev) as f32 / 1000.0,
            None => 0.0,
        };
        self.previous_ticks = Some(now);
        dt
    }

    /// Run one full frame: poll, simulate (unless paused), render.
    ///
    /// A quit intent still lets the current frame finish.
    pub fn frame<P: Platform + ?Sized>(&mut self, platform: &mut P) {
        let dt = self.elapsed(platform.ticks_ms());

        let raw = platform.poll_events();
        for intent in collect_intents(&raw) {
            self.apply_intent(intent, platform);
        }

        if !self.state.paused {
            let held = platform.held_directions();
            let input = TickInput {
                left: held.left,
                right: held.right,
                auto_play: self.state.auto_play,
            };
            for event in tick(&mut self.state, &input, dt) {
                self.hud.apply(&event);
                if let Some(effect) = event.sound() {
                    self.audio.play(platform, effect);
                }
            }
        }

        platform.present(&build_frame(&self.state, &self.hud));
        self.frames += 1;
    }
}

/// Start the platform, loop until quit or the host stops us, then release.
pub fn run<P: Platform + ?Sized>(game: &mut Game, platform: &mut P) -> Result<()> {
    if let Err(e) = platform.startup() {
        log::error!("Startup failed: {}", e);
        return Err(e);
    }

    game.previous_ticks = Some(platform.ticks_ms());
    log::info!("Game running");

    while !game.should_close() && platform.is_running() {
        game.frame(platform);
    }

    platform.shutdown();
    log::info!(
        "Game over after {} frames: score {}, lives {}, {} bricks left",
        game.frames,
        game.state.score,
        game.state.lives,
        game.state.bricks_remaining()
    );
    Ok(())
}
