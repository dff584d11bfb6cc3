//! Game settings and preferences
//!
//! Stored as JSON next to the executable's working directory. Every field
//! has a default, so a partial file is fine.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{BALL_SPEED, INITIAL_LIVES, PADDLE_SPEED};
use crate::error::Result;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    pub muted: bool,

    // === Gameplay ===
    pub initial_lives: u32,
    /// Start with the paddle following the ball
    pub auto_play: bool,
    /// Manual paddle speed (pixels/s)
    pub paddle_speed: f32,
    /// Per-axis ball speed (pixels/s)
    pub ball_speed: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,

            initial_lives: INITIAL_LIVES,
            auto_play: true,
            paddle_speed: PADDLE_SPEED,
            ball_speed: BALL_SPEED,
        }
    }
}

impl Settings {
    /// Default file name, relative to the working directory
    pub const FILE_NAME: &'static str = "brick_breaker_settings.json";

    /// Read settings from a JSON file
    pub fn load_from(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let settings: Settings = serde_json::from_str(&json)?;
        Ok(settings.validated())
    }

    /// Load from the default file, falling back to defaults
    pub fn load() -> Self {
        let path = Path::new(Self::FILE_NAME);
        if !path.exists() {
            log::info!("No {} found, using default settings", Self::FILE_NAME);
            return Self::default();
        }

        match Self::load_from(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Ignoring {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Write settings as pretty JSON
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }

    /// Replace values the simulation cannot use with their defaults.
    ///
    /// Speeds must be finite and positive so the ball never stalls.
    pub fn validated(mut self) -> Self {
        let defaults = Self::default();
        if !(self.paddle_speed.is_finite() && self.paddle_speed > 0.0) {
            log::warn!("Invalid paddle_speed {}, using {}", self.paddle_speed, defaults.paddle_speed);
            self.paddle_speed = defaults.paddle_speed;
        }
        if !(self.ball_speed.is_finite() && self.ball_speed > 0.0) {
            log::warn!("Invalid ball_speed {}, using {}", self.ball_speed, defaults.ball_speed);
            self.ball_speed = defaults.ball_speed;
        }
        self
    }
}
