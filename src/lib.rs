//! Brick Breaker - a single-screen arcade brick breaking game
//!
//! Core modules:
//! - `sim`: Simulation step (paddle, ball, bricks, score, lives)
//! - `input`: Controller events to intents
//! - `renderer`: Projection of world state into a drawable frame
//! - `platform`: Display/input/audio collaborator seam
//! - `game`: The frame loop tying it all together

pub mod audio;
pub mod error;
pub mod game;
pub mod hud;
pub mod input;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::{GameError, Result};
pub use game::Game;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Display dimensions
    pub const SCREEN_WIDTH: f32 = 1280.0;
    pub const SCREEN_HEIGHT: f32 = 720.0;

    /// Paddle defaults - sits 32px above the bottom edge
    pub const PADDLE_WIDTH: f32 = 74.0;
    pub const PADDLE_HEIGHT: f32 = 16.0;
    pub const PADDLE_Y: f32 = SCREEN_HEIGHT - 32.0;
    /// Manual paddle speed (pixels/s)
    pub const PADDLE_SPEED: f32 = 800.0;

    /// Ball defaults (square, axis-aligned)
    pub const BALL_SIZE: f32 = 20.0;
    /// Per-axis ball speed (pixels/s), sign flips only
    pub const BALL_SPEED: f32 = 425.0;

    /// Brick grid
    pub const BRICK_ROWS: usize = 10;
    pub const BRICK_COLUMNS: usize = 20;
    pub const BRICK_WIDTH: f32 = 60.0;
    pub const BRICK_HEIGHT: f32 = 20.0;
    /// Horizontal distance between brick origins
    pub const BRICK_STRIDE_X: f32 = 64.0;
    /// Vertical distance between brick origins
    pub const BRICK_STRIDE_Y: f32 = 22.0;
    pub const BRICK_TOP: f32 = 50.0;
    /// Points for the top row; each row below is worth one less
    pub const TOP_ROW_POINTS: u32 = 10;

    pub const INITIAL_LIVES: u32 = 2;

    /// Longest elapsed time a single step will integrate (seconds)
    pub const MAX_FRAME_DT: f32 = 1.0;
}

/// Make an elapsed frame time safe to integrate with.
///
/// Negative, NaN and infinite values collapse to zero so a bad clock reading
/// can never run the simulation backwards. Stalls longer than
/// `MAX_FRAME_DT` are capped so positions stay finite.
#[inline]
pub fn sanitize_dt(dt: f32) -> f32 {
    if dt.is_finite() && dt > 0.0 {
        dt.min(consts::MAX_FRAME_DT)
    } else {
        0.0
    }
}
