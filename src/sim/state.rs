//! World state and core simulation types
//!
//! Everything the simulation step reads or writes lives in `WorldState`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::audio::SoundEffect;
use crate::consts::*;
use crate::settings::Settings;

/// The player's paddle. Only `bounds.x` changes after construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    pub bounds: Rect,
    /// Manual movement speed (pixels/s)
    pub speed: f32,
}

impl Default for Paddle {
    fn default() -> Self {
        Self {
            bounds: Rect::new(SCREEN_WIDTH / 2.0, PADDLE_Y, PADDLE_WIDTH, PADDLE_HEIGHT),
            speed: PADDLE_SPEED,
        }
    }
}

impl Paddle {
    /// Rightmost x the paddle may start a rightward move from
    pub fn max_x(&self) -> f32 {
        SCREEN_WIDTH - self.bounds.w
    }
}

/// The ball
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub bounds: Rect,
    /// Velocity in pixels/s. Magnitudes never change, only signs.
    pub vel: Vec2,
}

impl Default for Ball {
    fn default() -> Self {
        Self::new(BALL_SPEED)
    }
}

impl Ball {
    pub fn new(speed: f32) -> Self {
        Self {
            bounds: Rect::new(
                SCREEN_WIDTH / 2.0 - BALL_SIZE,
                SCREEN_HEIGHT / 2.0 - BALL_SIZE,
                BALL_SIZE,
                BALL_SIZE,
            ),
            vel: Vec2::new(speed, speed),
        }
    }

    /// Position the ball uses after leaving through the bottom edge
    pub fn reset_position(&self) -> Vec2 {
        Vec2::new(
            SCREEN_WIDTH / 2.0 - self.bounds.w,
            SCREEN_HEIGHT / 2.0 - self.bounds.h,
        )
    }
}

/// A destructible brick
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Brick {
    pub bounds: Rect,
    pub destroyed: bool,
    pub points: u32,
}

/// Build the starting brick grid, top row first.
pub fn create_bricks() -> Vec<Brick> {
    let mut bricks = Vec::with_capacity(BRICK_ROWS * BRICK_COLUMNS);

    for row in 0..BRICK_ROWS {
        let y = BRICK_TOP + row as f32 * BRICK_STRIDE_Y;
        let points = TOP_ROW_POINTS.saturating_sub(row as u32);

        for column in 0..BRICK_COLUMNS {
            let x = column as f32 * BRICK_STRIDE_X;
            bricks.push(Brick {
                bounds: Rect::new(x, y, BRICK_WIDTH, BRICK_HEIGHT),
                destroyed: false,
                points,
            });
        }
    }

    bricks
}

/// Things that happened during a step, for audio and HUD collaborators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Ball bounced off a side wall
    WallBounce,
    /// Ball bounced off the paddle or the top edge
    PaddleBounce,
    /// A brick was destroyed; `score` is the total after adding its points
    BrickDestroyed { points: u32, score: u64 },
    /// Ball left through the bottom and was re-centred
    BallReset,
    /// A life was spent; `lives` is what remains
    LivesChanged { lives: u32 },
}

impl GameEvent {
    /// Sound cue this event asks for, if any
    pub fn sound(&self) -> Option<SoundEffect> {
        match self {
            GameEvent::WallBounce | GameEvent::BrickDestroyed { .. } => Some(SoundEffect::WallHit),
            GameEvent::PaddleBounce => Some(SoundEffect::PaddleHit),
            GameEvent::BallReset | GameEvent::LivesChanged { .. } => None,
        }
    }
}

/// Complete game data for one session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldState {
    pub paddle: Paddle,
    pub ball: Ball,
    /// Bricks still standing
    pub bricks: Vec<Brick>,
    /// Only ever increases, and only through brick destruction
    pub score: u64,
    /// Only ever decreases, never below zero
    pub lives: u32,
    pub paused: bool,
    pub auto_play: bool,
}

impl Default for WorldState {
    fn default() -> Self {
        Self::new()
    }
}

impl WorldState {
    pub fn new() -> Self {
        Self {
            paddle: Paddle::default(),
            ball: Ball::default(),
            bricks: create_bricks(),
            score: 0,
            lives: INITIAL_LIVES,
            paused: false,
            auto_play: true,
        }
    }

    /// Start a session using the gameplay values from settings
    pub fn from_settings(settings: &Settings) -> Self {
        let mut state = Self::new();
        state.lives = settings.initial_lives;
        state.auto_play = settings.auto_play;
        state.paddle.speed = settings.paddle_speed;
        state.ball = Ball::new(settings.ball_speed);
        state
    }

    pub fn bricks_remaining(&self) -> usize {
        self.bricks.len()
    }
}
