//! Heads-up display text
//!
//! Score and lives strings are only rebuilt when the simulation reports a
//! change, mirroring how a text texture would be re-rendered.

use glam::Vec2;

use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::sim::{GameEvent, WorldState};

pub const PAUSED_TEXT: &str = "Game Paused";

/// Where a piece of text goes once its rendered size is known
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TextAnchor {
    /// Fixed x, vertically offset by half the text height
    TopBar { x: f32 },
    /// Centered on screen
    ScreenCenter,
}

impl TextAnchor {
    /// Top-left corner for text of the given rendered size
    pub fn resolve(&self, text_size: Vec2) -> Vec2 {
        match self {
            TextAnchor::TopBar { x } => Vec2::new(*x, (text_size.y / 2.0).floor() - 10.0),
            TextAnchor::ScreenCenter => Vec2::new(
                (SCREEN_WIDTH / 2.0 - text_size.x / 2.0).floor(),
                (SCREEN_HEIGHT / 2.0 - text_size.y / 2.0).floor(),
            ),
        }
    }
}

pub const SCORE_ANCHOR: TextAnchor = TextAnchor::TopBar { x: 300.0 };
pub const LIVES_ANCHOR: TextAnchor = TextAnchor::TopBar { x: 800.0 };
pub const PAUSED_ANCHOR: TextAnchor = TextAnchor::ScreenCenter;

pub fn score_text(score: u64) -> String {
    format!("score: {score}")
}

pub fn lives_text(lives: u32) -> String {
    format!("lives: {lives}")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hud {
    pub score_text: String,
    pub lives_text: String,
}

impl Hud {
    pub fn new(state: &WorldState) -> Self {
        Self {
            score_text: score_text(state.score),
            lives_text: lives_text(state.lives),
        }
    }

    /// Refresh text for an event. Returns true if any string changed.
    pub fn apply(&mut self, event: &GameEvent) -> bool {
        match event {
            GameEvent::BrickDestroyed { score, .. } => {
                self.score_text = score_text(*score);
                true
            }
            GameEvent::LivesChanged { lives } => {
                self.lives_text = lives_text(*lives);
                true
            }
            _ => false,
        }
    }
}
