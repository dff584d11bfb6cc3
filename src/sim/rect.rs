//! Axis-aligned rectangles
//!
//! Every entity in the game is one of these. Screen space: origin top-left,
//! Y grows downward.

use glam::Vec2;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn set_position(&mut self, pos: Vec2) {
        self.x = pos.x;
        self.y = pos.y;
    }

    /// Zero or negative area
    pub fn is_empty(&self) -> bool {
        self.w <= 0.0 || self.h <= 0.0
    }

    /// Overlap test with positive-area semantics.
    ///
    /// Rectangles that only share an edge do not intersect, and an empty
    /// rectangle intersects nothing.
    pub fn intersects(&self, other: &Rect) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        let overlap_x = self.right().min(other.right()) - self.x.max(other.x);
        let overlap_y = self.bottom().min(other.bottom()) - self.y.max(other.y);
        overlap_x > 0.0 && overlap_y > 0.0
    }
}
