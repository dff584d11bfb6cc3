//! Simulation module
//!
//! All gameplay rules live here. No rendering, audio or device access:
//! the step takes plain input values and reports events for collaborators.

pub mod rect;
pub mod state;
pub mod tick;

pub use rect::Rect;
pub use state::{Ball, Brick, GameEvent, Paddle, WorldState, create_bricks};
pub use tick::{TickInput, tick};
