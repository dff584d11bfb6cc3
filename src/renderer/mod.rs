//! Presentation
//!
//! Projects the world into a `Frame`: a clear color, text items and a flat
//! list of colored triangles. The platform decides how to put it on screen.

pub mod shapes;
pub mod vertex;

pub use vertex::{Vertex, colors};

use crate::hud::{self, Hud, TextAnchor};
use crate::sim::WorldState;

/// A string to draw once its size is known
#[derive(Debug, Clone, PartialEq)]
pub struct TextItem {
    pub text: String,
    pub anchor: TextAnchor,
    pub color: [f32; 4],
}

/// Everything needed to draw one frame. Text goes under the shapes.
#[derive(Debug, Clone, Default)]
pub struct Frame {
    pub clear: [f32; 4],
    pub texts: Vec<TextItem>,
    pub vertices: Vec<Vertex>,
}

impl Frame {
    pub fn quad_count(&self) -> usize {
        self.vertices.len() / shapes::QUAD_VERTICES
    }

    /// Raw vertex data for a GPU upload
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    fn push_quad(&mut self, verts: [Vertex; shapes::QUAD_VERTICES]) {
        self.vertices.extend_from_slice(&verts);
    }
}

/// Build the frame for the current state: score, lives, pause overlay,
/// bricks, paddle, ball.
pub fn build_frame(state: &WorldState, hud: &Hud) -> Frame {
    let mut frame = Frame {
        clear: colors::BACKGROUND,
        texts: Vec::with_capacity(3),
        vertices: Vec::with_capacity((state.bricks.len() + 2) * shapes::QUAD_VERTICES),
    };

    frame.texts.push(TextItem {
        text: hud.score_text.clone(),
        anchor: hud::SCORE_ANCHOR,
        color: colors::TEXT,
    });
    frame.texts.push(TextItem {
        text: hud.lives_text.clone(),
        anchor: hud::LIVES_ANCHOR,
        color: colors::TEXT,
    });
    if state.paused {
        frame.texts.push(TextItem {
            text: hud::PAUSED_TEXT.to_string(),
            anchor: hud::PAUSED_ANCHOR,
            color: colors::TEXT,
        });
    }

    for brick in state.bricks.iter().filter(|b| !b.destroyed) {
        frame.push_quad(shapes::rect(&brick.bounds, colors::BRICK));
    }
    frame.push_quad(shapes::rect(&state.paddle.bounds, colors::PADDLE));
    frame.push_quad(shapes::rect(&state.ball.bounds, colors::BALL));

    frame
}
