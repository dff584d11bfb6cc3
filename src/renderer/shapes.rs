//! Shape generation for 2D primitives

use super::vertex::Vertex;
use crate::sim::Rect;

/// Vertices per filled rectangle (two triangles)
pub const QUAD_VERTICES: usize = 6;

/// Generate vertices for a filled rectangle
pub fn rect(r: &Rect, color: [f32; 4]) -> [Vertex; QUAD_VERTICES] {
    let (x0, y0) = (r.x, r.y);
    let (x1, y1) = (r.right(), r.bottom());

    [
        Vertex::new(x0, y0, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x1, y1, color),
    ]
}
