//! Drawable shapes.
//!
//! Every shape resolves to a flat `[x0, y0, x1, y1, ...]` coordinate sequence in
//! logical pixels plus a solid color and a primitive type. Shapes never touch the
//! GPU themselves; they are recorded on a [`Canvas`](crate::render::Canvas).
//!
//! Adding a shape:
//! - add a module here with a plain struct
//! - implement [`Shape`] for it
//! - re-export it below

mod circle;
mod line;
mod polygon;
mod rect;
mod texture;

pub use circle::{Circle, CircleStyle, CIRCLE_SEGMENTS};
pub use line::Line;
pub use polygon::{Polygon, Triangle};
pub use rect::{Rectangle, Square};
pub use texture::{Texture, TextureError};

use crate::paint::Color;

/// How a vertex sequence is assembled into primitives.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Primitive {
    /// Independent triangles, three vertices each.
    Triangles,
    /// First vertex shared by every triangle. Expanded to `Triangles` before upload.
    TriangleFan,
    /// Connected line segments.
    LineStrip,
}

/// Common interface of everything a canvas can draw.
pub trait Shape {
    /// Flat coordinate sequence (`x, y` pairs). Must be pure and of even length.
    fn vertices(&self) -> Vec<f32>;

    /// Solid fill (or stroke) color.
    fn color(&self) -> Color;

    /// Primitive used to assemble [`vertices`](Self::vertices).
    fn primitive(&self) -> Primitive;

    #[inline]
    fn vertex_count(&self) -> usize {
        self.vertices().len() / 2
    }
}

/// Expands a triangle fan into an independent triangle list.
///
/// `n` fan vertices produce `3 * (n - 2)` list vertices; fewer than three
/// vertices produce nothing. Coordinates are flat `x, y` pairs in and out.
pub fn fan_to_list(fan: &[f32]) -> Vec<f32> {
    let n = fan.len() / 2;
    if n < 3 {
        return Vec::new();
    }

    let vertex = |i: usize| [fan[2 * i], fan[2 * i + 1]];
    let mut out = Vec::with_capacity(6 * (n - 2));
    for i in 1..n - 1 {
        out.extend_from_slice(&vertex(0));
        out.extend_from_slice(&vertex(i));
        out.extend_from_slice(&vertex(i + 1));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fan_of_a_quad_is_two_triangles() {
        let fan = [0.0, 0.0, 1.0, 0.0, 1.0, 1.0, 0.0, 1.0];
        let list = fan_to_list(&fan);
        assert_eq!(
            list,
            vec![
                0.0, 0.0, 1.0, 0.0, 1.0, 1.0, //
                0.0, 0.0, 1.0, 1.0, 0.0, 1.0,
            ]
        );
    }

    #[test]
    fn fan_vertex_count() {
        let fan: Vec<f32> = (0..14).map(|v| v as f32).collect(); // 7 vertices
        assert_eq!(fan_to_list(&fan).len() / 2, 3 * (7 - 2));
    }

    #[test]
    fn degenerate_fan_is_empty() {
        assert!(fan_to_list(&[]).is_empty());
        assert!(fan_to_list(&[1.0, 2.0, 3.0, 4.0]).is_empty());
    }
}
