use crate::coords::Point;
use crate::paint::Color;

use super::{Primitive, Shape};

/// Straight segment between two points, one pixel wide.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Line {
    pub a: Point,
    pub b: Point,
    pub color: Color,
}

impl Line {
    #[inline]
    pub const fn new(a: Point, b: Point, color: Color) -> Self {
        Self { a, b, color }
    }
}

impl Shape for Line {
    fn vertices(&self) -> Vec<f32> {
        vec![self.a.x, self.a.y, self.b.x, self.b.y]
    }

    fn color(&self) -> Color {
        self.color
    }

    fn primitive(&self) -> Primitive {
        Primitive::LineStrip
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_is_a_two_point_strip() {
        let line = Line::new(Point::new(10.0, 10.0), Point::new(100.0, 100.0), Color::RED);
        assert_eq!(line.vertices(), vec![10.0, 10.0, 100.0, 100.0]);
        assert_eq!(line.vertex_count(), 2);
        assert_eq!(line.primitive(), Primitive::LineStrip);
    }

    #[test]
    fn default_line_is_black() {
        assert_eq!(Line::default().color, Color::new(0.0, 0.0, 0.0, 1.0));
    }
}
