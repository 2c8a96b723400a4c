use crate::coords::Point;
use crate::paint::Color;

use super::{Primitive, Shape};

/// Arbitrary polygon drawn as a triangle fan around its first point.
///
/// Convex polygons (and star-shaped ones seen from the first point) render
/// correctly; no triangulation is attempted for other outlines.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polygon {
    pub color: Color,
    pub points: Vec<Point>,
}

impl Polygon {
    #[inline]
    pub fn new(color: Color, points: Vec<Point>) -> Self {
        Self { color, points }
    }

    /// Regular polygon with `sides` corners on a circle of `radius`, first corner straight up.
    pub fn regular(center: Point, radius: f32, sides: usize, color: Color) -> Self {
        let step = std::f32::consts::TAU / sides.max(1) as f32;
        let points = (0..sides)
            .map(|i| {
                let angle = i as f32 * step - std::f32::consts::FRAC_PI_2;
                Point::new(center.x + radius * angle.cos(), center.y + radius * angle.sin())
            })
            .collect();
        Self::new(color, points)
    }
}

impl Shape for Polygon {
    fn vertices(&self) -> Vec<f32> {
        self.points.iter().flat_map(|p| [p.x, p.y]).collect()
    }

    fn color(&self) -> Color {
        self.color
    }

    fn primitive(&self) -> Primitive {
        Primitive::TriangleFan
    }
}

/// Triangle through three points.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Triangle {
    pub a: Point,
    pub b: Point,
    pub c: Point,
    pub color: Color,
}

impl Triangle {
    #[inline]
    pub const fn new(a: Point, b: Point, c: Point, color: Color) -> Self {
        Self { a, b, c, color }
    }
}

impl Shape for Triangle {
    fn vertices(&self) -> Vec<f32> {
        vec![self.a.x, self.a.y, self.b.x, self.b.y, self.c.x, self.c.y]
    }

    fn color(&self) -> Color {
        self.color
    }

    // A single triangle covers the same pixels as a three-vertex fan.
    fn primitive(&self) -> Primitive {
        Primitive::Triangles
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn polygon_flattens_points_in_order() {
        let poly = Polygon::new(
            Color::WHITE,
            vec![Point::new(1.0, 2.0), Point::new(3.0, 4.0), Point::new(5.0, 6.0), Point::new(7.0, 8.0)],
        );
        assert_eq!(poly.vertices(), vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]);
        assert_eq!(poly.vertex_count(), 4);
        assert_eq!(poly.primitive(), Primitive::TriangleFan);
    }

    #[test]
    fn empty_polygon_has_no_vertices() {
        let poly = Polygon::new(Color::default(), Vec::new());
        assert!(poly.vertices().is_empty());
        assert_eq!(poly.vertex_count(), 0);
    }

    #[test]
    fn regular_polygon_has_one_point_per_side() {
        let pentagon = Polygon::regular(Point::new(50.0, 50.0), 10.0, 5, Color::BLUE);
        assert_eq!(pentagon.points.len(), 5);
        // First corner points up (-Y in screen space).
        assert!((pentagon.points[0].x - 50.0).abs() < 1e-4);
        assert!((pentagon.points[0].y - 40.0).abs() < 1e-4);
        for p in &pentagon.points {
            assert!((p.distance(Point::new(50.0, 50.0)) - 10.0).abs() < 1e-3);
        }
    }

    #[test]
    fn triangle_keeps_point_order() {
        let t = Triangle::new(
            Point::new(10.0, 10.0),
            Point::new(10.0, 100.0),
            Point::new(100.0, 100.0),
            Color::RED,
        );
        assert_eq!(t.vertices(), vec![10.0, 10.0, 10.0, 100.0, 100.0, 100.0]);
        assert_eq!(t.vertex_count(), 3);
    }
}
