use crate::coords::Point;
use crate::paint::Color;

use super::{Primitive, Shape};

/// Number of angular steps used to approximate a circle.
pub const CIRCLE_SEGMENTS: usize = 360;

/// How a circle is rasterized.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum CircleStyle {
    /// Closed line strip along the circumference.
    #[default]
    Outline,
    /// Solid disc, drawn as a fan around the center.
    Filled,
}

#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Circle {
    pub center: Point,
    pub radius: f32,
    pub color: Color,
    pub style: CircleStyle,
}

impl Circle {
    #[inline]
    pub const fn new(center: Point, radius: f32, color: Color) -> Self {
        Self { center, radius, color, style: CircleStyle::Outline }
    }

    #[inline]
    pub const fn filled(mut self) -> Self {
        self.style = CircleStyle::Filled;
        self
    }

    /// True when the two discs overlap. Touching circles do not intersect.
    ///
    /// Compares squared quantities on both sides, so no square root is taken.
    #[inline]
    pub fn intersects(&self, other: &Circle) -> bool {
        let reach = self.radius + other.radius;
        reach * reach > self.center.squared_distance(other.center)
    }

    /// Point on the circumference at sample `i` of [`CIRCLE_SEGMENTS`].
    fn sample(&self, i: usize) -> [f32; 2] {
        let angle = i as f32 * std::f32::consts::TAU / CIRCLE_SEGMENTS as f32;
        [
            self.center.x + angle.cos() * self.radius,
            self.center.y + angle.sin() * self.radius,
        ]
    }
}

impl Shape for Circle {
    fn vertices(&self) -> Vec<f32> {
        let mut out = Vec::with_capacity(2 * (CIRCLE_SEGMENTS + 2));
        if self.style == CircleStyle::Filled {
            out.extend_from_slice(&[self.center.x, self.center.y]);
        }
        // Inclusive upper bound closes the ring; the last sample lands on the first.
        for i in 0..=CIRCLE_SEGMENTS {
            out.extend_from_slice(&self.sample(i));
        }
        out
    }

    fn color(&self) -> Color {
        self.color
    }

    fn primitive(&self) -> Primitive {
        match self.style {
            CircleStyle::Outline => Primitive::LineStrip,
            CircleStyle::Filled => Primitive::TriangleFan,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(x: f32, y: f32, r: f32) -> Circle {
        Circle::new(Point::new(x, y), r, Color::default())
    }

    // ── intersection ──────────────────────────────────────────────────────

    #[test]
    fn overlapping_circles_intersect() {
        assert!(at(0.0, 0.0, 50.0).intersects(&at(100.0, 0.0, 70.0)));
    }

    #[test]
    fn distant_circles_do_not_intersect() {
        assert!(!at(0.0, 0.0, 10.0).intersects(&at(100.0, 0.0, 10.0)));
    }

    #[test]
    fn touching_circles_do_not_intersect() {
        assert!(!at(0.0, 0.0, 30.0).intersects(&at(50.0, 0.0, 20.0)));
    }

    #[test]
    fn intersection_matches_squared_rule() {
        for d in [0.0f32, 10.0, 59.0, 60.0, 61.0, 120.0] {
            for (r1, r2) in [(10.0f32, 50.0f32), (30.0, 30.0), (0.0, 1.0)] {
                let expected = (r1 + r2) * (r1 + r2) > d * d;
                assert_eq!(at(0.0, 0.0, r1).intersects(&at(d, 0.0, r2)), expected, "d={d} r1={r1} r2={r2}");
            }
        }
    }

    #[test]
    fn intersection_is_symmetric() {
        let a = at(100.0, 100.0, 50.0);
        let b = at(200.0, 200.0, 70.0);
        assert_eq!(a.intersects(&b), b.intersects(&a));
    }

    // ── vertices ──────────────────────────────────────────────────────────

    #[test]
    fn outline_is_closed_ring() {
        let c = at(100.0, 100.0, 50.0);
        let v = c.vertices();
        assert_eq!(v.len(), 2 * (CIRCLE_SEGMENTS + 1));
        assert_eq!(c.primitive(), Primitive::LineStrip);

        let n = v.len();
        assert!((v[0] - v[n - 2]).abs() < 1e-3);
        assert!((v[1] - v[n - 1]).abs() < 1e-3);
        assert_eq!((v[0], v[1]), (150.0, 100.0));
    }

    #[test]
    fn samples_lie_on_the_circumference() {
        let c = at(-20.0, 35.0, 12.5);
        for pair in c.vertices().chunks_exact(2) {
            let d = Point::new(pair[0], pair[1]).distance(c.center);
            assert!((d - 12.5).abs() < 1e-3);
        }
    }

    #[test]
    fn filled_circle_starts_at_center() {
        let c = at(10.0, 20.0, 5.0).filled();
        let v = c.vertices();
        assert_eq!(c.primitive(), Primitive::TriangleFan);
        assert_eq!(v.len(), 2 * (CIRCLE_SEGMENTS + 2));
        assert_eq!((v[0], v[1]), (10.0, 20.0));
    }
}
