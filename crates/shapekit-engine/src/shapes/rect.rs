use crate::paint::Color;

use super::{Primitive, Shape};

/// Axis-aligned rectangle, drawn as two triangles.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rectangle {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub color: Color,
}

impl Rectangle {
    #[inline]
    pub const fn new(x: f32, y: f32, width: f32, height: f32, color: Color) -> Self {
        Self { x, y, width, height, color }
    }
}

impl Shape for Rectangle {
    /// `(x1,y1) (x2,y1) (x1,y2)` then `(x1,y2) (x2,y1) (x2,y2)`.
    fn vertices(&self) -> Vec<f32> {
        let x1 = self.x;
        let x2 = self.x + self.width;
        let y1 = self.y;
        let y2 = self.y + self.height;
        vec![
            x1, y1, //
            x2, y1, //
            x1, y2, //
            x1, y2, //
            x2, y1, //
            x2, y2,
        ]
    }

    fn color(&self) -> Color {
        self.color
    }

    fn primitive(&self) -> Primitive {
        Primitive::Triangles
    }
}

/// Rectangle with equal sides.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Square {
    pub x: f32,
    pub y: f32,
    pub side: f32,
    pub color: Color,
}

impl Square {
    #[inline]
    pub const fn new(x: f32, y: f32, side: f32, color: Color) -> Self {
        Self { x, y, side, color }
    }

    #[inline]
    pub const fn to_rectangle(self) -> Rectangle {
        Rectangle::new(self.x, self.y, self.side, self.side, self.color)
    }
}

impl Shape for Square {
    fn vertices(&self) -> Vec<f32> {
        self.to_rectangle().vertices()
    }

    fn color(&self) -> Color {
        self.color
    }

    fn primitive(&self) -> Primitive {
        Primitive::Triangles
    }
}
