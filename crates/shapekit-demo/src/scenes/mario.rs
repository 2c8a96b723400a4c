use shapekit_engine::paint::Color;
use shapekit_engine::render::Canvas;
use shapekit_engine::shapes::Rectangle;

use super::Scene;

/// Edge of one pixel-art cell, in logical pixels.
pub const CELL: f32 = 23.0;

const RED: Color = Color::rgb(1.0, 0.0, 0.0);
const SKIN: Color = Color::rgb(0.97, 0.67, 0.0);
const BROWN: Color = Color::rgb(0.44, 0.4, 0.0);

type Cells = (u8, u8, u8, u8);

const CAP: &[Cells] = &[(3, 0, 5, 1), (2, 1, 9, 1)];

const FACE: &[Cells] = &[(2, 2, 7, 3), (9, 3, 2, 2), (11, 4, 1, 1), (3, 5, 7, 2)];

const HAIR: &[Cells] = &[
    (2, 2, 3, 1),
    (3, 3, 1, 2),
    (4, 4, 1, 1),
    (1, 3, 1, 3),
    (2, 5, 1, 1),
    (7, 2, 1, 2),
    (8, 4, 1, 1),
    (7, 5, 4, 1),
];

const OVERALLS: &[Cells] = &[(3, 8, 6, 5), (4, 7, 1, 1), (2, 12, 3, 2), (7, 12, 3, 2)];

const SHIRT: &[Cells] = &[
    (2, 7, 2, 3),
    (1, 8, 1, 2),
    (0, 9, 1, 1),
    (2, 10, 1, 1),
    (5, 7, 3, 1),
    (5, 8, 2, 1),
    (8, 8, 3, 2),
    (11, 9, 1, 1),
    (9, 10, 1, 1),
];

const HANDS: &[Cells] = &[
    (0, 10, 2, 3),
    (2, 11, 1, 1),
    (4, 10, 1, 1),
    (7, 10, 1, 1),
    (9, 11, 1, 1),
    (10, 10, 2, 3),
];

const FEET: &[Cells] = &[(1, 14, 3, 1), (8, 14, 3, 1), (0, 15, 4, 1), (8, 15, 4, 1)];

/// Pixel-art plumber built from rectangles, painted back to front.
#[derive(Debug, Clone)]
pub struct MarioScene {
    rects: Vec<Rectangle>,
}

impl Default for MarioScene {
    fn default() -> Self {
        Self::with_cell(CELL)
    }
}

impl MarioScene {
    pub fn with_cell(cell: f32) -> Self {
        let layers: [(&[Cells], Color); 7] = [
            (CAP, RED),
            (FACE, SKIN),
            (HAIR, BROWN),
            (OVERALLS, RED),
            (SHIRT, BROWN),
            (HANDS, SKIN),
            (FEET, BROWN),
        ];

        let rects = layers
            .iter()
            .flat_map(|(cells, color)| {
                cells.iter().map(move |&(x, y, w, h)| {
                    Rectangle::new(
                        x as f32 * cell,
                        y as f32 * cell,
                        w as f32 * cell,
                        h as f32 * cell,
                        *color,
                    )
                })
            })
            .collect();

        Self { rects }
    }

    pub fn rects(&self) -> &[Rectangle] {
        &self.rects
    }
}

impl Scene for MarioScene {
    fn name(&self) -> &'static str {
        "mario"
    }

    fn draw(&self, canvas: &mut Canvas) {
        canvas.draw_shapes(&self.rects);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shapekit_engine::render::ShaderSource;

    #[test]
    fn builds_every_cell_group() {
        let scene = MarioScene::default();
        assert_eq!(scene.rects().len(), 2 + 4 + 8 + 4 + 9 + 6 + 4);
    }

    #[test]
    fn cap_comes_first_in_cell_units() {
        let scene = MarioScene::default();
        let cap = scene.rects()[0];
        assert_eq!(cap.x, 3.0 * CELL);
        assert_eq!(cap.y, 0.0);
        assert_eq!(cap.width, 5.0 * CELL);
        assert_eq!(cap.height, CELL);
        assert_eq!(cap.color, RED);
    }

    #[test]
    fn figure_fits_twelve_by_sixteen_cells() {
        let scene = MarioScene::with_cell(1.0);
        let right = scene.rects().iter().map(|r| r.x + r.width).fold(0.0, f32::max);
        let bottom = scene.rects().iter().map(|r| r.y + r.height).fold(0.0, f32::max);
        assert_eq!(right, 12.0);
        assert_eq!(bottom, 16.0);
    }

    #[test]
    fn records_one_draw_per_rect() {
        let scene = MarioScene::default();
        let mut canvas = Canvas::new(&ShaderSource::Builtin).unwrap();
        scene.draw(&mut canvas);
        assert_eq!(canvas.len(), scene.rects().len());
    }
}
