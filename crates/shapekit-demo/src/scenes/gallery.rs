use shapekit_engine::coords::Point;
use shapekit_engine::paint::Color;
use shapekit_engine::render::Canvas;
use shapekit_engine::shapes::{Circle, Line, Polygon, Rectangle, Shape, Square, Triangle};

use super::Scene;

/// One of every shape type, side by side.
pub struct GalleryScene {
    shapes: Vec<Box<dyn Shape>>,
}

impl Default for GalleryScene {
    fn default() -> Self {
        let shapes: Vec<Box<dyn Shape>> = vec![
            Box::new(Triangle::new(
                Point::new(10.0, 10.0),
                Point::new(10.0, 100.0),
                Point::new(100.0, 100.0),
                Color::RED,
            )),
            Box::new(Line::new(
                Point::new(120.0, 10.0),
                Point::new(220.0, 100.0),
                Color::WHITE,
            )),
            Box::new(Square::new(240.0, 10.0, 90.0, Color::BLUE)),
            Box::new(Rectangle::new(350.0, 10.0, 160.0, 90.0, Color::GREEN)),
            Box::new(Polygon::regular(
                Point::new(80.0, 200.0),
                60.0,
                5,
                Color::rgb(1.0, 0.8, 0.0),
            )),
            Box::new(
                Circle::new(Point::new(240.0, 200.0), 60.0, Color::rgb(0.0, 0.8, 0.8)).filled(),
            ),
        ];
        Self { shapes }
    }
}

impl GalleryScene {
    pub fn shapes(&self) -> &[Box<dyn Shape>] {
        &self.shapes
    }
}

impl Scene for GalleryScene {
    fn name(&self) -> &'static str {
        "gallery"
    }

    fn draw(&self, canvas: &mut Canvas) {
        canvas.draw_shapes(self.shapes.iter().map(|s| s.as_ref()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shapekit_engine::render::ShaderSource;
    use shapekit_engine::shapes::Primitive;

    #[test]
    fn has_one_of_each_primitive_family() {
        let scene = GalleryScene::default();
        let prims: Vec<Primitive> = scene.shapes().iter().map(|s| s.primitive()).collect();
        assert!(prims.contains(&Primitive::Triangles));
        assert!(prims.contains(&Primitive::TriangleFan));
        assert!(prims.contains(&Primitive::LineStrip));
    }

    #[test]
    fn first_shape_is_the_classic_triangle() {
        let scene = GalleryScene::default();
        assert_eq!(
            scene.shapes()[0].vertices(),
            vec![10.0, 10.0, 10.0, 100.0, 100.0, 100.0]
        );
    }

    #[test]
    fn every_shape_is_recorded() {
        let scene = GalleryScene::default();
        let mut canvas = Canvas::new(&ShaderSource::Builtin).unwrap();
        scene.draw(&mut canvas);
        assert_eq!(canvas.len(), scene.shapes().len());
    }
}
