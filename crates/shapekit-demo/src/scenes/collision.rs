use shapekit_engine::coords::Point;
use shapekit_engine::input::MoveCommand;
use shapekit_engine::paint::Color;
use shapekit_engine::render::Canvas;
use shapekit_engine::shapes::Circle;

use super::Scene;

pub const COLLISION_STATUS: &str = "collision";

/// Two translucent circles; the first one moves with the keyboard.
#[derive(Debug, Clone)]
pub struct CollisionScene {
    tracked: Circle,
    obstacle: Circle,
    colliding: bool,
}

impl Default for CollisionScene {
    fn default() -> Self {
        Self {
            tracked: Circle::new(Point::new(100.0, 100.0), 50.0, Color::new(1.0, 0.0, 0.0, 0.5)),
            obstacle: Circle::new(Point::new(200.0, 200.0), 70.0, Color::new(0.0, 1.0, 0.0, 0.5)),
            colliding: false,
        }
    }
}

impl CollisionScene {
    pub fn tracked(&self) -> &Circle {
        &self.tracked
    }

    pub fn obstacle(&self) -> &Circle {
        &self.obstacle
    }

    pub fn is_colliding(&self) -> bool {
        self.colliding
    }
}

impl Scene for CollisionScene {
    fn name(&self) -> &'static str {
        "collision"
    }

    // Move first, then test against the new position.
    fn apply(&mut self, cmd: MoveCommand) {
        self.tracked.center += cmd.offset;
        self.colliding = self.tracked.intersects(&self.obstacle);
    }

    fn status(&self) -> &str {
        if self.colliding { COLLISION_STATUS } else { "" }
    }

    fn draw(&self, canvas: &mut Canvas) {
        canvas.draw_shape(&self.tracked);
        canvas.draw_shape(&self.obstacle);
    }
}
