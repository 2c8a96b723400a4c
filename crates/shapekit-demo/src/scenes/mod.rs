//! Demo scenes.
//!
//! A scene owns its shapes, reacts to movement commands, and records itself on
//! the canvas every frame.

mod collision;
mod gallery;
mod mario;

pub use collision::CollisionScene;
pub use gallery::GalleryScene;
pub use mario::MarioScene;

use shapekit_engine::input::MoveCommand;
use shapekit_engine::render::Canvas;

pub trait Scene {
    fn name(&self) -> &'static str;

    /// Applies one movement command. Static scenes ignore input.
    fn apply(&mut self, cmd: MoveCommand) {
        let _ = cmd;
    }

    /// Short status line shown next to the window title. Empty means nothing to report.
    fn status(&self) -> &str {
        ""
    }

    fn draw(&self, canvas: &mut Canvas);
}

/// All scenes in cycling order.
pub fn all() -> Vec<Box<dyn Scene>> {
    vec![
        Box::new(CollisionScene::default()),
        Box::new(GalleryScene::default()),
        Box::new(MarioScene::default()),
    ]
}
