//! shapekit engine crate.
//!
//! 2D shapes (polygons, rectangles, circles, lines) recorded on a [`render::Canvas`]
//! and drawn with wgpu inside a winit window.

pub mod device;
pub mod window;
pub mod input;
pub mod core;

pub mod logging;
pub mod coords;
pub mod render;
pub mod paint;
pub mod shapes;
pub mod scene;
