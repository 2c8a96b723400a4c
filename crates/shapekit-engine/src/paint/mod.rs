//! Paint model shared between shapes and renderers.
//!
//! Shapes are filled with a single solid color; geometry types remain in `coords`.

pub mod color;

pub use color::Color;
