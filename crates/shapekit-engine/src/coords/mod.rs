//! Coordinate types shared across shapes and renderers.
//!
//! Canonical CPU space:
//! - Logical pixels (DPI-aware)
//! - Origin top-left
//! - +X right, +Y down
//!
//! Renderers convert to NDC in shaders using the `u_resolution` uniform.

mod point;
mod viewport;

pub use point::Point;
pub use viewport::Viewport;
