//! GPU rendering subsystem.
//!
//! Shapes are recorded on a [`Canvas`] and flushed once per frame through a
//! [`ShapeRenderer`], which issues one draw call per shape via wgpu.
//!
//! Convention:
//! - CPU geometry is in logical pixels (top-left origin, +Y down).
//! - The vertex shader converts to NDC using the `u_resolution` uniform.

mod canvas;
mod ctx;
mod program;
mod renderer;

pub use canvas::Canvas;
pub use ctx::{RenderCtx, RenderTarget};
pub use program::{
    ShaderError, ShaderProgram, ShaderSource, COLOR_UNIFORM, FRAGMENT_ENTRY, POSITION_ATTRIBUTE,
    RESOLUTION_UNIFORM, VERTEX_ENTRY,
};
pub use renderer::ShapeRenderer;
