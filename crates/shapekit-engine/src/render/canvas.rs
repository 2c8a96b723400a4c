use crate::scene::DrawList;
use crate::shapes::Shape;

use super::program::{ShaderProgram, ShaderError, ShaderSource};
use super::renderer::ShapeRenderer;
use super::{RenderCtx, RenderTarget};

/// Rendering context handed to applications.
///
/// Owns the single shape program for its whole lifetime. Applications record
/// shapes with [`draw_shape`](Self::draw_shape); the runtime flushes them to
/// the surface when the frame is presented.
pub struct Canvas {
    renderer: ShapeRenderer,
    draw_list: DrawList,
}

impl Canvas {
    /// Compiles and link-checks the shader. Fails instead of yielding a canvas
    /// that would break on first use.
    pub fn new(source: &ShaderSource) -> Result<Self, ShaderError> {
        let program = ShaderProgram::compile(source)?;
        log::info!("canvas ready ({})", program.label());
        Ok(Self {
            renderer: ShapeRenderer::new(program),
            draw_list: DrawList::new(),
        })
    }

    #[inline]
    pub fn program(&self) -> &ShaderProgram {
        self.renderer.program()
    }

    /// Records `shape` for the current frame. Later shapes paint over earlier ones.
    pub fn draw_shape<S: Shape + ?Sized>(&mut self, shape: &S) {
        self.draw_list.push_shape(shape);
    }

    pub fn draw_shapes<'s, S, I>(&mut self, shapes: I)
    where
        S: Shape + ?Sized + 's,
        I: IntoIterator<Item = &'s S>,
    {
        for shape in shapes {
            self.draw_list.push_shape(shape);
        }
    }

    /// Discards everything recorded since the last flush.
    #[inline]
    pub fn clear(&mut self) {
        self.draw_list.clear();
    }

    #[inline]
    pub fn draw_list(&self) -> &DrawList {
        &self.draw_list
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.draw_list.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.draw_list.is_empty()
    }

    /// Renders the recorded shapes into `target` and starts a fresh recording.
    pub fn flush(&mut self, ctx: &RenderCtx<'_>, target: &mut RenderTarget<'_>) {
        self.renderer.render(ctx, target, &self.draw_list);
        self.draw_list.clear();
    }
}
