use crate::coords::Viewport;

/// Borrowed GPU handles for one canvas flush.
///
/// Built by `FrameCtx::present` from the window's `Gpu` each frame. The
/// viewport is the logical window size and becomes `u_resolution`.
pub struct RenderCtx<'a> {
    pub device: &'a wgpu::Device,
    pub queue: &'a wgpu::Queue,
    /// Format the shape pipelines are built for; a change rebuilds them.
    pub surface_format: wgpu::TextureFormat,
    pub viewport: Viewport,
}

impl<'a> RenderCtx<'a> {
    #[inline]
    pub fn new(
        device: &'a wgpu::Device,
        queue: &'a wgpu::Queue,
        surface_format: wgpu::TextureFormat,
        viewport: Viewport,
    ) -> Self {
        Self { device, queue, surface_format, viewport }
    }

    /// Value uploaded to `u_resolution` for this flush.
    #[inline]
    pub fn resolution(&self) -> [f32; 2] {
        self.viewport.resolution()
    }
}

/// Surface texture the shapes are drawn onto.
///
/// The frame is already cleared when the canvas flushes, so the shape pass
/// loads `view` instead of clearing it.
pub struct RenderTarget<'a> {
    pub encoder: &'a mut wgpu::CommandEncoder,
    pub view: &'a wgpu::TextureView,
}

impl<'a> RenderTarget<'a> {
    #[inline]
    pub fn new(encoder: &'a mut wgpu::CommandEncoder, view: &'a wgpu::TextureView) -> Self {
        Self { encoder, view }
    }
}
