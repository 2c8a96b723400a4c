/// Viewport size in logical pixels.
///
/// Uploaded as `u_resolution`; shaders divide logical positions by it to reach NDC.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Resolution as uploaded to the GPU. Never zero, so the shader division is safe.
    #[inline]
    pub fn resolution(self) -> [f32; 2] {
        [self.width.max(1.0), self.height.max(1.0)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolution_is_the_logical_size() {
        assert_eq!(Viewport::new(800.0, 600.0).resolution(), [800.0, 600.0]);
    }

    #[test]
    fn minimized_window_never_uploads_zero() {
        assert_eq!(Viewport::new(0.0, 0.0).resolution(), [1.0, 1.0]);
        assert_eq!(Viewport::default().resolution(), [1.0, 1.0]);
    }
}
