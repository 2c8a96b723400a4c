use std::fmt;
use std::path::{Path, PathBuf};

/// Decoded RGBA8 image.
///
/// Textures are loaded eagerly and kept on the CPU; the canvas has no sampling
/// pipeline, so a texture is a resource for applications rather than a [`Shape`](super::Shape).
#[derive(Debug, Clone, PartialEq)]
pub struct Texture {
    source: Option<PathBuf>,
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Texture {
    /// Loads and decodes an image file. The format is guessed from the contents.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, TextureError> {
        let path = path.as_ref();
        let image = image::open(path).map_err(|e| TextureError::new(Some(path), e))?;
        let rgba = image.to_rgba8();
        log::debug!("loaded texture {} ({}x{})", path.display(), rgba.width(), rgba.height());

        Ok(Self {
            source: Some(path.to_path_buf()),
            width: rgba.width(),
            height: rgba.height(),
            pixels: rgba.into_raw(),
        })
    }

    /// Decodes an in-memory encoded image (PNG, JPEG, BMP).
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, TextureError> {
        let image = image::load_from_memory(bytes).map_err(|e| TextureError::new(None, e))?;
        let rgba = image.to_rgba8();

        Ok(Self {
            source: None,
            width: rgba.width(),
            height: rgba.height(),
            pixels: rgba.into_raw(),
        })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Row-major RGBA8 pixels, `width * height * 4` bytes.
    #[inline]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// File the texture was loaded from, if any.
    #[inline]
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// RGBA of the pixel at `(x, y)`, or `None` outside the image.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = pixel_offset(self.width, x, y)?;
        let px = self.pixels.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }
}

/// Byte offset of `(x, y)` in a row-major RGBA8 buffer. Computed in `u64` so
/// large images cannot overflow; `None` if it does not fit `usize`.
fn pixel_offset(width: u32, x: u32, y: u32) -> Option<usize> {
    let i = (u64::from(y) * u64::from(width) + u64::from(x)) * 4;
    usize::try_from(i).ok()
}

/// Failure to read or decode a texture.
#[derive(Debug)]
pub struct TextureError {
    pub path: Option<PathBuf>,
    pub source: image::ImageError,
}

impl TextureError {
    fn new(path: Option<&Path>, source: image::ImageError) -> Self {
        Self { path: path.map(Path::to_path_buf), source }
    }
}

impl fmt::Display for TextureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.path {
            Some(p) => write!(f, "failed to load texture {}: {}", p.display(), self.source),
            None => write!(f, "failed to decode texture: {}", self.source),
        }
    }
}

impl std::error::Error for TextureError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pixel_offset_of_huge_images_does_not_wrap() {
        // 40000 x 40000 RGBA is 6.4e9 bytes, past u32::MAX.
        let last = pixel_offset(40_000, 39_999, 39_999).map(|i| i as u64);
        if usize::BITS >= 64 {
            assert_eq!(last, Some((40_000u64 * 40_000 - 1) * 4));
        } else {
            assert_eq!(last, None);
        }
        assert_eq!(pixel_offset(2, 1, 1), Some(12));
    }
    use std::io::Cursor;

    fn png_2x1() -> Vec<u8> {
        let mut img = image::RgbaImage::new(2, 1);
        img.put_pixel(0, 0, image::Rgba([255, 0, 0, 255]));
        img.put_pixel(1, 0, image::Rgba([0, 255, 0, 128]));

        let mut bytes = Vec::new();
        image::DynamicImage::ImageRgba8(img)
            .write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
            .unwrap();
        bytes
    }

    #[test]
    fn decodes_png_bytes() {
        let tex = Texture::from_bytes(&png_2x1()).unwrap();
        assert_eq!((tex.width(), tex.height()), (2, 1));
        assert_eq!(tex.pixels().len(), 8);
        assert_eq!(tex.pixel(0, 0), Some([255, 0, 0, 255]));
        assert_eq!(tex.pixel(1, 0), Some([0, 255, 0, 128]));
        assert_eq!(tex.pixel(2, 0), None);
        assert!(tex.source().is_none());
    }

    #[test]
    fn garbage_bytes_are_an_error() {
        let err = Texture::from_bytes(b"definitely not an image").unwrap_err();
        assert!(err.path.is_none());
        assert!(err.to_string().starts_with("failed to decode texture"));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = Texture::open("/nonexistent/shapekit/mario.png").unwrap_err();
        assert_eq!(err.path.as_deref(), Some(Path::new("/nonexistent/shapekit/mario.png")));
    }

    #[test]
    fn open_round_trips_through_a_file() {
        let path = std::env::temp_dir().join(format!("shapekit-texture-{}.png", std::process::id()));
        std::fs::write(&path, png_2x1()).unwrap();
        let tex = Texture::open(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(tex.source(), Some(path.as_path()));
        assert_eq!(tex.pixel(0, 0), Some([255, 0, 0, 255]));
    }
}
