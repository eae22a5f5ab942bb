//! In-memory RGBA raster

use crate::color::Rgba;
use crate::error::RasterError;

/// A width x height grid of RGBA pixels in row-major order.
///
/// A `RasterBuffer` is never empty: every constructor rejects zero-sized
/// dimensions, which lets [`dominant_color`](crate::dominant_color) be
/// infallible.
///
/// # Example
///
/// ```
/// use dominant_color::{RasterBuffer, Rgba};
///
/// let raster = RasterBuffer::filled(3, 2, Rgba::opaque(0, 128, 0));
/// assert_eq!(raster.pixel_count(), 6);
/// assert_eq!(raster.pixel(2, 1), Some(Rgba::opaque(0, 128, 0)));
/// assert_eq!(raster.pixel(3, 0), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterBuffer {
    width: u32,
    height: u32,
    pixels: Vec<Rgba>,
}

impl RasterBuffer {
    /// Create a raster from row-major pixels.
    pub fn new(width: u32, height: u32, pixels: Vec<Rgba>) -> Result<Self, RasterError> {
        let expected = checked_len(width, height)?;
        if pixels.len() != expected {
            return Err(RasterError::LengthMismatch {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Create a raster from packed RGBA8 bytes (4 bytes per pixel).
    ///
    /// The byte layout matches `image::RgbaImage` and PNG RGBA8 scanlines.
    pub fn from_rgba8(width: u32, height: u32, data: &[u8]) -> Result<Self, RasterError> {
        let expected = checked_len(width, height)?;
        if data.len() != expected * 4 {
            return Err(RasterError::LengthMismatch {
                expected: expected * 4,
                actual: data.len(),
            });
        }
        let pixels = data
            .chunks_exact(4)
            .map(|p| Rgba::new(p[0], p[1], p[2], p[3]))
            .collect();
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Create a raster where every pixel has the same color.
    ///
    /// # Panics
    ///
    /// Panics if `width` or `height` is zero.
    pub fn filled(width: u32, height: u32, color: Rgba) -> Self {
        assert!(width > 0 && height > 0, "raster must not be empty");
        Self {
            width,
            height,
            pixels: vec![color; width as usize * height as usize],
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of pixels (always at least one).
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.pixels.len()
    }

    /// Pixel at `(x, y)`, or `None` when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }

    /// Iterate over rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Rgba]> {
        self.pixels.chunks_exact(self.width as usize)
    }

    /// Convert every pixel to premultiplied alpha.
    ///
    /// See [`Rgba::premultiplied`].
    pub fn premultiplied(mut self) -> Self {
        for pixel in &mut self.pixels {
            *pixel = pixel.premultiplied();
        }
        self
    }
}

fn checked_len(width: u32, height: u32) -> Result<usize, RasterError> {
    if width == 0 || height == 0 {
        return Err(RasterError::EmptyDimensions { width, height });
    }
    Ok(width as usize * height as usize)
}
