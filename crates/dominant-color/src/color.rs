//! 8-bit RGBA color type

use std::fmt;

/// An RGBA color with 8 bits per channel.
///
/// Equality and hashing cover all four channels, so two pixels that differ
/// only in alpha are distinct histogram keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Fully opaque color from RGB channels.
    #[inline]
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Scale the color channels by alpha.
    ///
    /// Each channel is widened to 16 bits, multiplied by the 16-bit alpha
    /// and truncated back to 8 bits. Fully transparent pixels all collapse
    /// to `(0, 0, 0, 0)` and alpha is unchanged.
    ///
    /// ```
    /// use dominant_color::Rgba;
    ///
    /// assert_eq!(Rgba::new(255, 0, 0, 128).premultiplied(), Rgba::new(128, 0, 0, 128));
    /// assert_eq!(Rgba::new(10, 20, 30, 0).premultiplied(), Rgba::new(0, 0, 0, 0));
    /// ```
    pub fn premultiplied(self) -> Self {
        let a = u32::from(self.a) * 0x101;
        let scale = |c: u8| ((u32::from(c) * 0x101 * a / 0xffff) >> 8) as u8;
        Self::new(scale(self.r), scale(self.g), scale(self.b), self.a)
    }

    /// Format as `#rrggbb` (lower-case, alpha discarded).
    ///
    /// ```
    /// use dominant_color::Rgba;
    ///
    /// assert_eq!(Rgba::new(255, 0, 128, 7).to_hex(), "#ff0080");
    /// assert_eq!(Rgba::new(0, 0, 0, 0).to_hex(), "#000000");
    /// ```
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}
