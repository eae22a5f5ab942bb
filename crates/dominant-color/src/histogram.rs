//! Exact-color histogram and dominant color reduction
//!
//! The histogram keeps its keys in first-seen order. Reducing it with a
//! strict `>` comparison therefore returns, among all colors sharing the
//! highest count, the one whose first pixel comes earliest in row-major
//! order.

use indexmap::IndexMap;

use crate::color::Rgba;
use crate::raster::RasterBuffer;

/// The most frequent color of a raster and how many pixels carry it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DominantColor {
    pub color: Rgba,
    pub count: usize,
}

impl DominantColor {
    /// `#rrggbb` form of the color (alpha discarded).
    pub fn to_hex(&self) -> String {
        self.color.to_hex()
    }
}

/// Mapping from exact RGBA value to pixel count.
#[derive(Debug, Clone, Default)]
pub struct ColorHistogram {
    counts: IndexMap<Rgba, usize>,
    total: usize,
}

impl ColorHistogram {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count every pixel of `raster`, rows top to bottom, left to right.
    pub fn from_raster(raster: &RasterBuffer) -> Self {
        let mut histogram = Self::new();
        for row in raster.rows() {
            for &pixel in row {
                histogram.add(pixel);
            }
        }
        histogram
    }

    #[inline]
    pub fn add(&mut self, color: Rgba) {
        *self.counts.entry(color).or_insert(0) += 1;
        self.total += 1;
    }

    /// Occurrences of `color` (zero when never seen).
    pub fn count(&self, color: Rgba) -> usize {
        self.counts.get(&color).copied().unwrap_or(0)
    }

    /// Number of distinct colors.
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// Number of pixels counted.
    pub fn total(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Colors and counts in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (Rgba, usize)> + '_ {
        self.counts.iter().map(|(&color, &count)| (color, count))
    }

    /// Color with the highest count, first-seen on ties.
    ///
    /// Returns `None` only for an empty histogram.
    pub fn dominant(&self) -> Option<DominantColor> {
        let mut best: Option<DominantColor> = None;
        for (color, count) in self.iter() {
            // Strict comparison keeps the earlier color on ties
            if best.map_or(true, |b| count > b.count) {
                best = Some(DominantColor { color, count });
            }
        }
        best
    }
}

/// Reduce a raster to its most frequent exact color.
///
/// Every pixel is visited once in row-major order. On ties, the color whose
/// first occurrence comes earliest wins.
pub fn dominant_color(raster: &RasterBuffer) -> DominantColor {
    ColorHistogram::from_raster(raster)
        .dominant()
        .expect("a non-empty raster always has a dominant color")
}
