//! dominant-color: exact-color histograms for RGBA rasters
//!
//! This library reduces an in-memory RGBA image to the single color that
//! occurs most often. Colors are compared by exact equality of all four
//! channels; there is no clustering or quantization.
//!
//! # Quick Start
//!
//! ```
//! use dominant_color::{dominant_color, RasterBuffer, Rgba};
//!
//! let red = Rgba::new(255, 0, 0, 255);
//! let blue = Rgba::new(0, 0, 255, 255);
//! let raster = RasterBuffer::new(2, 2, vec![red, red, red, blue]).unwrap();
//!
//! let dominant = dominant_color(&raster);
//! assert_eq!(dominant.color, red);
//! assert_eq!(dominant.count, 3);
//! assert_eq!(dominant.to_hex(), "#ff0000");
//! ```
//!
//! # Tie Breaking
//!
//! Pixels are visited in row-major order (rows top to bottom, pixels left to
//! right). When several colors share the highest count, the one that appears
//! first in that order wins. Results are therefore fully deterministic for a
//! given image.

mod color;
mod error;
mod histogram;
mod raster;

pub use color::Rgba;
pub use error::RasterError;
pub use histogram::{dominant_color, ColorHistogram, DominantColor};
pub use raster::RasterBuffer;
