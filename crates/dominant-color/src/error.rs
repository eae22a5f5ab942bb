//! Error type for raster construction

use std::fmt;

/// Error type for raster construction.
///
/// A [`RasterBuffer`](crate::RasterBuffer) always holds at least one pixel,
/// so zero-sized dimensions are rejected up front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RasterError {
    /// Width or height is zero
    EmptyDimensions {
        /// Requested width
        width: u32,
        /// Requested height
        height: u32,
    },
    /// Pixel data does not match the requested dimensions
    LengthMismatch {
        /// Number of elements required by `width * height`
        expected: usize,
        /// Number of elements supplied
        actual: usize,
    },
}

impl fmt::Display for RasterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RasterError::EmptyDimensions { width, height } => {
                write!(f, "raster must not be empty (got {}x{})", width, height)
            }
            RasterError::LengthMismatch { expected, actual } => {
                write!(
                    f,
                    "pixel data length mismatch: expected {}, got {}",
                    expected, actual
                )
            }
        }
    }
}

impl std::error::Error for RasterError {}
