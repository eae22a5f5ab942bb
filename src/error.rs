use std::path::PathBuf;

use dominant_color::RasterError;
use thiserror::Error;

/// Failure converting one icon into a PNG the decoder can read.
///
/// These are recoverable: the batch logs them and moves on to the next file.
#[derive(Debug, Error)]
pub enum ConversionError {
    #[error("SVG parse error: {0}")]
    SvgParse(String),

    #[error("Failed to allocate {width}x{height} pixmap")]
    PixmapAllocation { width: u32, height: u32 },

    #[error("Image decode error: {0}")]
    Decode(#[from] image::ImageError),

    #[error("PNG encode error: {0}")]
    PngEncode(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Failure loading or saving the fingerprint database. Always fatal.
#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("Failed to read database {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse database {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Failed to serialize database: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("Failed to write database {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Failure that aborts the whole run.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("Failed to read directory {}: {source}", path.display())]
    ReadDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to decode image {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("Failed to rasterize image {}: {source}", path.display())]
    Rasterize {
        path: PathBuf,
        source: RasterError,
    },

    #[error("Output database must differ from input database: {}", .0.display())]
    SameDatabasePath(PathBuf),

    #[error(transparent)]
    Database(#[from] DatabaseError),
}
