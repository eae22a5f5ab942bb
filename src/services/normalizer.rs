use std::path::{Path, PathBuf};

use crate::error::ConversionError;
use crate::models::RunConfig;
use crate::rendering::{encode_rgba_png, SvgCanvas, SvgRenderer};

/// Encoding family of an icon, decided by its file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    /// `svg`: rasterized before decoding
    Vector,
    /// `jpg`, `jpeg`: re-encoded losslessly before decoding
    LossyRaster,
    /// Anything else, decoded as-is
    Raster,
}

impl SourceFormat {
    /// Classify by extension (case-sensitive)
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("svg") => Self::Vector,
            Some("jpg") | Some("jpeg") => Self::LossyRaster,
            _ => Self::Raster,
        }
    }

    /// Whether a sibling PNG is produced before decoding
    pub fn needs_conversion(self) -> bool {
        !matches!(self, Self::Raster)
    }
}

/// `<path>.png`, appended rather than replacing the extension
pub fn sibling_png_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(".png");
    PathBuf::from(name)
}

/// Turns any supported icon into a file the generic raster decoder can read
pub struct Normalizer {
    svg_renderer: SvgRenderer,
    canvas: SvgCanvas,
}

impl Normalizer {
    pub fn new(svg_renderer: SvgRenderer, canvas: SvgCanvas) -> Self {
        Self {
            svg_renderer,
            canvas,
        }
    }

    pub fn from_config(config: &RunConfig) -> Self {
        Self::new(
            SvgRenderer::new(),
            SvgCanvas {
                scale: config.effective_svg_scale(),
                default_size: config.svg_default_size,
            },
        )
    }

    /// Path of the raster to decode for `path`
    ///
    /// Vector and lossy inputs are converted to a sibling PNG whose path is
    /// returned; other files are returned unchanged without touching disk.
    pub fn normalize(&self, path: &Path) -> Result<PathBuf, ConversionError> {
        match SourceFormat::from_path(path) {
            SourceFormat::Vector => self.convert_svg(path),
            SourceFormat::LossyRaster => convert_lossy(path),
            SourceFormat::Raster => Ok(path.to_path_buf()),
        }
    }

    fn convert_svg(&self, path: &Path) -> Result<PathBuf, ConversionError> {
        let svg_data = std::fs::read(path)?;
        let png_bytes = self.svg_renderer.render_to_png(&svg_data, self.canvas)?;
        let output = sibling_png_path(path);
        std::fs::write(&output, png_bytes)?;
        tracing::debug!(input = %path.display(), output = %output.display(), "Converted SVG to PNG");
        Ok(output)
    }
}

/// Re-encode as PNG; the decoder is chosen from the content, not the name
fn convert_lossy(path: &Path) -> Result<PathBuf, ConversionError> {
    let image = image::ImageReader::open(path)?
        .with_guessed_format()?
        .decode()?
        .to_rgba8();
    let png_bytes = encode_rgba_png(image.width(), image.height(), image.as_raw())?;
    let output = sibling_png_path(path);
    std::fs::write(&output, png_bytes)?;
    tracing::debug!(input = %path.display(), output = %output.display(), "Converted JPEG to PNG");
    Ok(output)
}
