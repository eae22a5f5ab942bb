use crate::error::ConversionError;
use crate::models::DEFAULT_SVG_CANVAS;
use crate::rendering::encode::{encode_rgba_png, pixmap_to_rgba};
use resvg::usvg::{self, Transform};
use std::sync::Arc;
use tiny_skia::Pixmap;

/// Largest canvas edge we are willing to allocate
const MAX_CANVAS_EDGE: u32 = 16_384;

/// How an SVG's intrinsic size maps onto the output canvas
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SvgCanvas {
    /// Multiplier applied to the SVG's width and height
    pub scale: f32,
    /// Square canvas edge used when the scaled size rounds to zero
    pub default_size: u32,
}

impl Default for SvgCanvas {
    fn default() -> Self {
        Self {
            scale: 1.0,
            default_size: DEFAULT_SVG_CANVAS,
        }
    }
}

impl SvgCanvas {
    /// Canvas dimensions and drawing transform for an SVG of the given size
    fn layout(&self, svg_width: f32, svg_height: f32) -> (u32, u32, Transform) {
        let width = (svg_width * self.scale).round() as u32;
        let height = (svg_height * self.scale).round() as u32;
        if width > 0 && height > 0 {
            return (width, height, Transform::from_scale(self.scale, self.scale));
        }

        // Degenerate size: fit the drawing, centered, into the default square
        let edge = self.default_size.max(1);
        let scale = (edge as f32 / svg_width).min(edge as f32 / svg_height);
        let offset_x = (edge as f32 - svg_width * scale) / 2.0;
        let offset_y = (edge as f32 - svg_height * scale) / 2.0;
        let transform = Transform::from_scale(scale, scale).post_translate(offset_x, offset_y);
        (edge, edge, transform)
    }
}

/// Rasterizes SVG icons onto a transparent canvas.
///
/// Nothing is composited underneath the drawing: uncovered pixels stay
/// fully transparent and count as their own color downstream.
pub struct SvgRenderer {
    /// Font database for text rendering
    fontdb: Arc<fontdb::Database>,
}

impl SvgRenderer {
    /// Create a renderer that resolves text against the system fonts
    pub fn new() -> Self {
        let mut fontdb = fontdb::Database::new();
        fontdb.load_system_fonts();

        tracing::debug!(
            font_count = fontdb.len(),
            "Loaded fonts for SVG text rendering"
        );

        Self {
            fontdb: Arc::new(fontdb),
        }
    }

    /// Renderer with an empty font database (text elements render nothing)
    pub fn without_fonts() -> Self {
        Self {
            fontdb: Arc::new(fontdb::Database::new()),
        }
    }

    /// Render SVG to an RGBA8 PNG sized by `canvas`
    pub fn render_to_png(
        &self,
        svg_data: &[u8],
        canvas: SvgCanvas,
    ) -> Result<Vec<u8>, ConversionError> {
        let pixmap = self.rasterize_svg(svg_data, canvas)?;
        let rgba = pixmap_to_rgba(&pixmap);
        encode_rgba_png(pixmap.width(), pixmap.height(), &rgba)
    }

    /// Parse and rasterize SVG to an RGBA pixmap
    pub fn rasterize_svg(
        &self,
        svg_data: &[u8],
        canvas: SvgCanvas,
    ) -> Result<Pixmap, ConversionError> {
        let options = usvg::Options {
            fontdb: self.fontdb.clone(),
            ..Default::default()
        };
        let tree = usvg::Tree::from_data(svg_data, &options)
            .map_err(|e| ConversionError::SvgParse(e.to_string()))?;

        let svg_size = tree.size();
        let (width, height, transform) = canvas.layout(svg_size.width(), svg_size.height());
        if width > MAX_CANVAS_EDGE || height > MAX_CANVAS_EDGE {
            return Err(ConversionError::PixmapAllocation { width, height });
        }

        let mut pixmap =
            Pixmap::new(width, height).ok_or(ConversionError::PixmapAllocation { width, height })?;

        resvg::render(&tree, transform, &mut pixmap.as_mut());

        tracing::debug!(width, height, "Rasterized SVG");
        Ok(pixmap)
    }
}

impl Default for SvgRenderer {
    fn default() -> Self {
        Self::new()
    }
}
