pub mod encode;
pub mod svg_to_png;

pub use encode::{encode_rgba_png, pixmap_to_rgba};
pub use svg_to_png::{SvgCanvas, SvgRenderer};
