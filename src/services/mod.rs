pub mod batch;
pub mod database;
pub mod normalizer;
pub mod pipeline;

pub use batch::{decode_raster, extract_file, BatchDriver, IconColor, RunReport};
pub use normalizer::{sibling_png_path, Normalizer, SourceFormat};
pub use pipeline::AugmentPipeline;
