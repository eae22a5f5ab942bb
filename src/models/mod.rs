pub mod config;
pub mod fingerprint;

pub use config::{RunConfig, DEFAULT_SVG_CANVAS};
pub use fingerprint::{FingerprintDatabase, FingerprintRecord, COLOR_FIELD, ICON_FIELD};
