//! Iconhue - dominant icon colors for technology fingerprint databases
//!
//! Icons are normalized to PNG where needed, reduced to their most frequent
//! exact color, and the color is attached to the matching fingerprint record.
//! This library exposes modules for integration testing.

pub mod error;
pub mod models;
pub mod rendering;
pub mod services;

pub use dominant_color;
