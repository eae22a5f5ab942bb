//! Icon and database fixtures.

use image::{ImageFormat, Rgba, RgbaImage};
use serde_json::{json, Value};
use std::path::Path;

pub const RED: [u8; 4] = [255, 0, 0, 255];
pub const BLUE: [u8; 4] = [0, 0, 255, 255];

/// Solid green 8x8 SVG
pub const GREEN_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="8" height="8" viewBox="0 0 8 8">
  <rect x="0" y="0" width="8" height="8" fill="#00ff00"/>
</svg>"##;

/// Write a PNG whose pixels are given row-major
pub fn write_png(path: &Path, width: u32, height: u32, pixels: &[[u8; 4]]) {
    assert_eq!(pixels.len(), (width * height) as usize);
    let mut image = RgbaImage::new(width, height);
    for (i, pixel) in pixels.iter().enumerate() {
        let x = i as u32 % width;
        let y = i as u32 / width;
        image.put_pixel(x, y, Rgba(*pixel));
    }
    image.save_with_format(path, ImageFormat::Png).unwrap();
}

/// Write a solid-color JPEG
pub fn write_jpeg(path: &Path, width: u32, height: u32, rgb: [u8; 3]) {
    image::RgbImage::from_pixel(width, height, image::Rgb(rgb))
        .save_with_format(path, ImageFormat::Jpeg)
        .unwrap();
}

/// A small wappalyzer-style database
pub fn sample_database() -> Value {
    json!({
        "apps": {
            "Redis": {
                "cats": [34],
                "description": "Redis is an in-memory data store.",
                "icon": "Redis.png",
                "website": "https://redis.io"
            },
            "Vue.js": {
                "cats": [12],
                "icon": "Vue.js.svg",
                "js": { "Vue.version": "^(.+)$\\;version:\\1" }
            },
            "Laravel": {
                "cats": [18],
                "cookies": { "laravel_session": "" },
                "implies": "PHP"
            }
        },
        "categories": {
            "12": { "name": "JavaScript frameworks", "priority": 8 }
        }
    })
}
