use crate::error::ConversionError;
use std::io::Cursor;
use tiny_skia::Pixmap;

/// Encode non-premultiplied RGBA8 pixels as a PNG.
pub fn encode_rgba_png(width: u32, height: u32, rgba: &[u8]) -> Result<Vec<u8>, ConversionError> {
    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, width, height);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder
            .write_header()
            .map_err(|e| ConversionError::PngEncode(e.to_string()))?;
        writer
            .write_image_data(rgba)
            .map_err(|e| ConversionError::PngEncode(e.to_string()))?;
    }
    Ok(buf.into_inner())
}

/// Demultiply a pixmap into packed RGBA8 bytes.
///
/// tiny-skia stores premultiplied alpha; PNG and the histogram expect
/// straight alpha.
pub fn pixmap_to_rgba(pixmap: &Pixmap) -> Vec<u8> {
    pixmap
        .pixels()
        .iter()
        .flat_map(|pixel| {
            let c = pixel.demultiply();
            [c.red(), c.green(), c.blue(), c.alpha()]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_rgba_png_round_trips_through_image() {
        let rgba = [255, 0, 0, 255, 0, 0, 255, 128];
        let png_bytes = encode_rgba_png(2, 1, &rgba).unwrap();

        let decoded = image::load_from_memory_with_format(&png_bytes, image::ImageFormat::Png)
            .unwrap()
            .to_rgba8();
        assert_eq!(decoded.dimensions(), (2, 1));
        assert_eq!(decoded.as_raw().as_slice(), &rgba);
    }

    #[test]
    fn test_encode_rejects_short_data() {
        let result = encode_rgba_png(2, 2, &[0; 4]);
        assert!(matches!(result, Err(ConversionError::PngEncode(_))));
    }

    #[test]
    fn test_pixmap_to_rgba_demultiplies() {
        let mut pixmap = Pixmap::new(1, 1).unwrap();
        pixmap.fill(tiny_skia::Color::from_rgba8(200, 100, 0, 255));
        assert_eq!(pixmap_to_rgba(&pixmap), vec![200, 100, 0, 255]);

        let empty = Pixmap::new(2, 1).unwrap();
        assert_eq!(pixmap_to_rgba(&empty), vec![0; 8]);
    }
}
