//! QR matrix to pixel rasterisation

use image::RgbaImage;
use qrcode::{Color, QrCode};

use super::options::RenderSettings;
use super::RenderError;

/// Encode `content` and draw it into an image of `settings.width` pixels
/// per side (or one pixel per module when the width is smaller than the
/// symbol plus its quiet zone).
pub fn rasterize(content: &str, settings: &RenderSettings) -> Result<RgbaImage, RenderError> {
    let code = QrCode::with_error_correction_level(content.as_bytes(), settings.ec_level)?;
    let size = code.width();
    let modules = code.to_colors();

    let total = size as u32 + settings.margin * 2;
    let side = settings.width.max(total);
    let scale = side as f64 / total as f64;
    let margin_px = settings.margin as f64 * scale;

    let image = RgbaImage::from_fn(side, side, |x, y| {
        let module_at = |px: u32| {
            let offset = px as f64 - margin_px;
            if offset < 0.0 {
                return None;
            }
            let index = (offset / scale).floor() as usize;
            (index < size).then_some(index)
        };

        match (module_at(x), module_at(y)) {
            (Some(col), Some(row)) if modules[row * size + col] == Color::Dark => {
                settings.foreground
            }
            _ => settings.background,
        }
    });

    Ok(image)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);
    const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

    #[test]
    fn test_image_has_requested_width() {
        let settings = RenderSettings::default();
        let image = rasterize("https://example.com", &settings).unwrap();
        assert_eq!(image.dimensions(), (300, 300));
    }

    #[test]
    fn test_margin_is_background() {
        let settings = RenderSettings {
            margin: 4,
            ..Default::default()
        };
        let image = rasterize("hello", &settings).unwrap();

        assert_eq!(*image.get_pixel(0, 0), WHITE);
        assert_eq!(*image.get_pixel(299, 299), WHITE);
    }

    #[test]
    fn test_finder_pattern_corner_is_dark() {
        // Without a quiet zone the top-left module belongs to a finder pattern
        let settings = RenderSettings {
            margin: 0,
            ..Default::default()
        };
        let image = rasterize("hello", &settings).unwrap();
        assert_eq!(*image.get_pixel(0, 0), BLACK);
    }

    #[test]
    fn test_custom_colors() {
        let red = Rgba([255, 0, 0, 255]);
        let settings = RenderSettings {
            margin: 0,
            foreground: red,
            ..Default::default()
        };
        let image = rasterize("hello", &settings).unwrap();

        assert_eq!(*image.get_pixel(0, 0), red);
        assert!(image.pixels().all(|p| *p == red || *p == WHITE));
    }

    #[test]
    fn test_small_width_uses_module_count() {
        let settings = RenderSettings {
            width: 1,
            margin: 1,
            ..Default::default()
        };
        let image = rasterize("hi", &settings).unwrap();
        // Version 1 symbol is 21 modules wide, plus one module on each side
        assert_eq!(image.dimensions(), (23, 23));
    }

    #[test]
    fn test_oversized_content_fails() {
        let content = "x".repeat(8000);
        let result = rasterize(&content, &RenderSettings::default());
        assert!(matches!(result, Err(RenderError::Qr(_))));
    }
}
