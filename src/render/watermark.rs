//! # Watermark
//!
//! The shop logo drawn faintly behind every page. PDF transparency is not
//! used; the image is blended toward white once at load time so it prints
//! the same on any viewer.

use std::fmt;
use std::path::Path;

use image::{imageops::FilterType, DynamicImage};

use crate::error::BillError;

/// Longest edge kept in the embedded image.
const MAX_EDGE_PX: u32 = 600;

/// A prepared watermark: packed 8-bit RGB pixels, already faded.
#[derive(Clone, PartialEq)]
pub struct Watermark {
    pub width: u32,
    pub height: u32,
    pub rgb: Vec<u8>,
}

impl fmt::Debug for Watermark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Watermark")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("bytes", &self.rgb.len())
            .finish()
    }
}

impl Watermark {
    /// Opacity used when none is configured.
    pub const DEFAULT_OPACITY: f32 = 0.1;

    /// Load and fade an image file (PNG or JPEG).
    pub fn load(path: &Path, opacity: f32) -> Result<Self, BillError> {
        let img = image::open(path)
            .map_err(|e| BillError::Image(format!("{}: {}", path.display(), e)))?;
        Ok(Self::from_image(&img, opacity))
    }

    /// Fade a decoded image toward white.
    ///
    /// Transparent pixels become white. `opacity` is clamped to 0.0..=1.0;
    /// at 0.0 the result is blank, at 1.0 it is the image over white.
    pub fn from_image(img: &DynamicImage, opacity: f32) -> Self {
        let opacity = opacity.clamp(0.0, 1.0);

        let img = if img.width() > MAX_EDGE_PX || img.height() > MAX_EDGE_PX {
            img.resize(MAX_EDGE_PX, MAX_EDGE_PX, FilterType::Triangle)
        } else {
            img.clone()
        };

        let rgba = img.to_rgba8();
        let mut rgb = Vec::with_capacity((rgba.width() * rgba.height() * 3) as usize);
        for pixel in rgba.pixels() {
            let alpha = pixel[3] as f32 / 255.0;
            for c in 0..3 {
                let ink = (255.0 - pixel[c] as f32) * alpha * opacity;
                rgb.push((255.0 - ink).round().clamp(0.0, 255.0) as u8);
            }
        }

        Self {
            width: rgba.width(),
            height: rgba.height(),
            rgb,
        }
    }

    /// Height in millimetres when drawn `width_mm` wide.
    pub fn height_for_width(&self, width_mm: f32) -> f32 {
        if self.width == 0 {
            return 0.0;
        }
        width_mm * self.height as f32 / self.width as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage, Rgba, RgbaImage};

    fn solid(width: u32, height: u32, value: u8) -> DynamicImage {
        DynamicImage::ImageRgb8(RgbImage::from_pixel(width, height, Rgb([value, value, value])))
    }

    #[test]
    fn test_black_fades_to_light_grey() {
        let mark = Watermark::from_image(&solid(4, 2, 0), 0.2);
        assert_eq!(mark.width, 4);
        assert_eq!(mark.height, 2);
        assert_eq!(mark.rgb.len(), 4 * 2 * 3);
        // 255 - 255 * 0.2
        assert!(mark.rgb.iter().all(|&v| v == 204));
    }

    #[test]
    fn test_full_opacity_keeps_colour() {
        let mark = Watermark::from_image(&solid(1, 1, 40), 1.0);
        assert_eq!(mark.rgb, vec![40, 40, 40]);
    }

    #[test]
    fn test_transparent_becomes_white() {
        let img = RgbaImage::from_pixel(2, 2, Rgba([0, 0, 0, 0]));
        let mark = Watermark::from_image(&DynamicImage::ImageRgba8(img), 1.0);
        assert!(mark.rgb.iter().all(|&v| v == 255));
    }

    #[test]
    fn test_large_image_downscaled() {
        let mark = Watermark::from_image(&solid(1200, 600, 0), 0.1);
        assert_eq!(mark.width, 600);
        assert_eq!(mark.height, 300);
    }

    #[test]
    fn test_height_for_width() {
        let mark = Watermark::from_image(&solid(200, 100, 0), 0.1);
        assert_eq!(mark.height_for_width(110.0), 55.0);
    }

    #[test]
    fn test_load_missing_file() {
        let err = Watermark::load(Path::new("/nonexistent/logo.png"), 0.1).unwrap_err();
        assert!(matches!(err, BillError::Image(_)));
    }

    #[test]
    fn test_debug_omits_pixels() {
        let mark = Watermark::from_image(&solid(2, 2, 0), 0.1);
        let debug = format!("{:?}", mark);
        assert!(debug.contains("bytes: 12"));
    }
}
