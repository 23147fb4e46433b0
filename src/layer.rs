//! Layer Module — ordered drawing operations over the canvas.
//!
//! A `Layer` holds immutable geometry or bitmap data and mutates a
//! `LineDrawingContext` when drawn. The owning rendering context applies
//! layers in insertion order; nothing beyond list order controls stacking.

use crate::braille::set_subpixel;
use crate::canvas::LineDrawingContext;
use crate::types::{PixelMetadata, COLOR_WHITE};

pub trait Layer {
    fn draw(&self, canvas: &mut LineDrawingContext);
}

/// Filled rectangle over the half-open sub-pixel range [x1,x2) × [y1,y2).
pub struct Rect {
    x1: i32,
    y1: i32,
    x2: i32,
    y2: i32,
}

impl Rect {
    pub fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self { x1, y1, x2, y2 }
    }
}

impl Layer for Rect {
    fn draw(&self, canvas: &mut LineDrawingContext) {
        for y in self.y1..self.y2 {
            for x in self.x1..self.x2 {
                set_subpixel(canvas, x, y);
            }
        }
    }
}

/// Bitmap sampled onto the sub-pixel grid through a grayscale band.
///
/// Each source pixel's intensity is the mean of its R, G, B channels; the
/// sub-pixel is set iff the intensity lies within [gray_min, gray_max].
/// A luminance threshold, not error diffusion.
pub struct ImageLayer {
    x: i32,
    y: i32,
    img: image::RgbaImage,
    gray_min: u8,
    gray_max: u8,
}

impl ImageLayer {
    pub fn new(x: i32, y: i32, img: image::RgbaImage, gray_min: u8, gray_max: u8) -> Self {
        Self {
            x,
            y,
            img,
            gray_min,
            gray_max,
        }
    }
}

impl Layer for ImageLayer {
    fn draw(&self, canvas: &mut LineDrawingContext) {
        canvas.set_data(PixelMetadata::new(COLOR_WHITE));
        for (px, py, pixel) in self.img.enumerate_pixels() {
            let [r, g, b, _] = pixel.0;
            let gray = ((r as u16 + g as u16 + b as u16) / 3) as u8;
            if gray >= self.gray_min && gray <= self.gray_max {
                set_subpixel(canvas, self.x + px as i32, self.y + py as i32);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::braille::{BLANK, GRAY_MAX_DEFAULT, GRAY_MIN_DEFAULT};
    use image::{Rgba, RgbaImage};

    fn canvas(cols: u32, rows: u32) -> LineDrawingContext {
        LineDrawingContext::new(cols, rows, BLANK, PixelMetadata::new(COLOR_WHITE))
    }

    fn solid(gray: u8) -> RgbaImage {
        RgbaImage::from_pixel(1, 1, Rgba([gray, gray, gray, 0xFF]))
    }

    fn cell_set(canvas: &LineDrawingContext) -> bool {
        canvas.get_char(0, 0) != Some(BLANK)
    }

    #[test]
    fn test_rect_does_not_bleed_outside_range() {
        let mut c = canvas(2, 1);
        Rect::new(0, 0, 1, 1).draw(&mut c);
        // Only dot (0,0) of cell (0,0); cell (1,0) untouched
        assert_eq!(c.get_char(0, 0), Some('⠁'));
        assert_eq!(c.get_char(1, 0), Some(BLANK));
    }

    #[test]
    fn test_rect_empty_range_draws_nothing() {
        let mut c = canvas(2, 1);
        Rect::new(3, 3, 3, 3).draw(&mut c);
        Rect::new(2, 2, 1, 1).draw(&mut c);
        assert_eq!(c.get_char(0, 0), Some(BLANK));
        assert_eq!(c.get_char(1, 0), Some(BLANK));
    }

    #[test]
    fn test_image_band_edges_inclusive() {
        for gray in [GRAY_MIN_DEFAULT, GRAY_MAX_DEFAULT] {
            let mut c = canvas(1, 1);
            ImageLayer::new(0, 0, solid(gray), GRAY_MIN_DEFAULT, GRAY_MAX_DEFAULT).draw(&mut c);
            assert!(cell_set(&c), "gray {gray:#x} should be included");
        }
    }

    #[test]
    fn test_image_below_min_excluded() {
        let mut c = canvas(1, 1);
        ImageLayer::new(0, 0, solid(GRAY_MIN_DEFAULT - 1), GRAY_MIN_DEFAULT, GRAY_MAX_DEFAULT)
            .draw(&mut c);
        assert!(!cell_set(&c));
    }

    #[test]
    fn test_image_above_max_excluded() {
        let mut c = canvas(1, 1);
        ImageLayer::new(0, 0, solid(0xE0), 0x80, 0xDF).draw(&mut c);
        assert!(!cell_set(&c));
    }

    #[test]
    fn test_image_gray_is_channel_mean() {
        // Mean of (0x90, 0x60, 0x90) = 0x80 — right on the lower edge
        let img = RgbaImage::from_pixel(1, 1, Rgba([0x90, 0x60, 0x90, 0xFF]));
        let mut c = canvas(1, 1);
        ImageLayer::new(0, 0, img, GRAY_MIN_DEFAULT, GRAY_MAX_DEFAULT).draw(&mut c);
        assert!(cell_set(&c));
    }

    #[test]
    fn test_image_offset_and_clipping() {
        let img = RgbaImage::from_pixel(4, 4, Rgba([0xFF, 0xFF, 0xFF, 0xFF]));
        let mut c = canvas(1, 1);
        // Placed mostly off-canvas; only the overlapping corner lands
        ImageLayer::new(-2, -2, img, GRAY_MIN_DEFAULT, GRAY_MAX_DEFAULT).draw(&mut c);
        let code = c.get_char(0, 0).unwrap() as u32;
        let bits = code - BLANK as u32;
        // Dots (0..2, 0..2) of the cell: bits 0,1,3,4
        assert_eq!(bits, 0b11011);
    }
}
