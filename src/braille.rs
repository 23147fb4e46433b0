//! Braille Module — sub-pixel addressing over the character grid.
//!
//! Emulates a 2×4-dots-per-cell pixel surface using the braille block
//! (U+2800–U+28FF). Each cell's code point is a bitmask of its eight dots;
//! setting a sub-pixel ORs one bit into the owning cell.

use crate::canvas::LineDrawingContext;
use crate::layer::{ImageLayer, Layer, Rect};
use crate::types::{PixelMetadata, StyledSpan, Viewport, COLOR_WHITE};

/// The all-clear braille cell, used as the canvas empty glyph.
pub const BLANK: char = '\u{2800}';

/// Default inclusive grayscale band for image sampling: mid-gray to white.
pub const GRAY_MIN_DEFAULT: u8 = 0x80;
pub const GRAY_MAX_DEFAULT: u8 = 0xFF;

/// Dot bit positions keyed by (x mod 2, y mod 4).
///
/// This table follows the 8-dot braille cell layout, where the bottom row
/// of dots lives in bits 6 and 7 rather than continuing the column order.
/// It must be reproduced bit-for-bit; deriving it arithmetically produces
/// visually wrong glyphs for the bottom dots.
const DOT_BITS: [[u32; 4]; 2] = [
    [0, 1, 2, 6], // even sub-pixel columns
    [3, 4, 5, 7], // odd sub-pixel columns
];

fn set_dot(ch: char, x: u32, y: u32) -> char {
    let bit = DOT_BITS[(x & 1) as usize][(y & 3) as usize];
    // OR within the braille block always yields a valid code point
    char::from_u32(ch as u32 | 1 << bit).unwrap_or(ch)
}

/// Set one sub-pixel. The owning cell is (x >> 1, y >> 2); the write is a
/// non-destructive OR onto the cell's current glyph. Coordinates outside
/// the canvas (including negatives) are silently clipped.
pub fn set_subpixel(canvas: &mut LineDrawingContext, x: i32, y: i32) {
    if x < 0 || y < 0 {
        return;
    }
    let (x, y) = (x as u32, y as u32);
    let col = x >> 1;
    let row = y >> 2;
    let ch = match canvas.get_char(col, row) {
        Some(c) => c,
        None => return,
    };
    canvas.write(col, row, set_dot(ch, x, y));
}

// ============================================================================
// Rendering Context
// ============================================================================

/// Owns an ordered layer list and knows how to build the right canvas for
/// its addressing mode. `render` composes all layers into styled lines.
pub trait RenderContext {
    /// Sub-pixels per cell: (horizontal, vertical).
    fn subpixel_ratio(&self) -> (u32, u32);

    fn create_canvas(&self, cols: u32, rows: u32) -> LineDrawingContext;

    fn layers(&self) -> &[Box<dyn Layer>];

    fn push_layer(&mut self, layer: Box<dyn Layer>);

    /// Discard all accumulated layers.
    fn clear(&mut self);

    /// Build a canvas sized to the viewport (given in sub-pixels), draw
    /// every layer in insertion order, and serialize the grid. Later
    /// layers draw over earlier ones; geometry outside the canvas is
    /// clipped per sub-pixel and never fails the pass.
    fn render(&self, viewport: Viewport) -> Vec<Vec<StyledSpan>> {
        let (rx, ry) = self.subpixel_ratio();
        let cols = viewport.width.div_ceil(rx);
        let rows = viewport.height.div_ceil(ry);
        let mut canvas = self.create_canvas(cols, rows);
        for layer in self.layers() {
            layer.draw(&mut canvas);
        }
        canvas.render_lines()
    }
}

/// Braille-mode rendering context: 2×4 sub-pixels per cell.
#[derive(Default)]
pub struct BrailleRenderContext {
    layers: Vec<Box<dyn Layer>>,
}

impl BrailleRenderContext {
    pub fn new() -> Self {
        Self { layers: Vec::new() }
    }

    /// Fill every sub-pixel in the half-open rectangle [x1,x2) × [y1,y2).
    pub fn draw_rect(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) {
        self.push_layer(Box::new(Rect::new(x1, y1, x2, y2)));
    }

    /// Draw an image with the default grayscale band (mid-gray to white).
    pub fn draw_image(&mut self, x: i32, y: i32, img: image::RgbaImage) {
        self.draw_image_band(x, y, img, GRAY_MIN_DEFAULT, GRAY_MAX_DEFAULT);
    }

    /// Draw an image, setting a sub-pixel only where the source pixel's
    /// grayscale intensity falls within [gray_min, gray_max].
    pub fn draw_image_band(
        &mut self,
        x: i32,
        y: i32,
        img: image::RgbaImage,
        gray_min: u8,
        gray_max: u8,
    ) {
        self.push_layer(Box::new(ImageLayer::new(x, y, img, gray_min, gray_max)));
    }
}

impl RenderContext for BrailleRenderContext {
    fn subpixel_ratio(&self) -> (u32, u32) {
        (2, 4)
    }

    fn create_canvas(&self, cols: u32, rows: u32) -> LineDrawingContext {
        LineDrawingContext::new(cols, rows, BLANK, PixelMetadata::new(COLOR_WHITE))
    }

    fn layers(&self) -> &[Box<dyn Layer>] {
        &self.layers
    }

    fn push_layer(&mut self, layer: Box<dyn Layer>) {
        self.layers.push(layer);
    }

    fn clear(&mut self) {
        self.layers.clear();
    }
}
