//! Shared types, enums, and constants.
//!
//! All types that cross module boundaries live here: the u32 color
//! encoding, per-cell metadata, styled span runs, and the viewport bound.

use bitflags::bitflags;

// ============================================================================
// Color Encoding (u32)
// ============================================================================
//
// Bits 31-24: Mode tag
//   0x00 = Default (terminal default)
//   0x01 = RGB truecolor (bits 23-0 = 0xRRGGBB)
//   0x02 = Indexed (bits 7-0 = palette index 0-255)

pub const COLOR_DEFAULT: u32 = 0x00000000;

/// Base color of an untouched canvas cell.
pub const COLOR_WHITE: u32 = 0x01FFFFFF;

pub fn color_tag(color: u32) -> u8 {
    ((color >> 24) & 0xFF) as u8
}

pub fn color_to_crossterm(color: u32) -> Option<crossterm::style::Color> {
    match color_tag(color) {
        0x00 => None, // Default — no override
        0x01 => {
            let r = ((color >> 16) & 0xFF) as u8;
            let g = ((color >> 8) & 0xFF) as u8;
            let b = (color & 0xFF) as u8;
            Some(crossterm::style::Color::Rgb { r, g, b })
        }
        0x02 => {
            let index = (color & 0xFF) as u8;
            Some(crossterm::style::Color::AnsiValue(index))
        }
        _ => None, // Invalid tag — treat as Default
    }
}

// ============================================================================
// Span Attributes (bitflags)
// ============================================================================

bitflags! {
    #[repr(transparent)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct SpanAttrs: u8 {
        const BOLD      = 0b0000_0001;
        const ITALIC    = 0b0000_0010;
        const UNDERLINE = 0b0000_0100;
    }
}

// ============================================================================
// Pixel Metadata
// ============================================================================

/// Per-cell rendering attributes. Immutable, compared by value.
///
/// Written into the canvas alongside each character via the metadata
/// register (see `LineDrawingContext::set_data`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelMetadata {
    pub color: u32,
    pub attrs: SpanAttrs,
}

impl PixelMetadata {
    pub fn new(color: u32) -> Self {
        Self {
            color,
            attrs: SpanAttrs::empty(),
        }
    }

    pub fn with_attrs(color: u32, attrs: SpanAttrs) -> Self {
        Self { color, attrs }
    }
}

impl Default for PixelMetadata {
    fn default() -> Self {
        Self::new(COLOR_DEFAULT)
    }
}

// ============================================================================
// Styled Span
// ============================================================================

/// One run of identically-styled text within a rendered line.
#[derive(Debug, Clone, PartialEq)]
pub struct StyledSpan {
    pub text: String,
    pub fg: u32,
    pub attrs: SpanAttrs,
}

impl StyledSpan {
    pub fn new(text: impl Into<String>, fg: u32, attrs: SpanAttrs) -> Self {
        Self {
            text: text.into(),
            fg,
            attrs,
        }
    }
}

// ============================================================================
// Viewport
// ============================================================================

/// Caller-supplied output bound for a render pass.
///
/// Units depend on the consumer: the button grid reads `width` in
/// half-cell display-width units (see the width module) and `height` in
/// text rows, while a rendering context (`RenderContext::render`) reads
/// both axes in sub-pixels and derives the cell grid from its addressing
/// ratio. Either way the viewport is a hard bound: a render pass exactly
/// fills the height and never emits a line wider than `width`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}
