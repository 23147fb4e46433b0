//! Width Module — display-width measurement and padding helpers.
//!
//! Every spacing decision in the crate goes through a `WidthOracle` so the
//! engine never assumes one-column-per-char. Widths are measured in
//! half-cell units: a regular single-column glyph is 2 units, which lets a
//! bold variant (+1) and the host font's narrow glyphs be expressed without
//! fractions.

use unicode_width::UnicodeWidthChar;

/// Suffix appended to labels that are truncated to fit their box.
pub const ELLIPSIS: &str = "...";

/// Per-character display width, in half-cell units.
pub trait WidthOracle {
    fn char_width(&self, ch: char, bold: bool) -> u32;

    fn str_width(&self, s: &str, bold: bool) -> u32 {
        s.chars().map(|c| self.char_width(c, bold)).sum()
    }
}

/// Default oracle: 2 half-cell units per terminal column, bold adds one
/// unit per visible glyph, zero-width glyphs stay at zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlyphWidth;

impl WidthOracle for GlyphWidth {
    fn char_width(&self, ch: char, bold: bool) -> u32 {
        let w = (UnicodeWidthChar::width(ch).unwrap_or(0) as u32) * 2;
        if bold && w > 0 {
            w + 1
        } else {
            w
        }
    }
}

/// Append spaces to `buf` until `width` units are consumed.
///
/// Fills as closely as possible without overshooting; a remainder smaller
/// than one space is left unfilled.
pub fn pad_spaces(oracle: &dyn WidthOracle, buf: &mut String, width: u32) {
    let space = oracle.char_width(' ', false);
    if space == 0 {
        return;
    }
    let mut used = 0;
    while used + space <= width {
        buf.push(' ');
        used += space;
    }
}

/// Count how many spaces fit in `width` units.
pub fn space_count(oracle: &dyn WidthOracle, width: u32) -> u32 {
    let space = oracle.char_width(' ', false);
    if space == 0 {
        0
    } else {
        width / space
    }
}

/// Build a `start`, repeated `fill`, `end` line (e.g. `┌────┐`) whose
/// measured width never exceeds `width`.
pub fn border_line(oracle: &dyn WidthOracle, start: char, fill: char, end: char, width: u32) -> String {
    let mut line = String::new();
    line.push(start);
    let mut used = oracle.char_width(start, false);
    let fill_w = oracle.char_width(fill, false);
    let end_w = oracle.char_width(end, false);
    if fill_w > 0 {
        while used + fill_w + end_w <= width {
            line.push(fill);
            used += fill_w;
        }
    }
    line.push(end);
    line
}
