//! ANSI Module — serialize styled lines into one escape-coded text block.
//!
//! The crate's edge toward a terminal-like display surface. Style state is
//! reset after every span, matching the per-cell reset discipline of the
//! terminal writer this grew out of.

use std::fmt::Write as _;

use crossterm::style::{Attribute, SetAttribute, SetForegroundColor};
use crossterm::Command;

use crate::types::{color_to_crossterm, SpanAttrs, StyledSpan};

/// Render styled lines into an ANSI string, one `\n` between lines.
pub fn spans_to_ansi(lines: &[Vec<StyledSpan>]) -> String {
    let mut out = String::new();
    for (i, line) in lines.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        for span in line {
            write_span(&mut out, span);
        }
    }
    out
}

fn write_span(out: &mut String, span: &StyledSpan) {
    let mut styled = false;
    if let Some(color) = color_to_crossterm(span.fg) {
        let _ = SetForegroundColor(color).write_ansi(out);
        styled = true;
    }
    if span.attrs.contains(SpanAttrs::BOLD) {
        let _ = SetAttribute(Attribute::Bold).write_ansi(out);
        styled = true;
    }
    if span.attrs.contains(SpanAttrs::ITALIC) {
        let _ = SetAttribute(Attribute::Italic).write_ansi(out);
        styled = true;
    }
    if span.attrs.contains(SpanAttrs::UNDERLINE) {
        let _ = SetAttribute(Attribute::Underlined).write_ansi(out);
        styled = true;
    }
    let _ = write!(out, "{}", span.text);
    if styled {
        let _ = SetAttribute(Attribute::Reset).write_ansi(out);
    }
}
