//! Canvas Module — the character/metadata grid.
//!
//! Responsibilities:
//! - Fixed-size grid of (char, PixelMetadata) cells
//! - Metadata register applied by subsequent writes
//! - Bounds-checked cell access (out-of-range writes are silent no-ops)
//! - Serialization into styled lines with run coalescing

use crate::types::{PixelMetadata, StyledSpan};

/// A fixed-size drawing surface. Dimensions never change after
/// construction; all addressing is (column, row) in character space.
#[derive(Debug, Clone)]
pub struct LineDrawingContext {
    width: u32,
    height: u32,
    empty: char,
    chars: Vec<char>,
    data: Vec<PixelMetadata>,
    current: PixelMetadata,
}

impl LineDrawingContext {
    pub fn new(width: u32, height: u32, empty: char, default_data: PixelMetadata) -> Self {
        let size = (width as usize) * (height as usize);
        Self {
            width,
            height,
            empty,
            chars: vec![empty; size],
            data: vec![default_data; size],
            current: default_data,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Set the metadata register used by subsequent `write` calls.
    /// A drawing-mode register, not a per-call argument.
    pub fn set_data(&mut self, data: PixelMetadata) {
        self.current = data;
    }

    fn index(&self, col: u32, row: u32) -> Option<usize> {
        if col < self.width && row < self.height {
            Some((row as usize) * (self.width as usize) + (col as usize))
        } else {
            None
        }
    }

    pub fn get_char(&self, col: u32, row: u32) -> Option<char> {
        self.index(col, row).map(|i| self.chars[i])
    }

    pub fn get_data(&self, col: u32, row: u32) -> Option<PixelMetadata> {
        self.index(col, row).map(|i| self.data[i])
    }

    /// Write a character with the current metadata register.
    /// Out-of-range writes are silently dropped (clipping policy).
    pub fn write(&mut self, col: u32, row: u32, ch: char) {
        if let Some(i) = self.index(col, row) {
            self.chars[i] = ch;
            self.data[i] = self.current;
        }
    }

    /// Write a character with explicit metadata, bypassing the register.
    pub fn write_data(&mut self, col: u32, row: u32, ch: char, data: PixelMetadata) {
        if let Some(i) = self.index(col, row) {
            self.chars[i] = ch;
            self.data[i] = data;
        }
    }

    /// Serialize the grid into one `Vec<StyledSpan>` per row.
    ///
    /// Consecutive cells sharing identical metadata coalesce into one span.
    /// Cells still holding the empty char render as a plain space so the
    /// background stays visually blank; any cell with dots set renders its
    /// literal glyph.
    pub fn render_lines(&self) -> Vec<Vec<StyledSpan>> {
        let mut lines = Vec::with_capacity(self.height as usize);
        for row in 0..self.height {
            let mut spans: Vec<StyledSpan> = Vec::new();
            let mut run = String::new();
            let mut run_data: Option<PixelMetadata> = None;
            for col in 0..self.width {
                let i = (row as usize) * (self.width as usize) + (col as usize);
                let ch = if self.chars[i] == self.empty {
                    ' '
                } else {
                    self.chars[i]
                };
                let data = self.data[i];
                if run_data != Some(data) {
                    if let Some(d) = run_data {
                        spans.push(StyledSpan::new(std::mem::take(&mut run), d.color, d.attrs));
                    }
                    run_data = Some(data);
                }
                run.push(ch);
            }
            if let Some(d) = run_data {
                spans.push(StyledSpan::new(run, d.color, d.attrs));
            }
            lines.push(spans);
        }
        lines
    }
}
