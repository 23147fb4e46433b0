//! Buttons Module — framed button boxes packed into a character region.
//!
//! Responsibilities:
//! - `Button`: immutable label + click action, display width cached at
//!   construction
//! - `ButtonGrid`: column-count search, box sizing, label truncation,
//!   row-major layout with exact-height output
//! - `NewTab`: the tab wrapper exposing the grid through the session seam

use std::rc::Rc;

use unicode_segmentation::UnicodeSegmentation;

use crate::session::{ButtonAction, Tab};
use crate::types::Viewport;
use crate::width::{border_line, space_count, WidthOracle, ELLIPSIS};

/// Box widths are rounded down to a multiple of this, keeping borders
/// visually consistent with the host font's box-drawing glyphs.
pub const BOX_ALIGN: u32 = 9;

/// Extra interior width held back from every box. Empirically chosen
/// visual-fit tweak, not a structural invariant.
const INTERIOR_MARGIN: u32 = 3;

/// A labeled, clickable button. The label's display width is computed
/// once at construction; labels never change afterwards.
pub struct Button {
    label: String,
    width: u32,
    action: Rc<dyn ButtonAction>,
}

impl Button {
    pub fn new(
        label: impl Into<String>,
        action: Rc<dyn ButtonAction>,
        oracle: &dyn WidthOracle,
    ) -> Self {
        let label = label.into();
        let width = oracle.str_width(&label, false);
        Self {
            label,
            width,
            action,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn action(&self) -> Rc<dyn ButtonAction> {
        Rc::clone(&self.action)
    }
}

/// Packs buttons into a bounded character region as three-line framed
/// boxes, row-major. Output always has exactly `viewport.height` lines.
#[derive(Default)]
pub struct ButtonGrid {
    buttons: Vec<Button>,
}

impl ButtonGrid {
    pub fn new() -> Self {
        Self {
            buttons: Vec::new(),
        }
    }

    pub fn add_button(&mut self, button: Button) {
        self.buttons.push(button);
    }

    pub fn buttons(&self) -> &[Button] {
        &self.buttons
    }

    /// Render the grid. Fails fast when the viewport cannot hold a single
    /// box row; never partially renders.
    pub fn render(&self, viewport: Viewport, oracle: &dyn WidthOracle) -> Result<String, String> {
        if viewport.height < 3 {
            return Err(format!(
                "viewport height must be at least 3, got {}",
                viewport.height
            ));
        }

        // Smallest column count whose row-groups fit the viewport
        let max_rows = (viewport.height / 3) as usize;
        let mut columns: usize = 1;
        while max_rows < self.buttons.len().div_ceil(columns) {
            columns += 1;
        }

        let mut box_width = viewport.width / columns as u32;
        box_width -= box_width % BOX_ALIGN;
        if box_width == 0 && !self.buttons.is_empty() {
            return Err(format!(
                "viewport width {} is too narrow for {columns} button column(s)",
                viewport.width
            ));
        }

        let mut out = String::new();
        let mut lines_emitted = 0;
        for row in self.buttons.chunks(columns) {
            let mut top = String::new();
            let mut mid = String::new();
            let mut bot = String::new();
            for button in row {
                let [t, m, b] = self.draw_button(button, box_width, oracle);
                top.push_str(&t);
                mid.push_str(&m);
                bot.push_str(&b);
            }
            for line in [top, mid, bot] {
                push_line(&mut out, line, viewport.width, oracle);
            }
            lines_emitted += 3;
        }
        for _ in lines_emitted..viewport.height {
            push_line(&mut out, String::new(), viewport.width, oracle);
        }
        Ok(out)
    }

    /// One button box as (top border, content, bottom border).
    fn draw_button(&self, button: &Button, box_width: u32, oracle: &dyn WidthOracle) -> [String; 3] {
        let bar_width = oracle.char_width('│', false) * 2;
        let interior = box_width.saturating_sub(bar_width + INTERIOR_MARGIN);

        let mut label_width = button.width();
        let label = if label_width > interior {
            // Trim trailing graphemes until the label plus suffix fits,
            // re-measuring after every cut
            let suffix_width = oracle.str_width(ELLIPSIS, false);
            let mut kept: Vec<&str> = button.label().graphemes(true).collect();
            while label_width > interior && !kept.is_empty() {
                kept.pop();
                label_width = oracle.str_width(&kept.concat(), false) + suffix_width;
            }
            let mut trimmed = kept.concat();
            trimmed.push_str(ELLIPSIS);
            trimmed
        } else {
            button.label().to_string()
        };

        let pad = box_width.saturating_sub(label_width + bar_width + INTERIOR_MARGIN);
        let spaces = space_count(oracle, pad);
        let left = spaces.div_ceil(2); // left half takes the odd remainder
        let right = spaces - left;

        let mut mid = String::from('│');
        for _ in 0..left {
            mid.push(' ');
        }
        mid.push_str(&label);
        for _ in 0..right {
            mid.push(' ');
        }
        mid.push('│');

        [
            border_line(oracle, '┌', '─', '┐', box_width),
            mid,
            border_line(oracle, '└', '─', '┘', box_width),
        ]
    }
}

/// Append one output line, truncated then padded toward the viewport
/// width, newline terminated. The viewport is a hard bound: a line is cut
/// at the last grapheme that fits rather than ever overflowing it.
fn push_line(out: &mut String, line: String, width: u32, oracle: &dyn WidthOracle) {
    let mut fitted = String::with_capacity(line.len());
    let mut used = 0;
    for grapheme in line.graphemes(true) {
        let gw = oracle.str_width(grapheme, false);
        if used + gw > width {
            break;
        }
        fitted.push_str(grapheme);
        used += gw;
    }
    crate::width::pad_spaces(oracle, &mut fitted, width.saturating_sub(used));
    out.push_str(&fitted);
    out.push('\n');
}

// ============================================================================
// NewTab
// ============================================================================

/// The button-grid tab: a launcher page of framed buttons.
pub struct NewTab {
    grid: ButtonGrid,
}

impl NewTab {
    pub fn new() -> Self {
        Self {
            grid: ButtonGrid::new(),
        }
    }

    pub fn add_button(&mut self, button: Button) {
        self.grid.add_button(button);
    }

    pub fn grid(&self) -> &ButtonGrid {
        &self.grid
    }
}

impl Default for NewTab {
    fn default() -> Self {
        Self::new()
    }
}

impl Tab for NewTab {
    fn title(&self) -> &str {
        "New Tab"
    }

    fn render(&self, viewport: Viewport, oracle: &dyn WidthOracle) -> Result<String, String> {
        self.grid.render(viewport, oracle)
    }

    fn button_action(&self, index: usize) -> Option<Rc<dyn ButtonAction>> {
        self.grid.buttons().get(index).map(|b| b.action())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Session;
    use crate::width::GlyphWidth;

    struct NoopAction;

    impl ButtonAction for NoopAction {
        fn on_click(&self, _session: &mut Session) {}
    }

    fn button(label: &str) -> Button {
        Button::new(label, Rc::new(NoopAction), &GlyphWidth)
    }

    fn grid_of(n: usize) -> ButtonGrid {
        let mut grid = ButtonGrid::new();
        for i in 0..n {
            grid.add_button(button(&format!("B{i}")));
        }
        grid
    }

    #[test]
    fn test_rejects_short_viewport() {
        let grid = grid_of(1);
        let err = grid.render(Viewport::new(36, 2), &GlyphWidth).unwrap_err();
        assert!(err.contains("at least 3"));
    }

    #[test]
    fn test_button_width_cached_eagerly() {
        let b = button("Hello");
        assert_eq!(b.width(), 10);
    }

    #[test]
    fn test_seven_buttons_two_row_groups_pack_into_four_columns() {
        let grid = grid_of(7);
        // height 6 -> 2 row-groups; minimal c with ceil(7/c) <= 2 is 4
        let text = grid.render(Viewport::new(72, 6), &GlyphWidth).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0].matches('┌').count(), 4);
        assert_eq!(lines[3].matches('┌').count(), 3);
    }

    #[test]
    fn test_output_has_exactly_viewport_height_lines() {
        for (buttons, height) in [(1, 9), (7, 6), (0, 4), (3, 11)] {
            let grid = grid_of(buttons);
            let text = grid.render(Viewport::new(72, height), &GlyphWidth).unwrap();
            assert_eq!(
                text.lines().count(),
                height as usize,
                "{buttons} buttons, height {height}"
            );
            assert!(text.ends_with('\n'));
        }
    }

    #[test]
    fn test_lines_fill_even_viewport_width() {
        let grid = grid_of(2);
        let viewport = Viewport::new(36, 9);
        let text = grid.render(viewport, &GlyphWidth).unwrap();
        let oracle = GlyphWidth;
        for line in text.lines() {
            assert_eq!(oracle.str_width(line, false), 36, "line {line:?}");
        }
    }

    #[test]
    fn test_lines_never_overflow_viewport_width() {
        let grid = grid_of(5);
        let viewport = Viewport::new(47, 9);
        let text = grid.render(viewport, &GlyphWidth).unwrap();
        let oracle = GlyphWidth;
        for line in text.lines() {
            assert!(oracle.str_width(line, false) <= 47, "line {line:?}");
        }
    }

    #[test]
    fn test_box_width_aligned_to_multiple_of_nine() {
        let grid = grid_of(1);
        // 40 / 1 = 40, rounded down to 36 -> border measures 36 units (18 chars)
        let text = grid.render(Viewport::new(40, 3), &GlyphWidth).unwrap();
        let top = text.lines().next().unwrap();
        let border: String = top.chars().take_while(|&c| c != ' ').collect();
        assert_eq!(GlyphWidth.str_width(&border, false), 36);
    }

    #[test]
    fn test_wide_label_truncated_with_ellipsis() {
        let mut grid = ButtonGrid::new();
        grid.add_button(button("Hello World"));
        // box 18, interior 18 - 4 - 3 = 11: "He..." (width 10) fits
        let text = grid.render(Viewport::new(18, 3), &GlyphWidth).unwrap();
        let content = text.lines().nth(1).unwrap();
        assert!(content.contains("He..."), "{content:?}");
        assert!(!content.contains("Hello"));
        let label_width = GlyphWidth.str_width("He...", false);
        assert!(label_width <= 11);
    }

    #[test]
    fn test_narrow_boxes_never_overflow_viewport() {
        // Two buttons in 18 units: box 9, interior 9 - 4 - 3 = 2, so even
        // the bare "..." suffix (width 6) exceeds the interior and each
        // box would assemble wider than its slot. The row must still be
        // cut at the viewport bound.
        let mut grid = ButtonGrid::new();
        grid.add_button(button("AB"));
        grid.add_button(button("AB"));
        let viewport = Viewport::new(18, 3);
        let text = grid.render(viewport, &GlyphWidth).unwrap();
        let oracle = GlyphWidth;
        assert_eq!(text.lines().count(), 3);
        for line in text.lines() {
            assert!(
                oracle.str_width(line, false) <= 18,
                "line {line:?} wider than viewport"
            );
        }
    }

    #[test]
    fn test_fitting_label_is_never_altered() {
        let mut grid = ButtonGrid::new();
        grid.add_button(button("Hi"));
        let text = grid.render(Viewport::new(18, 3), &GlyphWidth).unwrap();
        let content = text.lines().nth(1).unwrap();
        assert!(content.contains("Hi"));
        assert!(!content.contains("..."));
    }

    #[test]
    fn test_left_padding_takes_odd_remainder() {
        let mut grid = ButtonGrid::new();
        grid.add_button(button("Hi"));
        let text = grid.render(Viewport::new(18, 3), &GlyphWidth).unwrap();
        let content = text.lines().nth(1).unwrap();
        // pad = 18 - 4 - 4 - 3 = 7 -> 3 spaces; left 2, right 1 (inside the bars)
        let inner: &str = content
            .trim_end_matches(' ')
            .trim_start_matches('│')
            .trim_end_matches('│');
        let left = inner.len() - inner.trim_start().len();
        let right = inner.len() - inner.trim_end().len();
        assert_eq!((left, right), (2, 1));
    }

    #[test]
    fn test_newtab_exposes_button_actions() {
        let mut tab = NewTab::new();
        tab.add_button(button("a"));
        assert!(tab.button_action(0).is_some());
        assert!(tab.button_action(1).is_none());
        assert_eq!(tab.title(), "New Tab");
    }
}
