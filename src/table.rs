//! Table Module — the pluggable table rendering contract.
//!
//! The engine consumes these seams; it does not implement them. A host
//! supplies the model (cell values) and a renderer (cell text plus
//! borders). Column-width measurement policy stays with the renderer,
//! apart from the optional per-column adjustment hook.

use crate::types::{StyledSpan, Viewport};

/// Read contract of a tabular data source.
pub trait TableModel {
    fn rows(&self) -> usize;

    fn columns(&self) -> usize;

    fn cell(&self, row: usize, column: usize) -> Option<&str>;
}

/// Scroll origin of a table view.
pub trait TableViewport {
    fn first_row(&self) -> usize;

    fn first_column(&self) -> usize;
}

/// Renders cell values and borders for a table view.
pub trait TableRenderer {
    fn viewport(&self) -> &dyn TableViewport;

    /// Render one cell's value into zero or more styled lines.
    fn render_cell(
        &self,
        value: &str,
        row: usize,
        column: usize,
        model: &dyn TableModel,
        viewport: Viewport,
    ) -> Vec<Vec<StyledSpan>>;

    /// Wrap one content line of a row in its side borders, given the
    /// pre-measured column widths.
    fn side_borders(
        &self,
        row_index: usize,
        line: Vec<StyledSpan>,
        col_widths: &[u32],
    ) -> Vec<StyledSpan>;

    /// Build a full horizontal border. `row_index` is the row above the
    /// border; -1 means the border above the first row.
    fn border_row(
        &self,
        model: &dyn TableModel,
        row_index: isize,
        col_widths: &[u32],
    ) -> Vec<StyledSpan>;

    /// Optional per-column width adjustment. Default: unchanged.
    fn adjust_max_width(&self, _column: usize, max: u32) -> u32 {
        max
    }
}
