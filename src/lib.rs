//! dotgrid — character-grid rendering engine.
//!
//! Renders shapes, bitmap images, and button grids onto a fixed-size
//! character grid that doubles as a terminal-like display surface inside a
//! chat window. Vector and raster content is drawn at sub-cell resolution
//! through braille dot-matrix emulation (2×4 sub-pixels per cell);
//! interactive buttons are packed into framed boxes under a hard viewport
//! bound.
//!
//! The engine is single-threaded and synchronous: drawing calls and render
//! passes run to completion on the calling thread, with no internal I/O.
//!
//! ```
//! use dotgrid::{BrailleRenderContext, RenderContext, Viewport};
//!
//! let mut ctx = BrailleRenderContext::new();
//! ctx.draw_rect(0, 0, 8, 8);
//! let lines = ctx.render(Viewport::new(16, 8));
//! assert_eq!(lines.len(), 2);
//! ```

pub mod ansi;
pub mod braille;
pub mod buttons;
pub mod canvas;
pub mod layer;
pub mod session;
pub mod table;
pub mod types;
pub mod width;

pub use ansi::spans_to_ansi;
pub use braille::{BrailleRenderContext, RenderContext, BLANK};
pub use buttons::{Button, ButtonGrid, NewTab};
pub use canvas::LineDrawingContext;
pub use layer::{ImageLayer, Layer, Rect};
pub use session::{ButtonAction, LaunchTabAction, Session, Tab, TabId};
pub use table::{TableModel, TableRenderer, TableViewport};
pub use types::{PixelMetadata, SpanAttrs, StyledSpan, Viewport};
pub use width::{GlyphWidth, WidthOracle};
