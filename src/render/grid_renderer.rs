//! Viewport renderer.
//!
//! Paints the visible subgrid and nothing else. The visible range starts at
//! the first row/column whose offset, after scrolling, is not negative, so a
//! cell partially scrolled past the left/top edge is skipped rather than
//! clipped. Each axis stops at the first edge past the viewport extent.

use std::ops::Range;

use serde::Serialize;

use super::backend::PaintContext;
use super::border::draw_borders;
use super::text::draw_text;
use crate::layout::{GridLayout, Viewport};
use crate::types::{DefaultStyle, Rect, TableData};

/// What a full render touched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderStats {
    pub rows: Range<usize>,
    pub cols: Range<usize>,
    /// Number of cells painted.
    pub painted: usize,
}

/// Everything a paint pass reads. Borrowed for the duration of one pass.
#[derive(Debug, Clone, Copy)]
pub struct Scene<'a> {
    pub table: &'a TableData,
    pub layout: &'a GridLayout,
    pub viewport: &'a Viewport,
    pub defaults: &'a DefaultStyle,
}

impl Scene<'_> {
    /// Full repaint of the viewport.
    ///
    /// Repeated calls with unchanged inputs issue the same paint operations.
    pub fn render<P: PaintContext>(&self, ctx: &mut P) -> RenderStats {
        ctx.clear_rect(Rect::new(0.0, 0.0, self.viewport.width, self.viewport.height));

        let range = self.viewport.visible_range(self.layout);
        let mut painted = 0;
        for row in range.rows.clone() {
            for col in range.cols.clone() {
                if self.paint_cell(ctx, row, col) {
                    painted += 1;
                }
            }
        }

        tracing::trace!(
            rows = ?range.rows,
            cols = ?range.cols,
            painted,
            scroll_left = self.viewport.scroll_left,
            scroll_top = self.viewport.scroll_top,
            "rendered viewport"
        );

        RenderStats {
            rows: range.rows,
            cols: range.cols,
            painted,
        }
    }

    /// Repaint a single cell if it is in the visible range.
    ///
    /// Returns `false` (and paints nothing) for a cell outside the range.
    pub fn render_cell<P: PaintContext>(&self, ctx: &mut P, row: usize, col: usize) -> bool {
        if !self.viewport.visible_range(self.layout).contains(row, col) {
            return false;
        }
        self.paint_cell(ctx, row, col)
    }

    fn paint_cell<P: PaintContext>(&self, ctx: &mut P, row: usize, col: usize) -> bool {
        let (Some(cell), Some(content)) = (self.table.cell(row, col), self.layout.cell_rect(row, col))
        else {
            return false;
        };

        let (x, y) = self.viewport.to_screen(content.x, content.y);
        let rect = Rect::new(x, y, content.width, content.height);
        let style = self.defaults.resolve(cell);

        ctx.clear_rect(rect);
        draw_borders(ctx, rect, &style.right, &style.bottom);
        draw_text(ctx, rect, &cell.display_text, &style.font);
        true
    }
}
