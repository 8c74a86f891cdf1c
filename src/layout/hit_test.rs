//! Pointer hit testing.
//!
//! Pointer offsets arrive in viewport-local pixels. They are shifted into
//! content space by the current scroll, located on both axes, and the
//! resulting bound is shifted back so callers always get paint-space
//! coordinates.

use super::{GridLayout, Viewport};
use crate::types::CellBound;

/// Cell under a viewport-local pointer offset, or `None` past the table edges.
pub fn bound_at(
    layout: &GridLayout,
    viewport: &Viewport,
    offset_x: f64,
    offset_y: f64,
) -> Option<CellBound> {
    let (content_x, content_y) = viewport.to_content(offset_x, offset_y);
    let col = layout.col_at_x(content_x)?;
    let row = layout.row_at_y(content_y)?;
    let (x, y) = viewport.to_screen(col.start, row.start);
    Some(CellBound {
        row_index: row.index,
        col_index: col.index,
        x,
        y,
        width: col.size,
        height: row.size,
    })
}

/// Viewport-local bound of a known cell at the current scroll.
pub fn cell_bound(
    layout: &GridLayout,
    viewport: &Viewport,
    row: usize,
    col: usize,
) -> Option<CellBound> {
    let rect = layout.cell_rect(row, col)?;
    let (x, y) = viewport.to_screen(rect.x, rect.y);
    Some(CellBound {
        row_index: row,
        col_index: col,
        x,
        y,
        width: rect.width,
        height: rect.height,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::layout::Axis;

    #[test]
    fn hit_on_unscrolled_grid() {
        let layout = GridLayout::from_sizes(&[20.0, 20.0, 20.0], &[50.0, 50.0]);
        let viewport = Viewport::new(100.0, 40.0);

        let bound = bound_at(&layout, &viewport, 60.0, 25.0).unwrap();
        assert_eq!(
            bound,
            CellBound {
                row_index: 1,
                col_index: 1,
                x: 50.0,
                y: 20.0,
                width: 50.0,
                height: 20.0,
            }
        );
    }

    #[test]
    fn scrolled_hit_returns_paint_space() {
        let layout = GridLayout::from_sizes(&[20.0; 10], &[50.0; 2]);
        let mut viewport = Viewport::new(100.0, 40.0);
        viewport.set_scroll(Axis::Vertical, 30.0, &layout);

        let bound = bound_at(&layout, &viewport, 10.0, 5.0).unwrap();
        assert_eq!(bound.row_index, 1);
        assert_eq!(bound.y, -10.0);
        assert_eq!(cell_bound(&layout, &viewport, 1, 0).unwrap(), bound);
    }

    #[test]
    fn miss_below_short_table() {
        let layout = GridLayout::from_sizes(&[20.0], &[50.0]);
        let viewport = Viewport::new(100.0, 100.0);
        assert!(bound_at(&layout, &viewport, 10.0, 30.0).is_none());
        assert!(bound_at(&layout, &viewport, 60.0, 10.0).is_none());
        assert!(cell_bound(&layout, &viewport, 1, 0).is_none());
    }
}
