//! Pre-computed layout data for a grid.
//!
//! Positions are computed once from the table's row and column sizes,
//! enabling O(log n) lookups for cell positions and hit testing.

use super::geometry::{AxisHit, GeometryIndex};
use crate::types::{Rect, TableData};

/// Pre-computed layout data for a grid
#[derive(Debug, Clone)]
pub struct GridLayout {
    /// Row edges (`rows.offset_of(i)` = y of row i's top edge)
    pub rows: GeometryIndex,
    /// Column edges (`cols.offset_of(i)` = x of column i's left edge)
    pub cols: GeometryIndex,
}

impl GridLayout {
    /// Create a layout from the table's row heights and column widths
    pub fn new(table: &TableData) -> Self {
        Self::from_sizes(table.row_sizes(), table.col_sizes())
    }

    pub fn from_sizes(row_sizes: &[f64], col_sizes: &[f64]) -> Self {
        Self {
            rows: GeometryIndex::new(row_sizes),
            cols: GeometryIndex::new(col_sizes),
        }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn col_count(&self) -> usize {
        self.cols.len()
    }

    /// Cell bounds in content coordinates (unscrolled)
    pub fn cell_rect(&self, row: usize, col: usize) -> Option<Rect> {
        let height = self.rows.size_of(row)?;
        let width = self.cols.size_of(col)?;
        Some(Rect::new(
            self.cols.offset_of(col),
            self.rows.offset_of(row),
            width,
            height,
        ))
    }

    /// Find row at content y position (binary search)
    pub fn row_at_y(&self, y: f64) -> Option<AxisHit> {
        self.rows.index_at(y)
    }

    /// Find column at content x position (binary search)
    pub fn col_at_x(&self, x: f64) -> Option<AxisHit> {
        self.cols.index_at(x)
    }

    /// Get total width of the grid
    pub fn total_width(&self) -> f64 {
        self.cols.extent()
    }

    /// Get total height of the grid
    pub fn total_height(&self) -> f64 {
        self.rows.extent()
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_layout() {
        let layout = GridLayout::from_sizes(&[20.0; 11], &[64.0; 6]);

        assert_eq!(layout.row_count(), 11);
        assert_eq!(layout.col_count(), 6);
        assert_eq!(layout.total_width(), 64.0 * 6.0);
        assert_eq!(layout.total_height(), 20.0 * 11.0);
    }

    #[test]
    fn test_cell_rect() {
        let layout = GridLayout::from_sizes(&[20.0, 30.0, 40.0], &[50.0, 60.0, 70.0]);

        let rect = layout.cell_rect(0, 0).unwrap();
        assert_eq!(rect, Rect::new(0.0, 0.0, 50.0, 20.0));

        let rect = layout.cell_rect(1, 2).unwrap();
        assert_eq!(rect.x, 110.0);
        assert_eq!(rect.y, 20.0);
        assert_eq!(rect.width, 70.0);
        assert_eq!(rect.height, 30.0);

        assert!(layout.cell_rect(3, 0).is_none());
        assert!(layout.cell_rect(0, 3).is_none());
    }

    #[test]
    fn test_row_at_y() {
        let layout = GridLayout::from_sizes(&[20.0; 11], &[64.0; 6]);

        assert_eq!(layout.row_at_y(0.0).unwrap().index, 0);
        assert_eq!(layout.row_at_y(10.0).unwrap().index, 0);
        assert_eq!(layout.row_at_y(20.0).unwrap().index, 1);
        assert_eq!(layout.row_at_y(50.0).unwrap().index, 2);
        assert!(layout.row_at_y(220.0).is_none());
    }

    #[test]
    fn test_col_at_x() {
        let layout = GridLayout::from_sizes(&[20.0; 11], &[64.0; 6]);

        assert_eq!(layout.col_at_x(0.0).unwrap().index, 0);
        assert_eq!(layout.col_at_x(32.0).unwrap().index, 0);
        assert_eq!(layout.col_at_x(64.0).unwrap().index, 1);
        assert_eq!(layout.col_at_x(160.0).unwrap().index, 2);
    }
}
