use serde::Serialize;

use super::CellConfig;
use crate::error::{GridError, Result};

/// Authoritative grid content: per-axis sizes and a row-major cell matrix.
///
/// The shape is fixed at construction. Cells are addressed `(row, col)`
/// everywhere in the crate.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableData {
    row_sizes: Vec<f64>,
    col_sizes: Vec<f64>,
    cells: Vec<Vec<CellConfig>>,
}

impl TableData {
    /// Build a table, rejecting any shape mismatch or unusable size.
    ///
    /// # Errors
    /// Returns an error if the cell matrix does not have `row_sizes.len()`
    /// rows of `col_sizes.len()` cells each, or if any size is not a
    /// positive finite number.
    pub fn new(
        row_sizes: Vec<f64>,
        col_sizes: Vec<f64>,
        cells: Vec<Vec<CellConfig>>,
    ) -> Result<Self> {
        validate_sizes("row", &row_sizes)?;
        validate_sizes("column", &col_sizes)?;

        if cells.len() != row_sizes.len() {
            return Err(GridError::RowCountMismatch {
                expected: row_sizes.len(),
                actual: cells.len(),
            });
        }
        for (row, cells_in_row) in cells.iter().enumerate() {
            if cells_in_row.len() != col_sizes.len() {
                return Err(GridError::ColumnCountMismatch {
                    row,
                    expected: col_sizes.len(),
                    actual: cells_in_row.len(),
                });
            }
        }

        Ok(Self {
            row_sizes,
            col_sizes,
            cells,
        })
    }

    /// A table of empty cells.
    ///
    /// # Errors
    /// Returns an error if any size is not a positive finite number.
    pub fn blank(row_sizes: Vec<f64>, col_sizes: Vec<f64>) -> Result<Self> {
        let cells = vec![vec![CellConfig::default(); col_sizes.len()]; row_sizes.len()];
        Self::new(row_sizes, col_sizes, cells)
    }

    pub fn row_count(&self) -> usize {
        self.row_sizes.len()
    }

    pub fn col_count(&self) -> usize {
        self.col_sizes.len()
    }

    pub fn row_sizes(&self) -> &[f64] {
        &self.row_sizes
    }

    pub fn col_sizes(&self) -> &[f64] {
        &self.col_sizes
    }

    /// Cell at `(row, col)`, or `None` outside the table.
    pub fn cell(&self, row: usize, col: usize) -> Option<&CellConfig> {
        self.cells.get(row)?.get(col)
    }

    pub(crate) fn cell_mut(&mut self, row: usize, col: usize) -> Option<&mut CellConfig> {
        self.cells.get_mut(row)?.get_mut(col)
    }

    /// Replace the cell at `(row, col)`.
    ///
    /// # Errors
    /// Returns `CellOutOfRange` if the address is outside the table.
    pub fn set_cell(&mut self, row: usize, col: usize, cell: CellConfig) -> Result<()> {
        let slot = self
            .cell_mut(row, col)
            .ok_or(GridError::CellOutOfRange { row, col })?;
        *slot = cell;
        Ok(())
    }
}

fn validate_sizes(axis: &'static str, sizes: &[f64]) -> Result<()> {
    match sizes
        .iter()
        .enumerate()
        .find(|(_, size)| !(size.is_finite() && **size > 0.0))
    {
        Some((index, &value)) => Err(GridError::InvalidSize { axis, index, value }),
        None => Ok(()),
    }
}
