//! Cell editing mutations.
//!
//! Applies committed edits to the in-memory table.

use crate::error::{GridError, Result};
use crate::types::TableData;

/// Write committed editor text into both texts of the cell.
///
/// The cell's border and font overrides are kept. Empty text is a valid edit.
///
/// # Errors
/// Returns `CellOutOfRange` if `(row, col)` is outside the table.
pub fn apply_edit(table: &mut TableData, row: usize, col: usize, text: &str) -> Result<()> {
    let cell = table
        .cell_mut(row, col)
        .ok_or(GridError::CellOutOfRange { row, col })?;
    cell.display_text = text.to_string();
    cell.edit_text = text.to_string();
    tracing::debug!(row, col, len = text.len(), "edit committed");
    Ok(())
}
