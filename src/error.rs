//! Structured error types for gridview.
//!
//! Only construction-time failures are errors. Pointer positions outside the
//! table are ordinary `None` results from the layout module.

/// All errors that can occur while building or driving a grid.
#[derive(Debug, thiserror::Error)]
pub enum GridError {
    /// The cell matrix does not have one row per row size.
    #[error("table has {actual} rows of cells but {expected} row sizes")]
    RowCountMismatch { expected: usize, actual: usize },

    /// A row of the cell matrix does not have one cell per column size.
    #[error("row {row} has {actual} cells but {expected} column sizes")]
    ColumnCountMismatch {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// A row height or column width is zero, negative, or not finite.
    #[error("invalid {axis} size {value} at index {index}")]
    InvalidSize {
        axis: &'static str,
        index: usize,
        value: f64,
    },

    /// The host could not provide a 2D paint context.
    #[error("Surface unavailable: {0}")]
    SurfaceUnavailable(String),

    /// The host could not create an overlay element.
    #[error("Overlay error: {0}")]
    Overlay(String),

    /// A cell address outside the table shape.
    #[error("cell ({row}, {col}) is outside the table")]
    CellOutOfRange { row: usize, col: usize },

    /// Configuration could not be decoded.
    #[error("Configuration: {0}")]
    Config(#[from] serde_json::Error),

    /// A JavaScript exception surfaced through the browser binding.
    #[error("{0}")]
    Js(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GridError>;

#[cfg(target_arch = "wasm32")]
impl From<GridError> for wasm_bindgen::JsValue {
    fn from(e: GridError) -> Self {
        wasm_bindgen::JsValue::from_str(&e.to_string())
    }
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for GridError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Js(
            value
                .as_string()
                .unwrap_or_else(|| format!("{value:?}")),
        )
    }
}
