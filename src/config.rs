//! Widget configuration.
//!
//! ```json
//! {
//!   "rowSizes": [20, 20],
//!   "colSizes": [80, 120],
//!   "cells": [[{ "displayText": "a" }, { "displayText": "b" }],
//!             [{ "displayText": "c", "font": { "isBold": true } }, {}]],
//!   "options": { "selectionTracking": "translate" }
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::layout::DEFAULT_SCROLLBAR_THICKNESS;
use crate::render::selection::{SELECTION_BORDER_WIDTH, SELECTION_COLOR};
use crate::render::SelectionTracking;
use crate::types::{CellConfig, DefaultStyle, TableData};

/// Everything recognised at construction.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridConfig {
    pub row_sizes: Vec<f64>,
    pub col_sizes: Vec<f64>,
    pub cells: Vec<Vec<CellConfig>>,
    #[serde(default)]
    pub options: GridOptions,
}

impl GridConfig {
    /// # Errors
    /// Returns `Config` if the JSON is malformed or a mandatory field is missing.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Validate the table shape and split off the options.
    ///
    /// # Errors
    /// Returns the table validation error on a shape mismatch or bad size.
    pub fn into_parts(self) -> Result<(TableData, GridOptions)> {
        let table = TableData::new(self.row_sizes, self.col_sizes, self.cells)?;
        Ok((table, self.options))
    }
}

/// Optional behaviour and appearance settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GridOptions {
    /// Fallback for every cell style field a cell leaves unset.
    pub defaults: DefaultStyle,
    pub selection_tracking: SelectionTracking,
    pub scrollbar_thickness: f64,
    pub selection_color: String,
    pub selection_border_width: f64,
}

impl Default for GridOptions {
    fn default() -> Self {
        Self {
            defaults: DefaultStyle::default(),
            selection_tracking: SelectionTracking::default(),
            scrollbar_thickness: DEFAULT_SCROLLBAR_THICKNESS,
            selection_color: SELECTION_COLOR.to_string(),
            selection_border_width: SELECTION_BORDER_WIDTH,
        }
    }
}
