//! gridview - virtualized spreadsheet grid widget for the web
//!
//! Renders a large table of cells with non-uniform row heights and column
//! widths onto a single Canvas 2D surface via WebAssembly:
//! - Only the visible subgrid is painted, with O(log n) offset lookup
//! - Clamped scrolling with draggable scrollbar thumbs and wheel support
//! - Cell selection outline kept aligned across scrolls
//! - In-place editing with commit-on-click
//!
//! # Usage (JavaScript)
//!
//! ```javascript
//! import init, { GridView } from 'gridview';
//! await init();
//! const grid = new GridView(container, {
//!   rowSizes: [20, 20, 20],
//!   colSizes: [50, 50],
//!   cells: [[{ displayText: 'a' }, {}], [{}, {}], [{}, {}]],
//! });
//! grid.destroy();
//! ```
//!
//! # Usage (Rust, headless)
//!
//! ```
//! use gridview::{Grid, GridOptions, HeadlessHost, TableData};
//!
//! let table = TableData::blank(vec![20.0; 3], vec![50.0; 2]).unwrap();
//! let mut host = HeadlessHost::new(100.0, 40.0);
//! let grid = Grid::new(&mut host, table, GridOptions::default()).unwrap();
//! let bound = grid.bound_at(60.0, 25.0).unwrap();
//! assert_eq!((bound.row_index, bound.col_index), (1, 1));
//! ```

pub mod config;
pub mod editor;
pub mod error;
pub mod host;
pub mod layout;
pub mod overlay;
pub mod render;
pub mod types;
pub mod viewer;

use wasm_bindgen::prelude::*;

pub use config::{GridConfig, GridOptions};
pub use error::{GridError, Result};
pub use host::{GridHost, HeadlessHost};
pub use viewer::Grid;
#[cfg(target_arch = "wasm32")]
pub use viewer::web::GridView;

pub use types::*;

/// Get the library version
#[must_use]
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
