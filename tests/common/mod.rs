//! Common test utilities.
//!
//! Builders for tables and headless grids, plus paint-log helpers.
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

use gridview::render::PaintOp;
use gridview::{CellConfig, Grid, GridOptions, HeadlessHost, Rect, TableData};

pub type TestGrid = Grid<HeadlessHost>;

/// A table whose cells read `"r,c"` in both display and edit text.
#[must_use]
pub fn labelled_table(row_sizes: &[f64], col_sizes: &[f64]) -> TableData {
    let cells = (0..row_sizes.len())
        .map(|r| {
            (0..col_sizes.len())
                .map(|c| CellConfig::text(format!("{r},{c}")))
                .collect()
        })
        .collect();
    TableData::new(row_sizes.to_vec(), col_sizes.to_vec(), cells).expect("valid table")
}

/// A uniform `rows x cols` labelled table.
#[must_use]
pub fn uniform_table(rows: usize, cols: usize, row_height: f64, col_width: f64) -> TableData {
    labelled_table(&vec![row_height; rows], &vec![col_width; cols])
}

/// A headless grid with default options.
#[must_use]
pub fn grid(table: TableData, width: f64, height: f64) -> TestGrid {
    grid_with(table, width, height, GridOptions::default())
}

#[must_use]
pub fn grid_with(table: TableData, width: f64, height: f64, options: GridOptions) -> TestGrid {
    let mut host = HeadlessHost::new(width, height);
    Grid::new(&mut host, table, options).expect("grid should build")
}

/// The 3x2 table from the hit-test scenario: rows 20px, columns 50px.
#[must_use]
pub fn small_grid() -> TestGrid {
    grid(labelled_table(&[20.0, 20.0, 20.0], &[50.0, 50.0]), 100.0, 40.0)
}

/// A 300x300 content area behind a 100x100 viewport.
#[must_use]
pub fn three_page_grid() -> TestGrid {
    grid(uniform_table(15, 6, 20.0, 50.0), 100.0, 100.0)
}

/// Text fills recorded since the surface was last cleared.
#[must_use]
pub fn texts(grid: &TestGrid) -> Vec<String> {
    grid.surface()
        .text_strings()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Clip rectangle of the fill that drew `text`.
#[must_use]
pub fn text_clip(grid: &TestGrid, text: &str) -> Option<Rect> {
    grid.surface().ops().iter().find_map(|op| match op {
        PaintOp::FillText { text: t, clip, .. } if t == text => Some(*clip),
        _ => None,
    })
}

/// Every recorded stroke as `(from, to)`.
#[must_use]
pub fn strokes(ops: &[PaintOp]) -> Vec<((f64, f64), (f64, f64))> {
    ops.iter()
        .filter_map(|op| match op {
            PaintOp::StrokeLine { from, to, .. } => Some((*from, *to)),
            _ => None,
        })
        .collect()
}
