//! In-place editing through pointer events.
//!
//! Double click opens the editor, a later click commits it, and the committed
//! text lands in both texts of the edited cell.

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

mod common;

use gridview::editor::{Commit, EditState};
use gridview::layout::Axis;
use gridview::{CellConfig, FontConfig, GridOptions, Rect, TableData};

/// 2x2 table whose (1, 1) cell shows "42".
fn answer_grid() -> common::TestGrid {
    let cells = vec![
        vec![CellConfig::text("a"), CellConfig::text("b")],
        vec![CellConfig::text("c"), CellConfig::text("42")],
    ];
    let table = TableData::new(vec![20.0, 20.0], vec![50.0, 50.0], cells).unwrap();
    common::grid(table, 200.0, 100.0)
}

#[test]
fn double_click_opens_editor_over_cell() {
    let mut grid = answer_grid();
    assert!(grid.on_double_click(60.0, 25.0));

    assert_eq!(grid.editor().editing_cell(), Some((1, 1)));
    assert_eq!(grid.selection().selected(), Some((1, 1)));

    let input = grid.editor().input();
    assert!(input.visible);
    assert!(input.focused);
    assert_eq!(input.value, "42");
    assert_eq!(input.rect, Rect::new(50.0, 20.0, 49.0, 19.0));
    assert_eq!(input.font_size, 12.0);
}

#[test]
fn click_elsewhere_commits_typed_text() {
    let mut grid = answer_grid();
    grid.on_double_click(60.0, 25.0);
    grid.editor_input_mut().type_text("43");
    grid.surface_mut().clear();

    let commit = grid.on_click(10.0, 5.0).unwrap();
    assert_eq!(
        commit,
        Commit {
            row: 1,
            col: 1,
            text: "43".into()
        }
    );

    let cell = grid.cell(1, 1).unwrap();
    assert_eq!(cell.display_text, "43");
    assert_eq!(cell.edit_text, "43");
    assert!(!grid.editor().is_editing());
    assert!(!grid.editor().input().visible);

    // The committed cell was repainted and the click selected (0, 0)
    assert!(common::texts(&grid).contains(&"43".to_string()));
    assert_eq!(grid.selection().selected(), Some((0, 0)));
}

#[test]
fn commit_uses_edited_cell_not_clicked_cell() {
    let mut grid = answer_grid();
    grid.on_click(10.0, 5.0);
    assert_eq!(grid.selection().selected(), Some((0, 0)));

    grid.on_double_click(60.0, 25.0);
    grid.editor_input_mut().type_text("x");
    grid.on_click(60.0, 5.0);

    assert_eq!(grid.cell(0, 0).unwrap().display_text, "a");
    assert_eq!(grid.cell(0, 1).unwrap().display_text, "b");
    assert_eq!(grid.cell(1, 1).unwrap().display_text, "x");
}

#[test]
fn commit_keeps_cell_style() {
    let font = FontConfig {
        bold: Some(true),
        ..FontConfig::default()
    };
    let cells = vec![vec![CellConfig::text("1,000")
        .with_edit_text("1000")
        .with_font(font.clone())]];
    let table = TableData::new(vec![20.0], vec![80.0], cells).unwrap();
    let mut grid = common::grid(table, 200.0, 100.0);

    grid.on_double_click(5.0, 5.0);
    assert_eq!(grid.editor().input().value, "1000");
    grid.editor_input_mut().type_text("2000");
    grid.commit_edit();

    let cell = grid.cell(0, 0).unwrap();
    assert_eq!(cell.display_text, "2000");
    assert_eq!(cell.font.as_ref(), Some(&font));
}

#[test]
fn committing_while_closed_is_a_noop() {
    let mut grid = answer_grid();
    let before = grid.table().clone();
    assert!(grid.commit_edit().is_none());
    assert!(grid.on_click(10.0, 5.0).is_none());
    assert_eq!(grid.cell(1, 1), before.cell(1, 1));
}

#[test]
fn cancel_discards_typed_text() {
    let mut grid = answer_grid();
    grid.on_double_click(60.0, 25.0);
    grid.editor_input_mut().type_text("nope");

    assert!(grid.cancel_edit());
    assert_eq!(grid.editor().state(), EditState::Closed);
    assert_eq!(grid.cell(1, 1).unwrap().display_text, "42");
    assert!(grid.on_click(10.0, 5.0).is_none());
    assert!(!grid.cancel_edit());
}

#[test]
fn second_double_click_commits_then_reopens() {
    let mut grid = answer_grid();
    grid.on_double_click(60.0, 25.0);
    grid.editor_input_mut().type_text("43");

    assert!(grid.on_double_click(10.0, 5.0));
    assert_eq!(grid.cell(1, 1).unwrap().display_text, "43");
    assert_eq!(grid.editor().editing_cell(), Some((0, 0)));
    assert_eq!(grid.editor().input().value, "a");
}

#[test]
fn double_click_past_table_edge_opens_nothing() {
    let mut grid = answer_grid();
    assert!(!grid.on_double_click(150.0, 80.0));
    assert!(!grid.editor().is_editing());
    assert_eq!(grid.selection().selected(), None);
}

#[test]
fn editor_stays_put_while_scrolling() {
    let mut grid = common::three_page_grid();
    assert!(grid.begin_edit(1, 0));
    let opened_at = grid.editor().input().rect;

    grid.set_scroll(Axis::Vertical, 100.0);
    grid.on_wheel(40.0, 0.0);

    assert_eq!(grid.editor().input().rect, opened_at);
    assert_eq!(grid.editor().bound().unwrap().y, 20.0);
    assert!(grid.editor().is_editing());
}

#[test]
fn begin_edit_outside_table_fails() {
    let mut grid = answer_grid();
    assert!(!grid.begin_edit(5, 0));
    assert!(!grid.editor().is_editing());
}

#[test]
fn editor_uses_resolved_font() {
    let mut options = GridOptions::default();
    options.defaults.font.name = "Arial".into();
    options.defaults.font.size = 16.0;
    let mut grid = common::grid_with(common::uniform_table(2, 2, 20.0, 50.0), 200.0, 100.0, options);

    grid.begin_edit(0, 1);
    let input = grid.editor().input();
    assert_eq!(input.font_family, "Arial");
    assert_eq!(input.font_size, 16.0);
}
