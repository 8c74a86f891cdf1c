//! Rendering tests against the recorded paint log.
//!
//! Covers the visible-range walk, borders, text anchoring and clipping, wrap
//! and fit-to-cell, and the device pixel ratio scale.

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

mod common;

use gridview::layout::Axis;
use gridview::render::{PaintOp, TextAlign, TextBaseline};
use gridview::{
    BorderConfig, BorderLineStyle, CellConfig, EdgeConfig, FontConfig, Grid, GridOptions,
    HeadlessHost, HorizontalAlign, Rect, TableData, VerticalAlign,
};
use test_case::test_case;

/// `(x, y, align, baseline, size)` of the fill that drew `text`.
fn text_anchor(grid: &common::TestGrid, text: &str) -> (f64, f64, TextAlign, TextBaseline, f64) {
    grid.surface()
        .ops()
        .iter()
        .find_map(|op| match op {
            PaintOp::FillText {
                text: t,
                x,
                y,
                align,
                baseline,
                size,
                ..
            } if t == text => Some((*x, *y, *align, *baseline, *size)),
            _ => None,
        })
        .unwrap_or_else(|| panic!("no fill for {text:?}"))
}

fn single_cell(cell: CellConfig, width: f64, height: f64) -> common::TestGrid {
    let table = TableData::new(vec![height], vec![width], vec![vec![cell]]).unwrap();
    common::grid(table, 200.0, 100.0)
}

#[test]
fn first_frame_paints_visible_cells_only() {
    let grid = common::grid(common::uniform_table(10, 10, 20.0, 50.0), 100.0, 40.0);
    let texts = common::texts(&grid);

    // Cells whose leading edge sits on the far viewport edge are included
    for r in 0..3 {
        for c in 0..3 {
            assert!(texts.contains(&format!("{r},{c}")), "missing {r},{c}");
        }
    }
    assert_eq!(texts.len(), 9);
    assert!(!texts.contains(&"3,0".to_string()));
    assert!(!texts.contains(&"0,3".to_string()));
}

#[test]
fn partially_scrolled_cells_are_skipped() {
    let mut grid = common::grid(common::uniform_table(10, 10, 20.0, 50.0), 100.0, 40.0);
    grid.set_scroll(Axis::Horizontal, 10.0);
    grid.surface_mut().clear();
    let stats = grid.render();

    assert_eq!(stats.cols, 1..3);
    assert_eq!(stats.rows, 0..3);
    assert_eq!(stats.painted, 6);
    let texts = common::texts(&grid);
    assert!(!texts.iter().any(|t| t.ends_with(",0")));
    assert_eq!(common::text_clip(&grid, "0,1").unwrap().x, 40.0);
}

#[test]
fn render_starts_by_clearing_the_viewport() {
    let mut grid = common::small_grid();
    grid.surface_mut().clear();
    grid.render();
    assert_eq!(
        grid.surface().ops().first(),
        Some(&PaintOp::ClearRect {
            rect: Rect::new(0.0, 0.0, 100.0, 40.0)
        })
    );
}

#[test]
fn render_is_idempotent() {
    let mut grid = common::three_page_grid();
    grid.set_scroll(Axis::Vertical, 35.0);

    grid.surface_mut().clear();
    let first_stats = grid.render();
    let first = grid.surface_mut().take_ops();
    let second_stats = grid.render();
    let second = grid.surface_mut().take_ops();

    assert_eq!(first_stats, second_stats);
    assert_eq!(first, second);
}

#[test]
fn default_borders_stroke_right_and_bottom() {
    let grid = common::small_grid();
    let strokes = common::strokes(grid.surface().ops());

    assert_eq!(strokes[0], ((49.5, 0.0), (49.5, 20.0)));
    assert_eq!(strokes[1], ((0.0, 19.5), (50.0, 19.5)));
}

#[test]
fn dotted_and_zero_width_edges() {
    let cell = CellConfig::text("x").with_border(BorderConfig {
        right: Some(EdgeConfig {
            size: Some(0.0),
            ..EdgeConfig::default()
        }),
        bottom: Some(EdgeConfig {
            style: Some(BorderLineStyle::Dotted),
            color: Some("#f00".into()),
            ..EdgeConfig::default()
        }),
    });
    let grid = single_cell(cell, 80.0, 30.0);

    let strokes: Vec<_> = grid
        .surface()
        .ops()
        .iter()
        .filter_map(|op| match op {
            PaintOp::StrokeLine { from, dash, color, .. } => Some((*from, dash.clone(), color.clone())),
            _ => None,
        })
        .collect();
    assert_eq!(strokes.len(), 1);
    assert_eq!(strokes[0].0, (0.0, 29.5));
    assert_eq!(strokes[0].1, vec![4.0, 4.0]);
    assert_eq!(strokes[0].2, "#f00");
}

#[test_case(HorizontalAlign::Left, VerticalAlign::Top => (0.0, 0.0, TextAlign::Left, TextBaseline::Top) ; "left top")]
#[test_case(HorizontalAlign::Middle, VerticalAlign::Middle => (50.0, 20.0, TextAlign::Center, TextBaseline::Middle) ; "centred")]
#[test_case(HorizontalAlign::Right, VerticalAlign::Bottom => (100.0, 40.0, TextAlign::Right, TextBaseline::Bottom) ; "right bottom")]
#[test_case(HorizontalAlign::Left, VerticalAlign::Middle => (0.0, 20.0, TextAlign::Left, TextBaseline::Middle) ; "default anchoring")]
fn text_anchor_follows_alignment(
    horizontal: HorizontalAlign,
    vertical: VerticalAlign,
) -> (f64, f64, TextAlign, TextBaseline) {
    let cell = CellConfig::text("hi").with_font(FontConfig {
        horizontal: Some(horizontal),
        vertical: Some(vertical),
        ..FontConfig::default()
    });
    let grid = single_cell(cell, 100.0, 40.0);
    let (x, y, align, baseline, _) = text_anchor(&grid, "hi");
    (x, y, align, baseline)
}

#[test]
fn odd_sizes_round_centre_up() {
    let cell = CellConfig::text("hi").with_font(FontConfig {
        horizontal: Some(HorizontalAlign::Middle),
        ..FontConfig::default()
    });
    let grid = single_cell(cell, 51.0, 21.0);
    let (x, y, ..) = text_anchor(&grid, "hi");
    assert_eq!((x, y), (26.0, 11.0));
}

#[test]
fn text_is_clipped_to_its_cell() {
    let mut grid = common::three_page_grid();
    grid.set_scroll(Axis::Vertical, 20.0);
    assert_eq!(
        common::text_clip(&grid, "2,1"),
        Some(Rect::new(50.0, 20.0, 50.0, 20.0))
    );

    let max_width = grid.surface().ops().iter().find_map(|op| match op {
        PaintOp::FillText { text, max_width, .. } if text == "2,1" => *max_width,
        _ => None,
    });
    assert_eq!(max_width, Some(50.0));
}

#[test]
fn empty_cells_paint_borders_but_no_text() {
    let table = TableData::blank(vec![20.0; 2], vec![50.0; 2]).unwrap();
    let grid = common::grid(table, 100.0, 40.0);
    assert!(common::texts(&grid).is_empty());
    assert_eq!(common::strokes(grid.surface().ops()).len(), 8);
}

#[test]
fn fit_shrinks_font_to_cell_width() {
    // 10 chars at 12px measure 60px in a 50px cell
    let cell = CellConfig::text("abcdefghij").with_font(FontConfig {
        fit: Some(true),
        ..FontConfig::default()
    });
    let grid = single_cell(cell, 50.0, 20.0);
    let (.., size) = text_anchor(&grid, "abcdefghij");
    assert_eq!(size, 10.0);
}

#[test]
fn fit_leaves_short_text_alone() {
    let cell = CellConfig::text("ab").with_font(FontConfig {
        fit: Some(true),
        ..FontConfig::default()
    });
    let grid = single_cell(cell, 50.0, 20.0);
    let (.., size) = text_anchor(&grid, "ab");
    assert_eq!(size, 12.0);
}

#[test]
fn wrap_breaks_at_whitespace_and_stacks_lines() {
    // Each word is 20px at size 10; two words need 45px
    let cell = CellConfig::text("aaaa bbbb cccc").with_font(FontConfig {
        size: Some(10.0),
        wrap: Some(true),
        vertical: Some(VerticalAlign::Top),
        ..FontConfig::default()
    });
    let grid = single_cell(cell, 30.0, 60.0);

    assert_eq!(common::texts(&grid), vec!["aaaa", "bbbb", "cccc"]);
    let (_, y0, _, baseline, _) = text_anchor(&grid, "aaaa");
    let (_, y1, ..) = text_anchor(&grid, "bbbb");
    assert_eq!(y0, 0.0);
    assert_eq!(baseline, TextBaseline::Top);
    assert!((y1 - 12.0).abs() < 1e-9);
}

#[test]
fn wrap_wins_over_fit() {
    let cell = CellConfig::text("aaaa bbbb").with_font(FontConfig {
        size: Some(10.0),
        wrap: Some(true),
        fit: Some(true),
        ..FontConfig::default()
    });
    let grid = single_cell(cell, 30.0, 60.0);
    assert_eq!(common::texts(&grid), vec!["aaaa", "bbbb"]);
    let (.., size) = text_anchor(&grid, "aaaa");
    assert_eq!(size, 10.0);
}

#[test]
fn device_pixel_ratio_scales_once() {
    let mut host = HeadlessHost::new(100.0, 40.0).with_device_pixel_ratio(2.0);
    let table = common::labelled_table(&[20.0, 20.0], &[50.0, 50.0]);
    let mut grid = Grid::new(&mut host, table, GridOptions::default()).unwrap();

    assert_eq!(
        grid.surface().ops().first(),
        Some(&PaintOp::Scale { sx: 2.0, sy: 2.0 })
    );
    grid.set_scroll(Axis::Vertical, 0.0);
    grid.render();
    let scales = grid
        .surface()
        .ops()
        .iter()
        .filter(|op| matches!(op, PaintOp::Scale { .. }))
        .count();
    assert_eq!(scales, 1);
}

#[test]
fn set_cell_repaints_only_that_cell() {
    let mut grid = common::small_grid();
    grid.surface_mut().clear();
    grid.set_cell(0, 1, CellConfig::text("new")).unwrap();

    assert_eq!(common::texts(&grid), vec!["new"]);
    assert_eq!(
        grid.surface().ops().first(),
        Some(&PaintOp::ClearRect {
            rect: Rect::new(50.0, 0.0, 50.0, 20.0)
        })
    );
    assert_eq!(grid.cell(0, 1).unwrap().display_text, "new");
}

#[test]
fn render_cell_outside_visible_range_paints_nothing() {
    let mut grid = common::three_page_grid();
    grid.surface_mut().clear();
    assert!(!grid.render_cell(14, 5));
    assert!(grid.surface().ops().is_empty());
    assert!(grid.render_cell(0, 0));
}
