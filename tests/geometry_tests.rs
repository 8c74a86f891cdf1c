//! Geometry index tests
//!
//! Offset/index conversion over non-uniform sizes, checked against the
//! linear reference and with generated size sequences.

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

use gridview::layout::{geometry, hit_test, GeometryIndex, GridLayout, Viewport};
use proptest::prelude::*;
use test_case::test_case;

#[test_case(-0.5 => None ; "negative offset")]
#[test_case(0.0 => Some((0, 0.0, 10.0)) ; "origin")]
#[test_case(9.99 => Some((0, 0.0, 10.0)) ; "just before first edge")]
#[test_case(10.0 => Some((1, 10.0, 25.0)) ; "on first edge")]
#[test_case(39.0 => Some((2, 35.0, 5.0)) ; "last cell")]
#[test_case(40.0 => None ; "on the far edge")]
#[test_case(41.0 => None ; "past the end")]
#[test_case(f64::NAN => None ; "not a number")]
fn lookup_on_non_uniform_sizes(offset: f64) -> Option<(usize, f64, f64)> {
    let index = GeometryIndex::new(&[10.0, 25.0, 5.0]);
    index.index_at(offset).map(|hit| (hit.index, hit.start, hit.size))
}

#[test]
fn extent_is_sum_of_sizes() {
    let index = GeometryIndex::new(&[10.0, 25.0, 5.0]);
    assert_eq!(index.extent(), 40.0);
    assert_eq!(index.len(), 3);
    assert_eq!(GeometryIndex::new(&[]).extent(), 0.0);
    assert!(GeometryIndex::new(&[]).index_at(0.0).is_none());
}

#[test]
fn offset_of_past_end_is_extent() {
    let sizes = [10.0, 25.0, 5.0];
    assert_eq!(geometry::offset_of(&sizes, 3), 40.0);
    assert_eq!(GeometryIndex::new(&sizes).offset_of(7), 40.0);
}

fn sizes_strategy() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(1.0_f64..120.0, 1..60)
}

proptest! {
    #[test]
    fn prefix_lookup_matches_linear_scan(sizes in sizes_strategy(), t in 0.0_f64..1.0) {
        let index = GeometryIndex::new(&sizes);
        let offset = t * index.extent() * 1.1 - 1.0;
        prop_assert_eq!(index.index_at(offset), geometry::index_at(&sizes, offset));
    }

    #[test]
    fn lookup_round_trips_through_offset(sizes in sizes_strategy(), t in 0.0_f64..1.0) {
        let index = GeometryIndex::new(&sizes);
        let offset = t * index.extent();
        if let Some(hit) = index.index_at(offset) {
            let start = geometry::offset_of(&sizes, hit.index);
            prop_assert!(start <= offset);
            prop_assert!(offset < start + sizes[hit.index]);
            prop_assert_eq!(start, hit.start);
        }
    }

    #[test]
    fn lookup_is_monotonic(sizes in sizes_strategy(), a in 0.0_f64..1.0, b in 0.0_f64..1.0) {
        let index = GeometryIndex::new(&sizes);
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let lo = index.index_at(lo * index.extent());
        let hi = index.index_at(hi * index.extent());
        if let (Some(lo), Some(hi)) = (lo, hi) {
            prop_assert!(lo.index <= hi.index);
        }
    }

    #[test]
    fn hit_test_round_trips_under_scroll(
        rows in sizes_strategy(),
        cols in sizes_strategy(),
        sx in 0.0_f64..1.0,
        sy in 0.0_f64..1.0,
        px in 0.0_f64..1.0,
        py in 0.0_f64..1.0,
    ) {
        let layout = GridLayout::from_sizes(&rows, &cols);
        let mut viewport = Viewport::new(200.0, 150.0);
        viewport.set_scroll(gridview::layout::Axis::Horizontal, sx * layout.total_width(), &layout);
        viewport.set_scroll(gridview::layout::Axis::Vertical, sy * layout.total_height(), &layout);

        let x = px * 200.0;
        let y = py * 150.0;
        if let Some(bound) = hit_test::bound_at(&layout, &viewport, x, y) {
            let content_x = x + viewport.scroll_left;
            let content_y = y + viewport.scroll_top;
            let col_start = geometry::offset_of(&cols, bound.col_index);
            let row_start = geometry::offset_of(&rows, bound.row_index);
            prop_assert!(col_start <= content_x && content_x < col_start + cols[bound.col_index]);
            prop_assert!(row_start <= content_y && content_y < row_start + rows[bound.row_index]);
            prop_assert_eq!(bound.width, cols[bound.col_index]);
            prop_assert_eq!(bound.height, rows[bound.row_index]);
        }
    }
}
