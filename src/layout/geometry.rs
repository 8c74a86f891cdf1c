//! Cumulative-offset geometry for one axis of non-uniform sizes.
//!
//! The free functions [`offset_of`] and [`index_at`] are the plain linear
//! definitions. [`GeometryIndex`] answers the same questions from a prefix-sum
//! array with binary search, which is what the widget uses on every pointer
//! event and scroll tick.

use std::ops::Range;

/// Result of locating an offset on one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisHit {
    pub index: usize,
    /// Cumulative offset of the hit index.
    pub start: f64,
    pub size: f64,
}

/// Sum of `sizes[0..index)`. Indices past the end give the total extent.
pub fn offset_of(sizes: &[f64], index: usize) -> f64 {
    sizes.iter().take(index).sum()
}

/// Index whose `[start, start + size)` span contains `offset`.
///
/// Returns `None` for negative offsets and offsets at or past the total extent.
pub fn index_at(sizes: &[f64], offset: f64) -> Option<AxisHit> {
    if offset.is_nan() || offset < 0.0 {
        return None;
    }
    let mut start = 0.0;
    for (index, &size) in sizes.iter().enumerate() {
        if offset < start + size {
            return Some(AxisHit { index, start, size });
        }
        start += size;
    }
    None
}

/// Prefix sums for one axis: `offsets[i]` is the leading edge of index `i`,
/// `offsets[len]` is the total extent.
#[derive(Debug, Clone)]
pub struct GeometryIndex {
    offsets: Vec<f64>,
}

impl GeometryIndex {
    pub fn new(sizes: &[f64]) -> Self {
        let mut offsets = Vec::with_capacity(sizes.len() + 1);
        let mut edge = 0.0;
        offsets.push(edge);
        for &size in sizes {
            edge += size;
            offsets.push(edge);
        }
        Self { offsets }
    }

    /// Number of indices on this axis.
    pub fn len(&self) -> usize {
        self.offsets.len().saturating_sub(1)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Total pixel extent of the axis.
    pub fn extent(&self) -> f64 {
        self.offsets.last().copied().unwrap_or(0.0)
    }

    /// Leading edge of `index`; indices past the end clamp to the extent.
    pub fn offset_of(&self, index: usize) -> f64 {
        self.offsets
            .get(index.min(self.len()))
            .copied()
            .unwrap_or(0.0)
    }

    pub fn size_of(&self, index: usize) -> Option<f64> {
        let start = self.offsets.get(index)?;
        let end = self.offsets.get(index + 1)?;
        Some(end - start)
    }

    /// O(log n) equivalent of [`index_at`].
    pub fn index_at(&self, offset: f64) -> Option<AxisHit> {
        if offset.is_nan() || offset < 0.0 || offset >= self.extent() {
            return None;
        }
        // Number of leading edges at or before `offset`; at least 1 since offsets[0] == 0.
        let index = self.offsets.partition_point(|&edge| edge <= offset) - 1;
        let start = *self.offsets.get(index)?;
        let size = self.size_of(index)?;
        Some(AxisHit { index, start, size })
    }

    /// Indices fully or partially inside `[scroll, scroll + extent]`, skipping
    /// any index whose leading edge lies before `scroll`.
    ///
    /// The span starts at the first index whose leading edge minus `scroll` is
    /// non-negative and stops before the first index whose leading edge minus
    /// `scroll` exceeds `extent`.
    pub fn visible_span(&self, scroll: f64, extent: f64) -> Range<usize> {
        let edges = self.offsets.get(..self.len()).unwrap_or(&[]);
        let start = edges.partition_point(|&edge| edge - scroll < 0.0);
        let end = edges.partition_point(|&edge| edge - scroll <= extent);
        start..end.max(start)
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp
)]
mod tests {
    use super::*;

    #[test]
    fn offsets_accumulate() {
        let sizes = [10.0, 20.0, 30.0];
        assert_eq!(offset_of(&sizes, 0), 0.0);
        assert_eq!(offset_of(&sizes, 2), 30.0);
        assert_eq!(offset_of(&sizes, 9), 60.0);

        let index = GeometryIndex::new(&sizes);
        assert_eq!(index.len(), 3);
        assert_eq!(index.extent(), 60.0);
        assert_eq!(index.offset_of(2), 30.0);
        assert_eq!(index.offset_of(9), 60.0);
    }

    #[test]
    fn index_at_edges() {
        let sizes = [10.0, 20.0, 30.0];
        let index = GeometryIndex::new(&sizes);

        for lookup in [index_at(&sizes, 10.0), index.index_at(10.0)] {
            let hit = lookup.unwrap();
            assert_eq!(hit.index, 1);
            assert_eq!(hit.start, 10.0);
            assert_eq!(hit.size, 20.0);
        }
        assert_eq!(index.index_at(0.0).unwrap().index, 0);
        assert_eq!(index.index_at(59.9).unwrap().index, 2);
        assert!(index.index_at(60.0).is_none());
        assert!(index.index_at(-0.5).is_none());
        assert!(index.index_at(f64::NAN).is_none());
        assert!(index_at(&sizes, 60.0).is_none());
        assert!(index_at(&sizes, -1.0).is_none());
    }

    #[test]
    fn empty_axis() {
        let index = GeometryIndex::new(&[]);
        assert!(index.is_empty());
        assert_eq!(index.extent(), 0.0);
        assert!(index.index_at(0.0).is_none());
        assert_eq!(index.visible_span(0.0, 100.0), 0..0);
    }

    #[test]
    fn visible_span_skips_partially_scrolled_cells() {
        let index = GeometryIndex::new(&[50.0, 50.0, 50.0, 50.0]);
        assert_eq!(index.visible_span(0.0, 100.0), 0..3);
        // Index 0 starts before the scroll origin and is skipped.
        assert_eq!(index.visible_span(10.0, 100.0), 1..3);
        assert_eq!(index.visible_span(50.0, 100.0), 1..4);
        assert_eq!(index.visible_span(200.0, 100.0), 4..4);
    }
}
