//! Viewport state management for scrolling.

use std::ops::Range;

use serde::{Deserialize, Serialize};

use super::GridLayout;

/// Scroll axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    pub const BOTH: [Axis; 2] = [Axis::Horizontal, Axis::Vertical];
}

/// Cells the renderer walks for the current scroll position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VisibleRange {
    pub rows: Range<usize>,
    pub cols: Range<usize>,
}

impl VisibleRange {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() || self.cols.is_empty()
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.rows.contains(&row) && self.cols.contains(&col)
    }
}

/// Viewport state - the visible pixel rectangle and its scroll offsets
#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    /// Horizontal scroll position in content coordinates
    pub scroll_left: f64,
    /// Vertical scroll position in content coordinates
    pub scroll_top: f64,
    /// Viewport width in pixels
    pub width: f64,
    /// Viewport height in pixels
    pub height: f64,
}

impl Viewport {
    /// Create a viewport scrolled to the origin
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            scroll_left: 0.0,
            scroll_top: 0.0,
            width,
            height,
        }
    }

    pub fn extent(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }

    pub fn scroll(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.scroll_left,
            Axis::Vertical => self.scroll_top,
        }
    }

    /// Largest valid scroll offset on `axis` (0 when the content fits).
    pub fn max_scroll(&self, axis: Axis, layout: &GridLayout) -> f64 {
        (content_extent(axis, layout) - self.extent(axis)).max(0.0)
    }

    /// Whether content overflows the viewport on `axis`.
    pub fn is_scrollable(&self, axis: Axis, layout: &GridLayout) -> bool {
        content_extent(axis, layout) > self.extent(axis)
    }

    /// Set an absolute scroll offset, clamped to `[0, content - viewport]`.
    /// Returns the clamped offset. A NaN target leaves the offset where it is.
    pub fn set_scroll(&mut self, axis: Axis, raw: f64, layout: &GridLayout) -> f64 {
        if raw.is_nan() {
            return self.scroll(axis);
        }
        let clamped = raw.min(self.max_scroll(axis, layout)).max(0.0);
        match axis {
            Axis::Horizontal => self.scroll_left = clamped,
            Axis::Vertical => self.scroll_top = clamped,
        }
        clamped
    }

    /// Scroll by a delta on one axis. Returns the clamped offset.
    pub fn scroll_by(&mut self, axis: Axis, delta: f64, layout: &GridLayout) -> f64 {
        let target = self.scroll(axis) + delta;
        self.set_scroll(axis, target, layout)
    }

    /// Clamp both scroll offsets to the valid range
    pub fn clamp_scroll(&mut self, layout: &GridLayout) {
        for axis in Axis::BOTH {
            let current = self.scroll(axis);
            self.set_scroll(axis, current, layout);
        }
    }

    /// Resize the viewport and re-clamp
    pub fn resize(&mut self, width: f64, height: f64, layout: &GridLayout) {
        self.width = width;
        self.height = height;
        self.clamp_scroll(layout);
    }

    /// Convert content coordinates to viewport-local coordinates
    pub fn to_screen(&self, x: f64, y: f64) -> (f64, f64) {
        (x - self.scroll_left, y - self.scroll_top)
    }

    /// Convert viewport-local coordinates to content coordinates
    pub fn to_content(&self, x: f64, y: f64) -> (f64, f64) {
        (x + self.scroll_left, y + self.scroll_top)
    }

    /// Rows and columns to paint for the current scroll position.
    pub fn visible_range(&self, layout: &GridLayout) -> VisibleRange {
        VisibleRange {
            rows: layout.rows.visible_span(self.scroll_top, self.height),
            cols: layout.cols.visible_span(self.scroll_left, self.width),
        }
    }
}

fn content_extent(axis: Axis, layout: &GridLayout) -> f64 {
    match axis {
        Axis::Horizontal => layout.total_width(),
        Axis::Vertical => layout.total_height(),
    }
}
