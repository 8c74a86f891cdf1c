//! Scrollbar thumb geometry and thumb-drag mapping.
//!
//! For an axis with viewport extent `v` and content extent `c`, the thumb is
//! `floor(v * v / c)` pixels long and travels `v - thumb` pixels. A thumb
//! position `p` maps to the scroll offset `p / (v / c)`.

use serde::Serialize;

use super::{Axis, GridLayout, Viewport};
use crate::types::Rect;

/// Default thickness of a scrollbar track in pixels.
pub const DEFAULT_SCROLLBAR_THICKNESS: f64 = 8.0;

/// Thumb metrics for one axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ThumbMetrics {
    /// Viewport extent divided by content extent.
    pub block_per: f64,
    pub thumb_size: f64,
    /// Distance the thumb can move along the track.
    pub travel: f64,
}

impl ThumbMetrics {
    /// Metrics for a scrollable axis; `None` when the content fits.
    pub fn new(viewport_extent: f64, content_extent: f64) -> Option<Self> {
        if content_extent <= viewport_extent || viewport_extent <= 0.0 {
            return None;
        }
        let block_per = viewport_extent / content_extent;
        let thumb_size = (viewport_extent * block_per).floor();
        Some(Self {
            block_per,
            thumb_size,
            travel: viewport_extent - thumb_size,
        })
    }

    /// Thumb position along the track for a scroll offset.
    pub fn thumb_position(&self, scroll: f64) -> f64 {
        (scroll * self.block_per).clamp(0.0, self.travel)
    }

    /// Unclamped scroll offset for a thumb position; the viewport clamps it.
    pub fn scroll_for_thumb(&self, thumb_position: f64) -> f64 {
        thumb_position / self.block_per
    }
}

/// Track and thumb rectangles of one scrollbar, in viewport-local pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScrollbarGeometry {
    pub axis: Axis,
    pub track: Rect,
    pub thumb: Rect,
    pub metrics: ThumbMetrics,
}

/// Geometry of the scrollbar on `axis`, or `None` when the axis does not scroll.
///
/// The horizontal bar lies along the bottom edge of the viewport, the vertical
/// bar along the right edge.
pub fn scrollbar(
    axis: Axis,
    viewport: &Viewport,
    layout: &GridLayout,
    thickness: f64,
) -> Option<ScrollbarGeometry> {
    let content = match axis {
        Axis::Horizontal => layout.total_width(),
        Axis::Vertical => layout.total_height(),
    };
    let metrics = ThumbMetrics::new(viewport.extent(axis), content)?;
    let position = metrics.thumb_position(viewport.scroll(axis));

    let (track, thumb) = match axis {
        Axis::Horizontal => {
            let y = viewport.height - thickness;
            (
                Rect::new(0.0, y, viewport.width, thickness),
                Rect::new(position, y, metrics.thumb_size, thickness),
            )
        }
        Axis::Vertical => {
            let x = viewport.width - thickness;
            (
                Rect::new(x, 0.0, thickness, viewport.height),
                Rect::new(x, position, thickness, metrics.thumb_size),
            )
        }
    };

    Some(ScrollbarGeometry {
        axis,
        track,
        thumb,
        metrics,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn thumb_metrics_for_three_pages() {
        let metrics = ThumbMetrics::new(100.0, 300.0).unwrap();
        assert_eq!(metrics.thumb_size, 33.0);
        assert_eq!(metrics.travel, 67.0);
        assert!((metrics.scroll_for_thumb(67.0) - 201.0).abs() < 1e-9);
    }

    #[test]
    fn no_thumb_when_content_fits() {
        assert!(ThumbMetrics::new(100.0, 100.0).is_none());
        assert!(ThumbMetrics::new(100.0, 40.0).is_none());
    }

    #[test]
    fn vertical_bar_hugs_right_edge() {
        let layout = GridLayout::from_sizes(&[100.0; 3], &[50.0]);
        let mut viewport = Viewport::new(100.0, 100.0);
        viewport.set_scroll(Axis::Vertical, 150.0, &layout);

        let bar = scrollbar(Axis::Vertical, &viewport, &layout, 8.0).unwrap();
        assert_eq!(bar.track, Rect::new(92.0, 0.0, 8.0, 100.0));
        assert!((bar.thumb.y - 50.0).abs() < 1e-9);
        assert_eq!(bar.thumb.height, 33.0);
        assert!(scrollbar(Axis::Horizontal, &viewport, &layout, 8.0).is_none());
    }
}
