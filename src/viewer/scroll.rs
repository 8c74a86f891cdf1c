//! Scroll chain, scrollbar overlays and thumb dragging for [`Grid`].
//!
//! Every scroll change runs the same chain, in order: full repaint, selection
//! realignment, scrollbar resync. The editor is left where it was opened.

use serde::Serialize;

use super::Grid;
use crate::host::GridHost;
use crate::layout::{scrollbar, Axis, GridLayout, ScrollbarGeometry, Viewport};
use crate::overlay::PanelOverlay;

pub(crate) const TRACK_COLOR: &str = "rgba(0, 0, 0, 0.05)";
pub(crate) const THUMB_COLOR: &str = "rgba(0, 0, 0, 0.35)";

/// Pointer coordinate along `axis`.
pub(crate) fn along(axis: Axis, x: f64, y: f64) -> f64 {
    match axis {
        Axis::Horizontal => x,
        Axis::Vertical => y,
    }
}

/// An armed thumb drag: press arms it, move updates the scroll, release
/// disarms it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DragSession {
    pub axis: Axis,
    /// Pointer coordinate along the axis when the thumb was pressed.
    pub origin: f64,
    /// Thumb position when the thumb was pressed.
    pub start_thumb: f64,
}

impl DragSession {
    /// Thumb position for the current pointer, clamped to the track.
    pub fn thumb_position(&self, pointer: f64, travel: f64) -> f64 {
        (self.start_thumb + (pointer - self.origin)).clamp(0.0, travel)
    }
}

/// Track and thumb panels of one axis.
pub struct ScrollbarOverlay<P: PanelOverlay> {
    axis: Axis,
    track: P,
    thumb: P,
    geometry: Option<ScrollbarGeometry>,
}

impl<P: PanelOverlay> ScrollbarOverlay<P> {
    pub fn new(axis: Axis, mut track: P, mut thumb: P) -> Self {
        track.set_visible(false);
        thumb.set_visible(false);
        Self {
            axis,
            track,
            thumb,
            geometry: None,
        }
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// Place track and thumb for the current scroll, or hide both when the
    /// axis does not scroll.
    pub fn sync(&mut self, viewport: &Viewport, layout: &GridLayout, thickness: f64) {
        self.geometry = scrollbar::scrollbar(self.axis, viewport, layout, thickness);
        match &self.geometry {
            Some(geometry) => {
                self.track.set_rect(geometry.track);
                self.thumb.set_rect(geometry.thumb);
                self.track.set_visible(true);
                self.thumb.set_visible(true);
            }
            None => {
                self.track.set_visible(false);
                self.thumb.set_visible(false);
            }
        }
    }

    pub fn geometry(&self) -> Option<&ScrollbarGeometry> {
        self.geometry.as_ref()
    }

    pub fn is_visible(&self) -> bool {
        self.geometry.is_some()
    }

    pub fn thumb_contains(&self, x: f64, y: f64) -> bool {
        self.geometry.is_some_and(|g| g.thumb.contains(x, y))
    }

    pub fn track_contains(&self, x: f64, y: f64) -> bool {
        self.geometry.is_some_and(|g| g.track.contains(x, y))
    }

    pub fn track(&self) -> &P {
        &self.track
    }

    pub fn thumb(&self) -> &P {
        &self.thumb
    }

    pub fn remove(&mut self) {
        self.geometry = None;
        self.track.remove();
        self.thumb.remove();
    }
}

impl<H: GridHost> Grid<H> {
    /// Set an absolute scroll offset on one axis, clamped to the content.
    ///
    /// When the clamped offset differs from the current one the scroll chain
    /// runs. Returns the clamped offset.
    pub fn set_scroll(&mut self, axis: Axis, raw: f64) -> f64 {
        if self.destroyed {
            return self.viewport.scroll(axis);
        }
        let before = self.viewport.scroll(axis);
        let after = self.viewport.set_scroll(axis, raw, &self.layout);
        if (after - before).abs() > f64::EPSILON {
            self.after_scroll();
        }
        after
    }

    /// Scroll by a delta on one axis. Returns the clamped offset.
    pub fn scroll_by(&mut self, axis: Axis, delta: f64) -> f64 {
        let target = self.viewport.scroll(axis) + delta;
        self.set_scroll(axis, target)
    }

    /// Scroll both axes by a wheel delta, running the chain at most once.
    /// Returns whether anything moved.
    pub fn on_wheel(&mut self, delta_x: f64, delta_y: f64) -> bool {
        if self.destroyed {
            return false;
        }
        let before = (self.viewport.scroll_left, self.viewport.scroll_top);
        self.viewport.scroll_by(Axis::Horizontal, delta_x, &self.layout);
        self.viewport.scroll_by(Axis::Vertical, delta_y, &self.layout);
        let moved = (self.viewport.scroll_left - before.0).abs() > f64::EPSILON
            || (self.viewport.scroll_top - before.1).abs() > f64::EPSILON;
        if moved {
            self.after_scroll();
        }
        moved
    }

    pub(crate) fn after_scroll(&mut self) {
        tracing::trace!(
            scroll_left = self.viewport.scroll_left,
            scroll_top = self.viewport.scroll_top,
            "scrolled"
        );
        self.render();
        self.selection.follow_scroll(&self.layout, &self.viewport);
        self.sync_scrollbars();
    }

    pub(crate) fn sync_scrollbars(&mut self) {
        let thickness = self.options.scrollbar_thickness;
        for bar in [&mut self.horizontal_bar, &mut self.vertical_bar] {
            bar.sync(&self.viewport, &self.layout, thickness);
        }
    }

    /// Scrollbar overlay of `axis`.
    pub fn scrollbar(&self, axis: Axis) -> &ScrollbarOverlay<H::Panel> {
        match axis {
            Axis::Horizontal => &self.horizontal_bar,
            Axis::Vertical => &self.vertical_bar,
        }
    }

    /// The armed thumb drag, if any.
    pub fn drag(&self) -> Option<DragSession> {
        self.drag
    }

    /// Arm a thumb drag when `(x, y)` is on a thumb.
    pub(crate) fn begin_drag(&mut self, x: f64, y: f64) -> bool {
        let scroll = (self.viewport.scroll_left, self.viewport.scroll_top);
        let hit = [&self.horizontal_bar, &self.vertical_bar]
            .into_iter()
            .find(|bar| bar.thumb_contains(x, y))
            .and_then(|bar| {
                let metrics = bar.geometry()?.metrics;
                let current = match bar.axis() {
                    Axis::Horizontal => scroll.0,
                    Axis::Vertical => scroll.1,
                };
                Some((bar.axis(), metrics.thumb_position(current)))
            });
        let Some((axis, start_thumb)) = hit else {
            return false;
        };

        self.drag = Some(DragSession {
            axis,
            origin: along(axis, x, y),
            start_thumb,
        });
        tracing::trace!(?axis, start_thumb, "thumb drag armed");
        true
    }

    /// Move an armed drag to the pointer. Returns whether a drag is armed.
    pub(crate) fn continue_drag(&mut self, x: f64, y: f64) -> bool {
        let Some(drag) = self.drag else {
            return false;
        };
        let Some(metrics) = self.scrollbar(drag.axis).geometry().map(|g| g.metrics) else {
            self.drag = None;
            return false;
        };
        let position = drag.thumb_position(along(drag.axis, x, y), metrics.travel);
        self.set_scroll(drag.axis, metrics.scroll_for_thumb(position));
        true
    }

    pub(crate) fn end_drag(&mut self) -> bool {
        self.drag.take().is_some()
    }
}
