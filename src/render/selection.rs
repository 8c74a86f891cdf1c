//! Selection outline.
//!
//! The outline is an overlay panel, not painted on the surface, so scrolling
//! only moves it. Two tracking modes keep it aligned after a scroll:
//! `Recompute` re-derives the bound from geometry (exact for any row/column
//! sizes), `Translate` shifts the outline by the scroll delta since the
//! selection was made.

use serde::{Deserialize, Serialize};

use crate::layout::{hit_test, GridLayout, Viewport};
use crate::overlay::PanelOverlay;
use crate::types::{CellBound, Rect, ResolvedStyle};

pub const SELECTION_BORDER_WIDTH: f64 = 2.0;
pub const SELECTION_COLOR: &str = "#17A1CA";

/// How the outline follows scrolling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionTracking {
    #[default]
    Recompute,
    Translate,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Selected {
    bound: CellBound,
    /// Right and bottom border widths of the selected cell.
    edges: (f64, f64),
    /// Scroll offsets when `bound` was taken.
    snapshot: (f64, f64),
    rect: Rect,
}

/// Outline rectangle for a bound: pulled out by the outline width and
/// shrunk by the cell's own right/bottom border so it hugs the cell edge.
pub fn outline_rect(bound: &CellBound, border_width: f64, edges: (f64, f64)) -> Rect {
    Rect::new(
        bound.x - border_width,
        bound.y - border_width,
        bound.width - edges.0,
        bound.height - edges.1,
    )
}

pub struct SelectionOverlay<P: PanelOverlay> {
    panel: P,
    border_width: f64,
    tracking: SelectionTracking,
    selected: Option<Selected>,
}

impl<P: PanelOverlay> SelectionOverlay<P> {
    pub fn new(mut panel: P, border_width: f64, tracking: SelectionTracking) -> Self {
        panel.set_visible(false);
        Self {
            panel,
            border_width,
            tracking,
            selected: None,
        }
    }

    pub fn tracking(&self) -> SelectionTracking {
        self.tracking
    }

    /// Select the cell at `bound` and show the outline around it.
    pub fn move_to(&mut self, bound: CellBound, style: &ResolvedStyle<'_>, scroll_left: f64, scroll_top: f64) {
        let edges = (style.right.size, style.bottom.size);
        let rect = outline_rect(&bound, self.border_width, edges);

        self.panel.set_animated(true);
        self.panel.set_rect(rect);
        self.panel.set_visible(true);
        self.selected = Some(Selected {
            bound,
            edges,
            snapshot: (scroll_left, scroll_top),
            rect,
        });
    }

    /// Shift the outline by the scroll delta since the selection snapshot,
    /// without consulting geometry.
    pub fn scroll_relocation(&mut self, scroll_left: f64, scroll_top: f64) {
        let Some(selected) = self.selected.as_mut() else {
            return;
        };
        let base = outline_rect(&selected.bound, self.border_width, selected.edges);
        selected.rect = Rect::new(
            base.x - (scroll_left - selected.snapshot.0),
            base.y - (scroll_top - selected.snapshot.1),
            base.width,
            base.height,
        );
        self.panel.set_animated(false);
        self.panel.set_rect(selected.rect);
    }

    /// Re-place the outline from a freshly computed bound and take a new
    /// snapshot.
    pub fn reposition(&mut self, bound: CellBound, scroll_left: f64, scroll_top: f64) {
        let Some(selected) = self.selected.as_mut() else {
            return;
        };
        selected.bound = bound;
        selected.snapshot = (scroll_left, scroll_top);
        selected.rect = outline_rect(&bound, self.border_width, selected.edges);
        self.panel.set_animated(false);
        self.panel.set_rect(selected.rect);
    }

    /// Keep the outline aligned after the viewport scrolled.
    pub fn follow_scroll(&mut self, layout: &GridLayout, viewport: &Viewport) {
        let Some((row, col)) = self.selected() else {
            return;
        };
        match self.tracking {
            SelectionTracking::Recompute => {
                if let Some(bound) = hit_test::cell_bound(layout, viewport, row, col) {
                    self.reposition(bound, viewport.scroll_left, viewport.scroll_top);
                }
            }
            SelectionTracking::Translate => {
                self.scroll_relocation(viewport.scroll_left, viewport.scroll_top);
            }
        }
    }

    /// Pick up a changed border on the selected cell.
    pub fn restyle(&mut self, style: &ResolvedStyle<'_>, layout: &GridLayout, viewport: &Viewport) {
        let Some(selected) = self.selected.as_mut() else {
            return;
        };
        selected.edges = (style.right.size, style.bottom.size);
        let (row, col) = (selected.bound.row_index, selected.bound.col_index);
        if let Some(bound) = hit_test::cell_bound(layout, viewport, row, col) {
            self.reposition(bound, viewport.scroll_left, viewport.scroll_top);
        }
    }

    /// `(row, col)` of the selected cell.
    pub fn selected(&self) -> Option<(usize, usize)> {
        self.selected
            .map(|s| (s.bound.row_index, s.bound.col_index))
    }

    /// Bound cached for the selection.
    pub fn bound(&self) -> Option<CellBound> {
        self.selected.map(|s| s.bound)
    }

    /// Where the outline currently sits.
    pub fn outline(&self) -> Option<Rect> {
        self.selected.map(|s| s.rect)
    }

    /// Deselect and hide the outline.
    pub fn clear(&mut self) {
        self.selected = None;
        self.panel.set_visible(false);
    }

    pub fn panel(&self) -> &P {
        &self.panel
    }

    pub fn destroy(&mut self) {
        self.selected = None;
        self.panel.remove();
    }
}
