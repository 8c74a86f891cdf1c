//! Pointer event handlers for [`Grid`].
//!
//! Offsets are viewport-local pixels. Press/move/release drive scrollbar
//! thumb drags and are expected from a document-level source so a drag keeps
//! tracking after the pointer leaves the widget; click and double-click come
//! from the widget itself.

use super::Grid;
use crate::editor::Commit;
use crate::host::GridHost;

impl<H: GridHost> Grid<H> {
    /// Primary button pressed. Arms a thumb drag when on a thumb. Returns
    /// whether a scrollbar took the press.
    ///
    /// The click that follows a press taken by a scrollbar never selects,
    /// wherever the pointer was released.
    pub fn on_mouse_down(&mut self, x: f64, y: f64) -> bool {
        if self.destroyed {
            return false;
        }
        self.press_on_scrollbar = self.begin_drag(x, y) || self.on_scrollbar(x, y);
        self.press_on_scrollbar
    }

    /// Pointer moved anywhere in the document. Returns whether a drag is armed.
    pub fn on_mouse_move(&mut self, x: f64, y: f64) -> bool {
        if self.destroyed {
            return false;
        }
        self.continue_drag(x, y)
    }

    /// Primary button released anywhere in the document. Disarms any drag.
    pub fn on_mouse_up(&mut self) -> bool {
        self.end_drag()
    }

    /// Primary click. A pending edit is committed before the click is hit
    /// tested, then the clicked cell is selected. Clicks on a scrollbar or
    /// past the table edges select nothing.
    pub fn on_click(&mut self, x: f64, y: f64) -> Option<Commit> {
        if self.destroyed {
            return None;
        }
        let commit = self.commit_edit();
        let scrollbar_press = std::mem::take(&mut self.press_on_scrollbar);

        if !scrollbar_press && !self.on_scrollbar(x, y) {
            if let Some(bound) = self.bound_at(x, y) {
                self.select(bound);
            }
        }
        commit
    }

    /// Double click. Commits any pending edit, selects the cell and opens the
    /// editor on it. Returns whether the editor opened.
    pub fn on_double_click(&mut self, x: f64, y: f64) -> bool {
        if self.destroyed {
            return false;
        }
        self.commit_edit();
        let scrollbar_press = std::mem::take(&mut self.press_on_scrollbar);

        if scrollbar_press || self.on_scrollbar(x, y) {
            return false;
        }
        let Some(bound) = self.bound_at(x, y) else {
            return false;
        };
        self.select(bound);
        self.open_editor(bound)
    }

    fn on_scrollbar(&self, x: f64, y: f64) -> bool {
        self.horizontal_bar.track_contains(x, y) || self.vertical_bar.track_contains(x, y)
    }
}
