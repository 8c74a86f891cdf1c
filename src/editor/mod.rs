//! In-place cell editing.
//!
//! [`EditSession`] is a two-state machine. `open` moves `Closed → Editing`,
//! binding the session to one cell and showing the text field over it.
//! `close` moves back to `Closed` and hands the field's text to the caller as
//! a [`Commit`]; `cancel` does the same but discards the text. Writing the
//! commit into the table is [`mutation::apply_edit`]'s job.
//!
//! The field is positioned once on open and is not moved by scrolling.

#[cfg(target_arch = "wasm32")]
mod input;
pub mod mutation;

#[cfg(target_arch = "wasm32")]
pub use input::DomInput;

use crate::overlay::InputOverlay;
use crate::types::{CellBound, Rect};

/// Editor state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EditState {
    Closed,
    /// Bound to the cell under edit, captured when the editor opened.
    Editing { bound: CellBound },
}

/// Text to write back into a cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    pub row: usize,
    pub col: usize,
    pub text: String,
}

/// The single edit session of a grid.
pub struct EditSession<I: InputOverlay> {
    input: I,
    state: EditState,
}

impl<I: InputOverlay> EditSession<I> {
    pub fn new(mut input: I) -> Self {
        input.set_visible(false);
        Self {
            input,
            state: EditState::Closed,
        }
    }

    pub fn state(&self) -> EditState {
        self.state
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.state, EditState::Editing { .. })
    }

    /// `(row, col)` of the cell under edit.
    pub fn editing_cell(&self) -> Option<(usize, usize)> {
        self.bound().map(|b| (b.row_index, b.col_index))
    }

    /// Bound cached when the editor opened.
    pub fn bound(&self) -> Option<CellBound> {
        match self.state {
            EditState::Closed => None,
            EditState::Editing { bound } => Some(bound),
        }
    }

    /// Show the text field over `bound`, pre-filled with `initial_text`.
    ///
    /// Only legal while closed; returns `false` and changes nothing when a
    /// session is already open.
    pub fn open(&mut self, bound: CellBound, initial_text: &str, font_name: &str, font_size: f64) -> bool {
        if let EditState::Editing { bound: current } = self.state {
            tracing::warn!(
                row = current.row_index,
                col = current.col_index,
                "editor already open, ignoring open"
            );
            return false;
        }

        self.input.set_rect(Rect::new(
            bound.x,
            bound.y,
            bound.width - 1.0,
            bound.height - 1.0,
        ));
        self.input.set_font(font_name, font_size);
        self.input.set_value(initial_text);
        self.input.set_visible(true);
        self.input.focus();
        self.state = EditState::Editing { bound };

        tracing::debug!(row = bound.row_index, col = bound.col_index, "editor opened");
        true
    }

    /// Hide the field and return its text bound to the edited cell.
    ///
    /// A no-op returning `None` while closed.
    pub fn close(&mut self) -> Option<Commit> {
        let bound = self.bound()?;
        let text = self.input.value();
        self.input.set_visible(false);
        self.state = EditState::Closed;

        tracing::debug!(row = bound.row_index, col = bound.col_index, "editor closed");
        Some(Commit {
            row: bound.row_index,
            col: bound.col_index,
            text,
        })
    }

    /// Hide the field and drop its text. Returns whether a session was open.
    pub fn cancel(&mut self) -> bool {
        if !self.is_editing() {
            return false;
        }
        self.input.set_visible(false);
        self.state = EditState::Closed;
        tracing::debug!("edit cancelled");
        true
    }

    pub fn input(&self) -> &I {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut I {
        &mut self.input
    }

    /// Drop any open session without committing and detach the field.
    pub fn destroy(&mut self) {
        self.state = EditState::Closed;
        self.input.remove();
    }
}
