//! The grid widget.
//!
//! [`Grid`] owns the table, layout, scroll state, selection, edit session and
//! scrollbar overlays of one widget instance, and routes pointer events
//! between them. It is generic over a [`GridHost`], so the same code drives
//! the browser binding ([`web`], wasm32 only) and the headless host used by
//! tests and the CLI.

mod events;
mod scroll;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use scroll::{DragSession, ScrollbarOverlay};

use crate::config::GridOptions;
use crate::editor::{mutation, Commit, EditSession};
use crate::error::Result;
use crate::host::GridHost;
use crate::layout::{hit_test, Axis, GridLayout, Viewport};
use crate::overlay::PanelStyle;
use crate::render::{PaintContext, RenderStats, Scene, SelectionOverlay};
use crate::types::{CellBound, CellConfig, TableData};

use scroll::{THUMB_COLOR, TRACK_COLOR};

/// One grid widget instance.
pub struct Grid<H: GridHost> {
    table: TableData,
    layout: GridLayout,
    viewport: Viewport,
    options: GridOptions,
    surface: H::Surface,
    selection: SelectionOverlay<H::Panel>,
    editor: EditSession<H::Input>,
    horizontal_bar: ScrollbarOverlay<H::Panel>,
    vertical_bar: ScrollbarOverlay<H::Panel>,
    drag: Option<DragSession>,
    /// The last press landed on a scrollbar; its click is not a cell click.
    press_on_scrollbar: bool,
    destroyed: bool,
}

impl<H: GridHost> Grid<H> {
    /// Build the widget and paint it once.
    ///
    /// # Errors
    /// Fails without creating anything visible when the host cannot provide a
    /// paint surface or an overlay element.
    pub fn new(host: &mut H, table: TableData, options: GridOptions) -> Result<Self> {
        let (width, height) = host.viewport_size();

        let mut surface = host.create_surface(width, height)?;
        let dpr = host.device_pixel_ratio();
        if (dpr - 1.0).abs() > f64::EPSILON {
            surface.scale(dpr, dpr);
        }

        let outline = PanelStyle::outline(options.selection_border_width, &options.selection_color);
        let selection = SelectionOverlay::new(
            host.create_panel(&outline)?,
            options.selection_border_width,
            options.selection_tracking,
        );
        let editor = EditSession::new(host.create_input()?);

        let track = PanelStyle::filled(TRACK_COLOR, 20);
        let thumb = PanelStyle::filled(THUMB_COLOR, 21);
        let horizontal_bar = ScrollbarOverlay::new(
            Axis::Horizontal,
            host.create_panel(&track)?,
            host.create_panel(&thumb)?,
        );
        let vertical_bar = ScrollbarOverlay::new(
            Axis::Vertical,
            host.create_panel(&track)?,
            host.create_panel(&thumb)?,
        );

        let layout = GridLayout::new(&table);
        let mut grid = Self {
            table,
            layout,
            viewport: Viewport::new(width, height),
            options,
            surface,
            selection,
            editor,
            horizontal_bar,
            vertical_bar,
            drag: None,
            press_on_scrollbar: false,
            destroyed: false,
        };

        let stats = grid.render();
        grid.sync_scrollbars();
        tracing::debug!(
            rows = grid.table.row_count(),
            cols = grid.table.col_count(),
            width,
            height,
            painted = stats.painted,
            "grid created"
        );
        Ok(grid)
    }

    /// Full repaint of the visible cells.
    pub fn render(&mut self) -> RenderStats {
        if self.destroyed {
            return RenderStats {
                rows: 0..0,
                cols: 0..0,
                painted: 0,
            };
        }
        let scene = Scene {
            table: &self.table,
            layout: &self.layout,
            viewport: &self.viewport,
            defaults: &self.options.defaults,
        };
        scene.render(&mut self.surface)
    }

    /// Repaint one cell if it is visible.
    pub fn render_cell(&mut self, row: usize, col: usize) -> bool {
        if self.destroyed {
            return false;
        }
        let scene = Scene {
            table: &self.table,
            layout: &self.layout,
            viewport: &self.viewport,
            defaults: &self.options.defaults,
        };
        scene.render_cell(&mut self.surface, row, col)
    }

    pub fn table(&self) -> &TableData {
        &self.table
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&CellConfig> {
        self.table.cell(row, col)
    }

    /// Replace a cell, repaint it and keep the selection outline aligned.
    ///
    /// # Errors
    /// Returns `CellOutOfRange` for an address outside the table.
    pub fn set_cell(&mut self, row: usize, col: usize, cell: CellConfig) -> Result<()> {
        self.table.set_cell(row, col, cell)?;
        self.render_cell(row, col);

        if self.selection.selected() == Some((row, col)) {
            if let Some(cell) = self.table.cell(row, col) {
                let style = self.options.defaults.resolve(cell);
                self.selection.restyle(&style, &self.layout, &self.viewport);
            }
        }
        Ok(())
    }

    /// Select the cell at `bound` and show the outline around it.
    pub(crate) fn select(&mut self, bound: CellBound) {
        let Some(cell) = self.table.cell(bound.row_index, bound.col_index) else {
            return;
        };
        let style = self.options.defaults.resolve(cell);
        self.selection.move_to(
            bound,
            &style,
            self.viewport.scroll_left,
            self.viewport.scroll_top,
        );
    }

    /// Select the cell at `(row, col)`. Returns `false` outside the table.
    pub fn select_cell(&mut self, row: usize, col: usize) -> bool {
        if self.destroyed {
            return false;
        }
        match hit_test::cell_bound(&self.layout, &self.viewport, row, col) {
            Some(bound) => {
                self.select(bound);
                true
            }
            None => false,
        }
    }

    /// Close the editor and write its text into the edited cell.
    pub fn commit_edit(&mut self) -> Option<Commit> {
        let commit = self.editor.close()?;
        if let Err(e) = mutation::apply_edit(&mut self.table, commit.row, commit.col, &commit.text) {
            tracing::warn!(error = %e, "dropping edit");
            return None;
        }
        self.render_cell(commit.row, commit.col);
        Some(commit)
    }

    /// Close the editor without touching the cell.
    pub fn cancel_edit(&mut self) -> bool {
        self.editor.cancel()
    }

    /// Open the editor on `(row, col)` pre-filled with the cell's edit text.
    pub fn begin_edit(&mut self, row: usize, col: usize) -> bool {
        if self.destroyed {
            return false;
        }
        let Some(bound) = hit_test::cell_bound(&self.layout, &self.viewport, row, col) else {
            return false;
        };
        self.open_editor(bound)
    }

    pub(crate) fn open_editor(&mut self, bound: CellBound) -> bool {
        let Some(cell) = self.table.cell(bound.row_index, bound.col_index) else {
            return false;
        };
        let font = self.options.defaults.resolve(cell).font;
        self.editor.open(bound, &cell.edit_text, font.name, font.size)
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn layout(&self) -> &GridLayout {
        &self.layout
    }

    pub fn options(&self) -> &GridOptions {
        &self.options
    }

    pub fn scroll_left(&self) -> f64 {
        self.viewport.scroll_left
    }

    pub fn scroll_top(&self) -> f64 {
        self.viewport.scroll_top
    }

    pub fn selection(&self) -> &SelectionOverlay<H::Panel> {
        &self.selection
    }

    pub fn editor(&self) -> &EditSession<H::Input> {
        &self.editor
    }

    /// The editor's text field, e.g. to type into it.
    pub fn editor_input_mut(&mut self) -> &mut H::Input {
        self.editor.input_mut()
    }

    pub fn surface(&self) -> &H::Surface {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut H::Surface {
        &mut self.surface
    }

    /// Hit test a viewport-local offset against the current scroll.
    pub fn bound_at(&self, x: f64, y: f64) -> Option<CellBound> {
        hit_test::bound_at(&self.layout, &self.viewport, x, y)
    }

    /// Release every overlay. Safe to call more than once; later events are
    /// ignored.
    pub fn destroy(&mut self) {
        if self.destroyed {
            return;
        }
        self.editor.destroy();
        self.selection.destroy();
        self.horizontal_bar.remove();
        self.vertical_bar.remove();
        self.drag = None;
        self.press_on_scrollbar = false;
        self.destroyed = true;
        tracing::debug!("grid destroyed");
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }
}
