//! Host environment capability.
//!
//! A [`GridHost`] supplies the paint surface and overlay elements a grid
//! needs. The browser binding implements it over the DOM; [`HeadlessHost`]
//! records everything in memory.

use crate::error::{GridError, Result};
use crate::overlay::{HeadlessInput, HeadlessPanel, InputOverlay, PanelOverlay, PanelStyle};
use crate::render::{PaintContext, RecordingSurface};

pub trait GridHost {
    type Surface: PaintContext;
    type Panel: PanelOverlay;
    type Input: InputOverlay;

    /// Size of the region the grid occupies, in CSS pixels.
    fn viewport_size(&self) -> (f64, f64);

    fn device_pixel_ratio(&self) -> f64 {
        1.0
    }

    /// Create the paint surface covering the viewport.
    ///
    /// # Errors
    /// Returns `SurfaceUnavailable` when no 2D context can be had.
    fn create_surface(&mut self, width: f64, height: f64) -> Result<Self::Surface>;

    /// # Errors
    /// Returns `Overlay` when the element cannot be created.
    fn create_panel(&mut self, style: &PanelStyle) -> Result<Self::Panel>;

    /// # Errors
    /// Returns `Overlay` when the element cannot be created.
    fn create_input(&mut self) -> Result<Self::Input>;
}

/// In-memory host for tests, the CLI and benchmarks.
#[derive(Debug, Clone)]
pub struct HeadlessHost {
    pub width: f64,
    pub height: f64,
    pub device_pixel_ratio: f64,
    /// When false, `create_surface` fails like a host without a 2D context.
    pub surface_available: bool,
}

impl HeadlessHost {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            device_pixel_ratio: 1.0,
            surface_available: true,
        }
    }

    #[must_use]
    pub fn with_device_pixel_ratio(mut self, dpr: f64) -> Self {
        self.device_pixel_ratio = dpr;
        self
    }

    #[must_use]
    pub fn without_surface(mut self) -> Self {
        self.surface_available = false;
        self
    }
}

impl GridHost for HeadlessHost {
    type Surface = RecordingSurface;
    type Panel = HeadlessPanel;
    type Input = HeadlessInput;

    fn viewport_size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    fn device_pixel_ratio(&self) -> f64 {
        self.device_pixel_ratio
    }

    fn create_surface(&mut self, _width: f64, _height: f64) -> Result<RecordingSurface> {
        if !self.surface_available {
            return Err(GridError::SurfaceUnavailable(
                "headless host has no surface".into(),
            ));
        }
        Ok(RecordingSurface::new())
    }

    fn create_panel(&mut self, style: &PanelStyle) -> Result<HeadlessPanel> {
        Ok(HeadlessPanel::new(style.clone()))
    }

    fn create_input(&mut self) -> Result<HeadlessInput> {
        Ok(HeadlessInput::new())
    }
}
