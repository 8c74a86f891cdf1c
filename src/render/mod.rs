//! Rendering: the paint surface capability and everything that paints on it.
//!
//! This module provides:
//! - The backend-agnostic [`PaintContext`] trait
//! - The viewport renderer (cell borders and text)
//! - A Canvas 2D surface (wasm32) and a recording surface (everywhere)
//! - The selection outline overlay

pub mod backend;
pub mod border;
#[cfg(target_arch = "wasm32")]
pub mod canvas;
mod grid_renderer;
pub mod recording;
pub mod selection;
pub mod text;

pub use backend::{PaintContext, StrokeStyle, TextAlign, TextBaseline, TextStyle};
#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use grid_renderer::{RenderStats, Scene};
pub use recording::{PaintOp, RecordingSurface};
pub use selection::{SelectionOverlay, SelectionTracking};
