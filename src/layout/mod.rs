//! Layout engine for computing cell positions and viewport management.
//!
//! This module handles:
//! - Pre-computing cumulative row/column offsets from non-uniform sizes
//! - Managing viewport state (scroll position, visible range)
//! - Binary search for efficient cell lookup at screen coordinates
//! - Scrollbar thumb geometry

pub mod geometry;
mod grid_layout;
pub mod hit_test;
pub mod scrollbar;
mod viewport;

pub use geometry::{AxisHit, GeometryIndex};
pub use grid_layout::GridLayout;
pub use scrollbar::{ScrollbarGeometry, ThumbMetrics, DEFAULT_SCROLLBAR_THICKNESS};
pub use viewport::{Axis, Viewport, VisibleRange};
