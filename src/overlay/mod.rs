//! Overlay host capability.
//!
//! Overlays are elements positioned over the paint surface but not drawn by
//! it: the selection outline, scrollbar tracks and thumbs, and the editor's
//! text field. Rectangles are in viewport-local CSS pixels.

mod headless;

#[cfg(target_arch = "wasm32")]
pub mod dom;

pub use headless::{HeadlessInput, HeadlessPanel};

use serde::Serialize;

use crate::types::Rect;

/// Appearance of a non-interactive panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelStyle {
    pub border_width: f64,
    pub border_color: String,
    pub background: Option<String>,
    pub z_index: i32,
}

impl PanelStyle {
    /// A hollow outline.
    pub fn outline(border_width: f64, border_color: impl Into<String>) -> Self {
        Self {
            border_width,
            border_color: border_color.into(),
            background: None,
            z_index: 10,
        }
    }

    /// A borderless filled block.
    pub fn filled(background: impl Into<String>, z_index: i32) -> Self {
        Self {
            border_width: 0.0,
            border_color: String::new(),
            background: Some(background.into()),
            z_index,
        }
    }
}

/// A positioned, pointer-transparent element.
pub trait PanelOverlay {
    /// Place the panel. `rect` is the content box; the border sits outside it.
    fn set_rect(&mut self, rect: Rect);

    fn set_visible(&mut self, visible: bool);

    fn is_visible(&self) -> bool;

    /// Whether the next moves animate.
    fn set_animated(&mut self, animated: bool);

    /// Detach from the host. Further calls are no-ops.
    fn remove(&mut self);
}

/// A positioned, focusable single-line text field.
pub trait InputOverlay {
    fn set_rect(&mut self, rect: Rect);

    fn set_visible(&mut self, visible: bool);

    fn is_visible(&self) -> bool;

    fn set_font(&mut self, family: &str, size: f64);

    fn set_value(&mut self, value: &str);

    /// Current text, including anything typed since `set_value`.
    fn value(&self) -> String;

    fn focus(&mut self);

    /// Detach from the host. Further calls are no-ops.
    fn remove(&mut self);
}
