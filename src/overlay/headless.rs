//! In-memory overlays for tests and the CLI.

use serde::Serialize;

use super::{InputOverlay, PanelOverlay, PanelStyle};
use crate::types::Rect;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeadlessPanel {
    pub style: PanelStyle,
    pub rect: Rect,
    pub visible: bool,
    pub animated: bool,
    pub removed: bool,
}

impl HeadlessPanel {
    pub fn new(style: PanelStyle) -> Self {
        Self {
            style,
            rect: Rect::default(),
            visible: false,
            animated: false,
            removed: false,
        }
    }
}

impl PanelOverlay for HeadlessPanel {
    fn set_rect(&mut self, rect: Rect) {
        if !self.removed {
            self.rect = rect;
        }
    }

    fn set_visible(&mut self, visible: bool) {
        if !self.removed {
            self.visible = visible;
        }
    }

    fn is_visible(&self) -> bool {
        self.visible
    }

    fn set_animated(&mut self, animated: bool) {
        self.animated = animated;
    }

    fn remove(&mut self) {
        self.removed = true;
        self.visible = false;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeadlessInput {
    pub rect: Rect,
    pub visible: bool,
    pub font_family: String,
    pub font_size: f64,
    pub value: String,
    pub focused: bool,
    pub removed: bool,
}

impl HeadlessInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the field's text as if the user typed it.
    pub fn type_text(&mut self, text: &str) {
        if !self.removed {
            self.value = text.to_string();
        }
    }
}

impl InputOverlay for HeadlessInput {
    fn set_rect(&mut self, rect: Rect) {
        if !self.removed {
            self.rect = rect;
        }
    }

    fn set_visible(&mut self, visible: bool) {
        if !self.removed {
            self.visible = visible;
            if !visible {
                self.focused = false;
            }
        }
    }

    fn is_visible(&self) -> bool {
        self.visible
    }

    fn set_font(&mut self, family: &str, size: f64) {
        self.font_family = family.to_string();
        self.font_size = size;
    }

    fn set_value(&mut self, value: &str) {
        if !self.removed {
            self.value = value.to_string();
        }
    }

    fn value(&self) -> String {
        self.value.clone()
    }

    fn focus(&mut self) {
        if self.visible {
            self.focused = true;
        }
    }

    fn remove(&mut self) {
        self.removed = true;
        self.visible = false;
        self.focused = false;
    }
}
