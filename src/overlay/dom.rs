//! DOM `<div>` panels for the browser host.

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlDivElement, HtmlElement};

use super::{PanelOverlay, PanelStyle};
use crate::error::{GridError, Result};
use crate::types::Rect;

/// An absolutely positioned, pointer-transparent `<div>`.
pub struct DomPanel {
    div: Option<HtmlDivElement>,
    visible: bool,
}

impl DomPanel {
    /// Create the panel hidden and append it to `parent`.
    ///
    /// # Errors
    /// Returns `Overlay` if the element cannot be created or attached.
    pub fn new(document: &Document, parent: &HtmlElement, style: &PanelStyle) -> Result<Self> {
        let div = document
            .create_element("div")?
            .dyn_into::<HtmlDivElement>()
            .map_err(|_| GridError::Overlay("created element is not a div".into()))?;

        let css = div.style();
        css.set_property("position", "absolute")?;
        css.set_property("box-sizing", "content-box")?;
        css.set_property("pointer-events", "none")?;
        css.set_property("display", "none")?;
        css.set_property("z-index", &style.z_index.to_string())?;
        if style.border_width > 0.0 {
            css.set_property(
                "border",
                &format!("{}px solid {}", style.border_width, style.border_color),
            )?;
        }
        if let Some(background) = &style.background {
            css.set_property("background", background)?;
        }

        parent
            .append_child(&div)
            .map_err(|e| GridError::Overlay(format!("append panel: {e:?}")))?;

        Ok(Self {
            div: Some(div),
            visible: false,
        })
    }
}

impl PanelOverlay for DomPanel {
    fn set_rect(&mut self, rect: Rect) {
        if let Some(div) = &self.div {
            let style = div.style();
            let _ = style.set_property("left", &format!("{}px", rect.x));
            let _ = style.set_property("top", &format!("{}px", rect.y));
            let _ = style.set_property("width", &format!("{}px", rect.width.max(0.0)));
            let _ = style.set_property("height", &format!("{}px", rect.height.max(0.0)));
        }
    }

    fn set_visible(&mut self, visible: bool) {
        if let Some(div) = &self.div {
            let display = if visible { "block" } else { "none" };
            let _ = div.style().set_property("display", display);
            self.visible = visible;
        }
    }

    fn is_visible(&self) -> bool {
        self.visible
    }

    fn set_animated(&mut self, animated: bool) {
        if let Some(div) = &self.div {
            let transition = if animated { "all .3s" } else { "none" };
            let _ = div.style().set_property("transition", transition);
        }
    }

    fn remove(&mut self) {
        if let Some(div) = self.div.take() {
            div.remove();
        }
        self.visible = false;
    }
}

impl Drop for DomPanel {
    fn drop(&mut self) {
        self.remove();
    }
}
