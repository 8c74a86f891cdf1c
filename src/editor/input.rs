//! DOM input overlay for cell editing.
//!
//! Creates an `<input>` element positioned over the editing cell. Enter and
//! Escape are handled by the widget's keydown listener.

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, HtmlInputElement};

use crate::error::{GridError, Result};
use crate::overlay::InputOverlay;
use crate::types::Rect;

/// Text field overlay backed by an `<input>`.
pub struct DomInput {
    input: Option<HtmlInputElement>,
    visible: bool,
}

impl DomInput {
    /// Create the input hidden and append it to `container`.
    ///
    /// # Errors
    /// Returns `Overlay` if the element cannot be created or attached.
    pub fn new(document: &Document, container: &HtmlElement) -> Result<Self> {
        let input = document
            .create_element("input")?
            .dyn_into::<HtmlInputElement>()
            .map_err(|_| GridError::Overlay("created element is not an input".into()))?;
        input.set_type("text");

        let style = input.style();
        style.set_property("position", "absolute")?;
        style.set_property("z-index", "1000")?;
        style.set_property("box-sizing", "border-box")?;
        style.set_property("border", "none")?;
        style.set_property("outline", "none")?;
        style.set_property("padding", "0")?;
        style.set_property("margin", "0")?;
        style.set_property("background", "#fff")?;
        style.set_property("display", "none")?;

        container
            .append_child(&input)
            .map_err(|e| GridError::Overlay(format!("append input: {e:?}")))?;

        Ok(Self {
            input: Some(input),
            visible: false,
        })
    }
}

impl InputOverlay for DomInput {
    fn set_rect(&mut self, rect: Rect) {
        if let Some(input) = &self.input {
            let style = input.style();
            let _ = style.set_property("left", &format!("{}px", rect.x));
            let _ = style.set_property("top", &format!("{}px", rect.y));
            let _ = style.set_property("width", &format!("{}px", rect.width.max(0.0)));
            let _ = style.set_property("height", &format!("{}px", rect.height.max(0.0)));
        }
    }

    fn set_visible(&mut self, visible: bool) {
        if let Some(input) = &self.input {
            let _ = input
                .style()
                .set_property("display", if visible { "block" } else { "none" });
            if !visible {
                let _ = input.blur();
            }
            self.visible = visible;
        }
    }

    fn is_visible(&self) -> bool {
        self.visible
    }

    fn set_font(&mut self, family: &str, size: f64) {
        if let Some(input) = &self.input {
            let style = input.style();
            let _ = style.set_property("font-family", family);
            let _ = style.set_property("font-size", &format!("{size}px"));
        }
    }

    fn set_value(&mut self, value: &str) {
        if let Some(input) = &self.input {
            input.set_value(value);
        }
    }

    fn value(&self) -> String {
        self.input.as_ref().map(HtmlInputElement::value).unwrap_or_default()
    }

    fn focus(&mut self) {
        if let Some(input) = &self.input {
            let _ = input.focus();
            input.select();
        }
    }

    fn remove(&mut self) {
        if let Some(input) = self.input.take() {
            input.remove();
        }
        self.visible = false;
    }
}

impl Drop for DomInput {
    fn drop(&mut self) {
        self.remove();
    }
}
