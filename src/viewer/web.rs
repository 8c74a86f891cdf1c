//! Browser binding.
//!
//! `GridView` builds a root `<div>` inside the host container, puts the
//! canvas and overlays in it, and wires DOM events to the [`Grid`]. Press,
//! click, double-click, wheel and key events are listened for on the root.
//! Move and release are listened for on the document so a thumb drag keeps
//! tracking when the pointer leaves the widget.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, HtmlCanvasElement, HtmlDivElement, HtmlElement, HtmlInputElement, KeyboardEvent,
    MouseEvent, WheelEvent,
};

use super::Grid;
use crate::config::GridConfig;
use crate::editor::DomInput;
use crate::error::{GridError, Result};
use crate::host::GridHost;
use crate::overlay::dom::DomPanel;
use crate::overlay::PanelStyle;
use crate::render::CanvasSurface;

type MouseClosure = Closure<dyn FnMut(MouseEvent)>;

/// DOM-backed host: everything is created inside the widget's root `<div>`.
pub struct WebHost {
    document: Document,
    root: HtmlElement,
    width: f64,
    height: f64,
    dpr: f64,
}

impl GridHost for WebHost {
    type Surface = CanvasSurface;
    type Panel = DomPanel;
    type Input = DomInput;

    fn viewport_size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    fn device_pixel_ratio(&self) -> f64 {
        self.dpr
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn create_surface(&mut self, width: f64, height: f64) -> Result<CanvasSurface> {
        let canvas = self
            .document
            .create_element("canvas")
            .map_err(|e| GridError::SurfaceUnavailable(format!("{e:?}")))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| GridError::SurfaceUnavailable("created element is not a canvas".into()))?;

        canvas.set_width((width * self.dpr).round().max(1.0) as u32);
        canvas.set_height((height * self.dpr).round().max(1.0) as u32);
        let style = canvas.style();
        style.set_property("display", "block")?;
        style.set_property("width", &format!("{width}px"))?;
        style.set_property("height", &format!("{height}px"))?;

        let surface = CanvasSurface::new(canvas)?;
        self.root
            .append_child(surface.canvas())
            .map_err(|e| GridError::SurfaceUnavailable(format!("{e:?}")))?;
        Ok(surface)
    }

    fn create_panel(&mut self, style: &PanelStyle) -> Result<DomPanel> {
        DomPanel::new(&self.document, &self.root, style)
    }

    fn create_input(&mut self) -> Result<DomInput> {
        DomInput::new(&self.document, &self.root)
    }
}

fn from_editor(event: &MouseEvent) -> bool {
    event
        .target()
        .and_then(|target| target.dyn_into::<HtmlInputElement>().ok())
        .is_some()
}

fn local_offset(root: &HtmlElement, event: &MouseEvent) -> (f64, f64) {
    let rect = root.get_bounding_client_rect();
    (
        f64::from(event.client_x()) - rect.left(),
        f64::from(event.client_y()) - rect.top(),
    )
}

/// The grid widget exported to JavaScript.
#[wasm_bindgen]
pub struct GridView {
    grid: Rc<RefCell<Grid<WebHost>>>,
    document: Document,
    root: HtmlDivElement,
    root_listeners: Vec<(&'static str, MouseClosure)>,
    document_listeners: Vec<(&'static str, MouseClosure)>,
    wheel_closure: Option<Closure<dyn FnMut(WheelEvent)>>,
    key_closure: Option<Closure<dyn FnMut(KeyboardEvent)>>,
    destroyed: bool,
}

#[wasm_bindgen]
impl GridView {
    /// Create the widget inside `container` and paint it.
    ///
    /// `config` is `{ rowSizes, colSizes, cells, options? }`.
    #[wasm_bindgen(constructor)]
    pub fn new(container: HtmlElement, config: JsValue) -> std::result::Result<GridView, JsValue> {
        console_error_panic_hook::set_once();

        let config: GridConfig = serde_wasm_bindgen::from_value(config)?;
        let (table, options) = config.into_parts()?;

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;

        let root = document
            .create_element("div")?
            .dyn_into::<HtmlDivElement>()
            .map_err(|_| JsValue::from_str("created element is not a div"))?;
        let style = root.style();
        style.set_property("position", "relative")?;
        style.set_property("height", "100%")?;
        style.set_property("overflow", "hidden")?;
        container.append_child(&root)?;

        let mut host = WebHost {
            document: document.clone(),
            root: root.clone().into(),
            width: f64::from(root.client_width()),
            height: f64::from(root.client_height()),
            dpr: window.device_pixel_ratio(),
        };
        let grid = match Grid::new(&mut host, table, options) {
            Ok(grid) => Rc::new(RefCell::new(grid)),
            Err(e) => {
                root.remove();
                return Err(e.into());
            }
        };

        let mut view = GridView {
            grid,
            document,
            root,
            root_listeners: Vec::new(),
            document_listeners: Vec::new(),
            wheel_closure: None,
            key_closure: None,
            destroyed: false,
        };
        view.attach_listeners();
        Ok(view)
    }

    /// Repaint the visible cells.
    pub fn render(&self) {
        if let Ok(mut grid) = self.grid.try_borrow_mut() {
            grid.render();
        }
    }

    /// Cell configuration at `(row, col)`, or `undefined` outside the table.
    #[wasm_bindgen(js_name = "getCell")]
    pub fn get_cell(&self, row: usize, col: usize) -> std::result::Result<JsValue, JsValue> {
        let grid = self.grid.borrow();
        match grid.cell(row, col) {
            Some(cell) => Ok(serde_wasm_bindgen::to_value(cell)?),
            None => Ok(JsValue::UNDEFINED),
        }
    }

    /// Replace the cell at `(row, col)` and repaint it.
    #[wasm_bindgen(js_name = "setCell")]
    pub fn set_cell(&self, row: usize, col: usize, config: JsValue) -> std::result::Result<(), JsValue> {
        let cell = serde_wasm_bindgen::from_value(config)?;
        self.grid.borrow_mut().set_cell(row, col, cell)?;
        Ok(())
    }

    #[wasm_bindgen(getter, js_name = "scrollLeft")]
    pub fn scroll_left(&self) -> f64 {
        self.grid.borrow().scroll_left()
    }

    #[wasm_bindgen(getter, js_name = "scrollTop")]
    pub fn scroll_top(&self) -> f64 {
        self.grid.borrow().scroll_top()
    }

    #[wasm_bindgen(setter, js_name = "scrollLeft")]
    pub fn set_scroll_left(&self, value: f64) {
        self.grid
            .borrow_mut()
            .set_scroll(crate::layout::Axis::Horizontal, value);
    }

    #[wasm_bindgen(setter, js_name = "scrollTop")]
    pub fn set_scroll_top(&self, value: f64) {
        self.grid
            .borrow_mut()
            .set_scroll(crate::layout::Axis::Vertical, value);
    }

    /// Remove every listener and element. Safe to call more than once.
    pub fn destroy(&mut self) {
        if self.destroyed {
            return;
        }
        self.destroyed = true;

        for (event, closure) in self.root_listeners.drain(..) {
            let _ = self
                .root
                .remove_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        }
        for (event, closure) in self.document_listeners.drain(..) {
            let _ = self
                .document
                .remove_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        }
        if let Some(closure) = self.wheel_closure.take() {
            let _ = self
                .root
                .remove_event_listener_with_callback("wheel", closure.as_ref().unchecked_ref());
        }
        if let Some(closure) = self.key_closure.take() {
            let _ = self
                .root
                .remove_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        }

        if let Ok(mut grid) = self.grid.try_borrow_mut() {
            grid.destroy();
        }
        self.root.remove();
    }
}

impl GridView {
    fn attach_listeners(&mut self) {
        let root: HtmlElement = self.root.clone().into();

        // Mouse down (scrollbar thumbs)
        {
            let grid = Rc::clone(&self.grid);
            let root_ref = root.clone();
            let closure = Closure::wrap(Box::new(move |event: MouseEvent| {
                if from_editor(&event) {
                    return;
                }
                let (x, y) = local_offset(&root_ref, &event);
                if let Ok(mut grid) = grid.try_borrow_mut() {
                    if grid.on_mouse_down(x, y) {
                        event.prevent_default();
                    }
                }
            }) as Box<dyn FnMut(MouseEvent)>);
            root.add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref())
                .ok();
            self.root_listeners.push(("mousedown", closure));
        }

        // Click (commit pending edit, then select)
        {
            let grid = Rc::clone(&self.grid);
            let root_ref = root.clone();
            let closure = Closure::wrap(Box::new(move |event: MouseEvent| {
                if from_editor(&event) || event.button() != 0 {
                    return;
                }
                let (x, y) = local_offset(&root_ref, &event);
                if let Ok(mut grid) = grid.try_borrow_mut() {
                    grid.on_click(x, y);
                }
            }) as Box<dyn FnMut(MouseEvent)>);
            root.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
                .ok();
            self.root_listeners.push(("click", closure));
        }

        // Double click (open editor)
        {
            let grid = Rc::clone(&self.grid);
            let root_ref = root.clone();
            let closure = Closure::wrap(Box::new(move |event: MouseEvent| {
                if from_editor(&event) {
                    return;
                }
                let (x, y) = local_offset(&root_ref, &event);
                if let Ok(mut grid) = grid.try_borrow_mut() {
                    grid.on_double_click(x, y);
                }
            }) as Box<dyn FnMut(MouseEvent)>);
            root.add_event_listener_with_callback("dblclick", closure.as_ref().unchecked_ref())
                .ok();
            self.root_listeners.push(("dblclick", closure));
        }

        // Mouse move on the document (thumb drag)
        {
            let grid = Rc::clone(&self.grid);
            let root_ref = root.clone();
            let closure = Closure::wrap(Box::new(move |event: MouseEvent| {
                let (x, y) = local_offset(&root_ref, &event);
                if let Ok(mut grid) = grid.try_borrow_mut() {
                    if grid.on_mouse_move(x, y) {
                        event.prevent_default();
                    }
                }
            }) as Box<dyn FnMut(MouseEvent)>);
            self.document
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref())
                .ok();
            self.document_listeners.push(("mousemove", closure));
        }

        // Mouse up on the document (end drag)
        {
            let grid = Rc::clone(&self.grid);
            let closure = Closure::wrap(Box::new(move |_event: MouseEvent| {
                if let Ok(mut grid) = grid.try_borrow_mut() {
                    grid.on_mouse_up();
                }
            }) as Box<dyn FnMut(MouseEvent)>);
            self.document
                .add_event_listener_with_callback("mouseup", closure.as_ref().unchecked_ref())
                .ok();
            self.document_listeners.push(("mouseup", closure));
        }

        // Wheel
        {
            let grid = Rc::clone(&self.grid);
            let closure = Closure::wrap(Box::new(move |event: WheelEvent| {
                if let Ok(mut grid) = grid.try_borrow_mut() {
                    if grid.on_wheel(event.delta_x(), event.delta_y()) {
                        event.prevent_default();
                    }
                }
            }) as Box<dyn FnMut(WheelEvent)>);
            root.add_event_listener_with_callback("wheel", closure.as_ref().unchecked_ref())
                .ok();
            self.wheel_closure = Some(closure);
        }

        // Enter commits, Escape cancels
        {
            let grid = Rc::clone(&self.grid);
            let closure = Closure::wrap(Box::new(move |event: KeyboardEvent| {
                let Ok(mut grid) = grid.try_borrow_mut() else {
                    return;
                };
                if !grid.editor().is_editing() {
                    return;
                }
                match event.key().as_str() {
                    "Enter" => {
                        grid.commit_edit();
                        event.prevent_default();
                    }
                    "Escape" => {
                        grid.cancel_edit();
                        event.prevent_default();
                    }
                    _ => {}
                }
            }) as Box<dyn FnMut(KeyboardEvent)>);
            root.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())
                .ok();
            self.key_closure = Some(closure);
        }
    }
}

impl Drop for GridView {
    fn drop(&mut self) {
        self.destroy();
    }
}
