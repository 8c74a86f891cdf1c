//! Canvas 2D paint surface.

use std::collections::HashMap;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::backend::{PaintContext, StrokeStyle, TextStyle};
use crate::error::{GridError, Result};
use crate::types::Rect;

/// Measured widths are kept until this many entries, then the cache resets.
const TEXT_MEASURE_CACHE_CAP: usize = 4096;

pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    measure_cache: HashMap<(String, String), f64>,
}

impl CanvasSurface {
    /// Wrap a canvas element's 2D context.
    ///
    /// # Errors
    /// Returns `SurfaceUnavailable` if the canvas has no 2D context.
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| GridError::SurfaceUnavailable(format!("{e:?}")))?
            .ok_or_else(|| GridError::SurfaceUnavailable("no 2d context available".into()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| GridError::SurfaceUnavailable("context is not 2d".into()))?;

        Ok(Self {
            canvas,
            ctx,
            measure_cache: HashMap::new(),
        })
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    fn apply_text_style(&self, style: &TextStyle<'_>) {
        self.ctx.set_font(style.font);
        self.ctx.set_fill_style_str(style.color);
        self.ctx.set_text_align(style.align.as_css());
        self.ctx.set_text_baseline(style.baseline.as_css());
    }
}

impl PaintContext for CanvasSurface {
    fn scale(&mut self, sx: f64, sy: f64) {
        let _ = self.ctx.scale(sx, sy);
    }

    fn clear_rect(&mut self, rect: Rect) {
        self.ctx.clear_rect(rect.x, rect.y, rect.width, rect.height);
    }

    fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), stroke: &StrokeStyle<'_>) {
        let dash = js_sys::Array::new();
        for segment in stroke.dash {
            dash.push(&JsValue::from_f64(*segment));
        }

        self.ctx.save();
        let _ = self.ctx.set_line_dash(&dash);
        self.ctx.set_line_width(stroke.width);
        self.ctx.set_stroke_style_str(stroke.color);
        self.ctx.begin_path();
        self.ctx.move_to(from.0, from.1);
        self.ctx.line_to(to.0, to.1);
        self.ctx.stroke();
        self.ctx.restore();
    }

    fn fill_text(
        &mut self,
        text: &str,
        x: f64,
        y: f64,
        style: &TextStyle<'_>,
        clip: Rect,
        max_width: Option<f64>,
    ) {
        self.ctx.save();
        self.ctx.begin_path();
        self.ctx.rect(clip.x, clip.y, clip.width, clip.height);
        self.ctx.clip();
        self.apply_text_style(style);
        let _ = match max_width {
            Some(width) => self.ctx.fill_text_with_max_width(text, x, y, width),
            None => self.ctx.fill_text(text, x, y),
        };
        self.ctx.restore();
    }

    fn measure_text(&mut self, text: &str, style: &TextStyle<'_>) -> f64 {
        let key = (style.font.to_string(), text.to_string());
        if let Some(width) = self.measure_cache.get(&key) {
            return *width;
        }
        if self.measure_cache.len() >= TEXT_MEASURE_CACHE_CAP {
            self.measure_cache.clear();
        }

        self.ctx.set_font(style.font);
        let width = self
            .ctx
            .measure_text(text)
            .map(|m| m.width())
            .unwrap_or(0.0);
        self.measure_cache.insert(key, width);
        width
    }
}
