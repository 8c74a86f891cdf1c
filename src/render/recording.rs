//! Recording paint surface.
//!
//! Captures every paint call as a [`PaintOp`] instead of drawing. Used by the
//! headless host (tests, CLI, benchmarks). Text is measured with a fixed
//! advance per character so layout is deterministic.

use serde::Serialize;

use super::backend::{PaintContext, StrokeStyle, TextAlign, TextBaseline, TextStyle};
use crate::types::Rect;

/// Advance width of one character, as a fraction of the font size.
pub const CHAR_ADVANCE: f64 = 0.5;

/// One recorded paint call.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum PaintOp {
    Scale {
        sx: f64,
        sy: f64,
    },
    ClearRect {
        rect: Rect,
    },
    #[serde(rename_all = "camelCase")]
    StrokeLine {
        from: (f64, f64),
        to: (f64, f64),
        width: f64,
        color: String,
        dash: Vec<f64>,
    },
    #[serde(rename_all = "camelCase")]
    FillText {
        text: String,
        x: f64,
        y: f64,
        font: String,
        size: f64,
        color: String,
        align: TextAlign,
        baseline: TextBaseline,
        clip: Rect,
        max_width: Option<f64>,
    },
}

/// A [`PaintContext`] that records calls.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    ops: Vec<PaintOp>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ops(&self) -> &[PaintOp] {
        &self.ops
    }

    /// Drop everything recorded so far.
    pub fn clear(&mut self) {
        self.ops.clear();
    }

    /// Take the recorded ops, leaving the log empty.
    pub fn take_ops(&mut self) -> Vec<PaintOp> {
        std::mem::take(&mut self.ops)
    }

    /// The recorded text of every fill, in order.
    pub fn text_strings(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                PaintOp::FillText { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl PaintContext for RecordingSurface {
    fn scale(&mut self, sx: f64, sy: f64) {
        self.ops.push(PaintOp::Scale { sx, sy });
    }

    fn clear_rect(&mut self, rect: Rect) {
        self.ops.push(PaintOp::ClearRect { rect });
    }

    fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), stroke: &StrokeStyle<'_>) {
        self.ops.push(PaintOp::StrokeLine {
            from,
            to,
            width: stroke.width,
            color: stroke.color.to_string(),
            dash: stroke.dash.to_vec(),
        });
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
        self.ops.push(PaintOp::FillText {
            text: text.to_string(),
            x,
            y,
            font: style.font.to_string(),
            size: style.size,
            color: style.color.to_string(),
            align: style.align,
            baseline: style.baseline,
            clip,
            max_width,
        });
    }

    fn measure_text(&mut self, text: &str, style: &TextStyle<'_>) -> f64 {
        #[allow(clippy::cast_precision_loss)]
        let chars = text.chars().count() as f64;
        chars * style.size * CHAR_ADVANCE
    }
}
