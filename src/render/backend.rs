//! Paint surface capability.
//!
//! The widget never talks to a canvas directly. The host hands it a
//! [`PaintContext`] (Canvas 2D in the browser, a recording surface in tests
//! and the CLI) and only the grid renderer issues calls on it.

use serde::Serialize;

use crate::types::Rect;

/// Horizontal anchor of a text fill, relative to its x coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

impl TextAlign {
    pub fn as_css(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
        }
    }
}

/// Vertical anchor of a text fill, relative to its y coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextBaseline {
    Top,
    Middle,
    Bottom,
}

impl TextBaseline {
    pub fn as_css(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Middle => "middle",
            Self::Bottom => "bottom",
        }
    }
}

/// Stroke settings for a line segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle<'a> {
    pub width: f64,
    pub color: &'a str,
    /// Dash pattern; empty for a solid line.
    pub dash: &'a [f64],
}

/// Text fill settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle<'a> {
    /// CSS font shorthand.
    pub font: &'a str,
    /// Font size in pixels (also encoded in `font`).
    pub size: f64,
    pub color: &'a str,
    pub align: TextAlign,
    pub baseline: TextBaseline,
}

/// 2D paint operations the renderer needs from a host surface.
pub trait PaintContext {
    /// Device-pixel-ratio transform, applied once when the surface is created.
    fn scale(&mut self, sx: f64, sy: f64);

    /// Clear a rectangle to transparent.
    fn clear_rect(&mut self, rect: Rect);

    fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), stroke: &StrokeStyle<'_>);

    /// Fill `text` anchored at `(x, y)`, clipped to `clip` so it never bleeds
    /// outside it. `max_width` lets the surface condense overlong text.
    fn fill_text(
        &mut self,
        text: &str,
        x: f64,
        y: f64,
        style: &TextStyle<'_>,
        clip: Rect,
        max_width: Option<f64>,
    );

    /// Advance width of `text` in the given font.
    fn measure_text(&mut self, text: &str, style: &TextStyle<'_>) -> f64;
}
