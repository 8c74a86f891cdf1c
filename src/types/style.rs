//! Default style record and per-cell style resolution.
//!
//! Every optional field of a cell's border/font override falls back to the
//! matching field of a [`DefaultStyle`]. The merge happens once per cell at
//! render time through [`DefaultStyle::resolve`], so drawing code only ever
//! sees fully populated values.

use serde::{Deserialize, Serialize};

use super::{BorderLineStyle, CellConfig, EdgeConfig, HorizontalAlign, VerticalAlign};

pub const DEFAULT_BORDER_SIZE: f64 = 1.0;
pub const DEFAULT_BORDER_COLOR: &str = "#17233d";
pub const DEFAULT_FONT_NAME: &str = "Microsoft YaHei";
pub const DEFAULT_FONT_SIZE: f64 = 12.0;
pub const DEFAULT_FONT_COLOR: &str = "#515a6e";

/// Default for one border edge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EdgeStyle {
    pub size: f64,
    pub style: BorderLineStyle,
    pub color: String,
}

impl Default for EdgeStyle {
    fn default() -> Self {
        Self {
            size: DEFAULT_BORDER_SIZE,
            style: BorderLineStyle::Solid,
            color: DEFAULT_BORDER_COLOR.to_string(),
        }
    }
}

/// Default font settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FontStyle {
    pub name: String,
    pub size: f64,
    pub color: String,
    #[serde(rename = "isBold")]
    pub bold: bool,
    #[serde(rename = "isItalic")]
    pub italic: bool,
    #[serde(rename = "isWrapLine")]
    pub wrap: bool,
    #[serde(rename = "isFitSize")]
    pub fit: bool,
    pub horizontal: HorizontalAlign,
    pub vertical: VerticalAlign,
}

impl Default for FontStyle {
    fn default() -> Self {
        Self {
            name: DEFAULT_FONT_NAME.to_string(),
            size: DEFAULT_FONT_SIZE,
            color: DEFAULT_FONT_COLOR.to_string(),
            bold: false,
            italic: false,
            wrap: false,
            fit: false,
            horizontal: HorizontalAlign::Left,
            vertical: VerticalAlign::Middle,
        }
    }
}

/// Fallback record for every optional cell style field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DefaultStyle {
    pub border_right: EdgeStyle,
    pub border_bottom: EdgeStyle,
    pub font: FontStyle,
}

/// A border edge with every field resolved.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedEdge<'a> {
    pub size: f64,
    pub style: BorderLineStyle,
    pub color: &'a str,
}

/// A font with every field resolved.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedFont<'a> {
    pub name: &'a str,
    pub size: f64,
    pub color: &'a str,
    pub bold: bool,
    pub italic: bool,
    pub wrap: bool,
    pub fit: bool,
    pub horizontal: HorizontalAlign,
    pub vertical: VerticalAlign,
}

impl ResolvedFont<'_> {
    /// CSS font shorthand at the given pixel size, e.g. `italic bold 12px Arial`.
    pub fn css_at(&self, size: f64) -> String {
        let italic = if self.italic { "italic " } else { "" };
        let bold = if self.bold { "bold " } else { "" };
        format!("{italic}{bold}{size}px {}", self.name)
    }

    /// CSS font shorthand at the resolved size.
    pub fn css(&self) -> String {
        self.css_at(self.size)
    }
}

/// Style of one cell after merging its overrides over the defaults.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedStyle<'a> {
    pub right: ResolvedEdge<'a>,
    pub bottom: ResolvedEdge<'a>,
    pub font: ResolvedFont<'a>,
}

impl DefaultStyle {
    /// Merge the cell's border/font overrides over this record.
    pub fn resolve<'a>(&'a self, cell: &'a CellConfig) -> ResolvedStyle<'a> {
        let border = cell.border.as_ref();
        let font = cell.font.as_ref();
        let defaults = &self.font;

        ResolvedStyle {
            right: resolve_edge(border.and_then(|b| b.right.as_ref()), &self.border_right),
            bottom: resolve_edge(border.and_then(|b| b.bottom.as_ref()), &self.border_bottom),
            font: ResolvedFont {
                name: font
                    .and_then(|f| f.name.as_deref())
                    .unwrap_or(&defaults.name),
                size: font.and_then(|f| f.size).unwrap_or(defaults.size),
                color: font
                    .and_then(|f| f.color.as_deref())
                    .unwrap_or(&defaults.color),
                bold: font.and_then(|f| f.bold).unwrap_or(defaults.bold),
                italic: font.and_then(|f| f.italic).unwrap_or(defaults.italic),
                wrap: font.and_then(|f| f.wrap).unwrap_or(defaults.wrap),
                fit: font.and_then(|f| f.fit).unwrap_or(defaults.fit),
                horizontal: font
                    .and_then(|f| f.horizontal)
                    .unwrap_or(defaults.horizontal),
                vertical: font.and_then(|f| f.vertical).unwrap_or(defaults.vertical),
            },
        }
    }
}

fn resolve_edge<'a>(edge: Option<&'a EdgeConfig>, default: &'a EdgeStyle) -> ResolvedEdge<'a> {
    ResolvedEdge {
        size: edge.and_then(|e| e.size).unwrap_or(default.size),
        style: edge.and_then(|e| e.style).unwrap_or(default.style),
        color: edge
            .and_then(|e| e.color.as_deref())
            .unwrap_or(&default.color),
    }
}
