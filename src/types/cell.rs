use serde::{Deserialize, Serialize};

/// Line style of a cell border edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderLineStyle {
    #[default]
    #[serde(alias = "single")]
    Solid,
    Dotted,
}

/// Horizontal text alignment inside a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HorizontalAlign {
    #[default]
    Left,
    #[serde(alias = "center")]
    Middle,
    Right,
}

/// Vertical text alignment inside a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerticalAlign {
    Top,
    #[default]
    #[serde(alias = "center")]
    Middle,
    Bottom,
}

/// Override for one border edge. Missing fields fall back to the default style.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<BorderLineStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// Per-cell border override. Only the right and bottom edges are drawn;
/// the left/top lines of a cell are its neighbours' right/bottom edges.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BorderConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right: Option<EdgeConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bottom: Option<EdgeConfig>,
}

/// Per-cell font override.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FontConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, rename = "isBold", skip_serializing_if = "Option::is_none")]
    pub bold: Option<bool>,
    #[serde(default, rename = "isItalic", skip_serializing_if = "Option::is_none")]
    pub italic: Option<bool>,
    /// Wrap text onto multiple lines at the cell width.
    #[serde(default, rename = "isWrapLine", skip_serializing_if = "Option::is_none")]
    pub wrap: Option<bool>,
    /// Shrink the font until the text fits the cell width.
    #[serde(default, rename = "isFitSize", skip_serializing_if = "Option::is_none")]
    pub fit: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub horizontal: Option<HorizontalAlign>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vertical: Option<VerticalAlign>,
}

/// Presentation and content of a single cell.
///
/// `edit_text` is what the editor shows; `display_text` is what gets painted.
/// They may differ (raw value vs. formatted value).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CellConfig {
    pub display_text: String,
    pub edit_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border: Option<BorderConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<FontConfig>,
}

impl CellConfig {
    /// A plain cell whose display and edit text are the same.
    pub fn text(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            display_text: text.clone(),
            edit_text: text,
            border: None,
            font: None,
        }
    }

    /// Builder: set a differing edit text.
    #[must_use]
    pub fn with_edit_text(mut self, edit_text: impl Into<String>) -> Self {
        self.edit_text = edit_text.into();
        self
    }

    /// Builder: attach a border override.
    #[must_use]
    pub fn with_border(mut self, border: BorderConfig) -> Self {
        self.border = Some(border);
        self
    }

    /// Builder: attach a font override.
    #[must_use]
    pub fn with_font(mut self, font: FontConfig) -> Self {
        self.font = Some(font);
        self
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawCellConfig {
    #[serde(default)]
    display_text: String,
    #[serde(default)]
    edit_text: Option<String>,
    #[serde(default)]
    border: Option<BorderConfig>,
    #[serde(default)]
    font: Option<FontConfig>,
}

// `editText` defaults to `displayText` when a config omits it.
impl<'de> Deserialize<'de> for CellConfig {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = RawCellConfig::deserialize(deserializer)?;
        let edit_text = raw.edit_text.unwrap_or_else(|| raw.display_text.clone());
        Ok(Self {
            display_text: raw.display_text,
            edit_text,
            border: raw.border,
            font: raw.font,
        })
    }
}
