//! Cell text drawing: alignment, clipping, wrap and fit-to-cell.
//!
//! Single-line text is anchored by the cell's horizontal/vertical alignment
//! and clipped to the cell. With `wrap` set, text is broken greedily at
//! whitespace (words wider than the cell are broken by character) and the
//! block of lines is aligned vertically. With `fit` set (and no wrap), the
//! font shrinks until the text fits the cell width.

use super::backend::{PaintContext, TextAlign, TextBaseline, TextStyle};
use crate::types::{HorizontalAlign, Rect, ResolvedFont, VerticalAlign};

/// Line height of wrapped text, as a multiple of the font size.
pub const LINE_HEIGHT_FACTOR: f64 = 1.2;
/// Smallest font size fit-to-cell will shrink to.
pub const MIN_FIT_FONT_SIZE: f64 = 6.0;
/// Step used to walk the font size down once the proportional guess overflows.
const FIT_STEP: f64 = 0.5;

fn anchor_x(rect: Rect, horizontal: HorizontalAlign) -> (f64, TextAlign) {
    match horizontal {
        HorizontalAlign::Left => (rect.x, TextAlign::Left),
        HorizontalAlign::Middle => (rect.x + (rect.width / 2.0).ceil(), TextAlign::Center),
        HorizontalAlign::Right => (rect.right(), TextAlign::Right),
    }
}

fn anchor_y(rect: Rect, vertical: VerticalAlign) -> (f64, TextBaseline) {
    match vertical {
        VerticalAlign::Top => (rect.y, TextBaseline::Top),
        VerticalAlign::Middle => (rect.y + (rect.height / 2.0).ceil(), TextBaseline::Middle),
        VerticalAlign::Bottom => (rect.bottom(), TextBaseline::Bottom),
    }
}

/// Draw a cell's display text inside `rect`.
pub fn draw_text<P: PaintContext>(ctx: &mut P, rect: Rect, text: &str, font: &ResolvedFont<'_>) {
    if text.is_empty() {
        return;
    }
    if font.wrap {
        draw_wrapped(ctx, rect, text, font);
        return;
    }

    let size = if font.fit {
        fit_font_size(ctx, text, rect.width, font)
    } else {
        font.size
    };
    let css = font.css_at(size);
    let (x, align) = anchor_x(rect, font.horizontal);
    let (y, baseline) = anchor_y(rect, font.vertical);
    let style = TextStyle {
        font: &css,
        size,
        color: font.color,
        align,
        baseline,
    };
    ctx.fill_text(text, x, y, &style, rect, Some(rect.width));
}

fn draw_wrapped<P: PaintContext>(ctx: &mut P, rect: Rect, text: &str, font: &ResolvedFont<'_>) {
    let css = font.css();
    let (x, align) = anchor_x(rect, font.horizontal);
    let style = TextStyle {
        font: &css,
        size: font.size,
        color: font.color,
        align,
        baseline: TextBaseline::Top,
    };

    let lines = wrap_lines(ctx, text, rect.width, &style);
    let line_height = font.size * LINE_HEIGHT_FACTOR;
    #[allow(clippy::cast_precision_loss)]
    let block_height = lines.len() as f64 * line_height;
    let top = match font.vertical {
        VerticalAlign::Top => rect.y,
        VerticalAlign::Middle => rect.y + (rect.height - block_height) / 2.0,
        VerticalAlign::Bottom => rect.bottom() - block_height,
    };

    let mut y = top;
    for line in &lines {
        ctx.fill_text(line, x, y, &style, rect, Some(rect.width));
        y += line_height;
    }
}

/// Font size at which `text` fits `max_width`, never above the resolved size
/// and never below [`MIN_FIT_FONT_SIZE`] unless the resolved size already is.
pub fn fit_font_size<P: PaintContext>(
    ctx: &mut P,
    text: &str,
    max_width: f64,
    font: &ResolvedFont<'_>,
) -> f64 {
    let measure = |ctx: &mut P, size: f64| {
        let css = font.css_at(size);
        let style = TextStyle {
            font: &css,
            size,
            color: font.color,
            align: TextAlign::Left,
            baseline: TextBaseline::Middle,
        };
        ctx.measure_text(text, &style)
    };

    let natural = measure(ctx, font.size);
    if natural <= max_width || natural <= 0.0 {
        return font.size;
    }

    let floor = MIN_FIT_FONT_SIZE.min(font.size);
    let mut size = (font.size * max_width / natural).max(floor);
    while size > floor && measure(ctx, size) > max_width {
        size = (size - FIT_STEP).max(floor);
    }
    size
}

/// Break `text` into lines no wider than `max_width`.
///
/// Explicit newlines always break. Within a paragraph words are packed
/// greedily; a word wider than the line is split by character.
pub fn wrap_lines<P: PaintContext>(
    ctx: &mut P,
    text: &str,
    max_width: f64,
    style: &TextStyle<'_>,
) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();

    for paragraph in text.split('\n') {
        let mut current_line = String::new();

        for word in paragraph.split_whitespace() {
            if !current_line.is_empty() {
                let candidate = format!("{current_line} {word}");
                if ctx.measure_text(&candidate, style) <= max_width {
                    current_line = candidate;
                    continue;
                }
                lines.push(std::mem::take(&mut current_line));
            }

            if ctx.measure_text(word, style) > max_width {
                let mut parts = break_word(ctx, word, max_width, style);
                // The last fragment stays open so following words can join it.
                current_line = parts.pop().unwrap_or_default();
                lines.extend(parts);
            } else {
                current_line = word.to_string();
            }
        }

        lines.push(current_line);
    }

    lines
}

/// Split a single word into fragments that each fit `max_width`.
fn break_word<P: PaintContext>(
    ctx: &mut P,
    word: &str,
    max_width: f64,
    style: &TextStyle<'_>,
) -> Vec<String> {
    let chars: Vec<char> = word.chars().collect();
    let mut parts = Vec::new();
    let mut start = 0;

    while start < chars.len() {
        let mut end = chars.len();
        while end > start + 1 {
            let candidate: String = chars.get(start..end).unwrap_or(&[]).iter().collect();
            if ctx.measure_text(&candidate, style) <= max_width {
                break;
            }
            end -= 1;
        }
        // Always take at least one character.
        parts.push(chars.get(start..end).unwrap_or(&[]).iter().collect());
        start = end;
    }

    parts
}
