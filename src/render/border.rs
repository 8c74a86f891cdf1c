//! Cell border drawing.
//!
//! Each cell strokes only its right and bottom edges. Lines are inset by half
//! their width so a thick edge stays inside the cell rectangle.

use super::backend::{PaintContext, StrokeStyle};
use crate::types::{BorderLineStyle, Rect, ResolvedEdge};

/// Dash pattern for dotted edges.
pub const DOTTED_DASH: [f64; 2] = [4.0, 4.0];

fn stroke_for<'a>(edge: &ResolvedEdge<'a>) -> StrokeStyle<'a> {
    StrokeStyle {
        width: edge.size,
        color: edge.color,
        dash: match edge.style {
            BorderLineStyle::Solid => &[],
            BorderLineStyle::Dotted => &DOTTED_DASH,
        },
    }
}

/// Stroke the right and bottom edges of `rect`. Zero-width edges are skipped.
pub fn draw_borders<P: PaintContext>(
    ctx: &mut P,
    rect: Rect,
    right: &ResolvedEdge<'_>,
    bottom: &ResolvedEdge<'_>,
) {
    if right.size > 0.0 {
        let x = rect.right() - right.size / 2.0;
        ctx.stroke_line((x, rect.y), (x, rect.bottom()), &stroke_for(right));
    }
    if bottom.size > 0.0 {
        let y = rect.bottom() - bottom.size / 2.0;
        ctx.stroke_line((rect.x, y), (rect.right(), y), &stroke_for(bottom));
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing, clippy::float_cmp, clippy::panic)]
mod tests {
    use super::*;
    use crate::render::recording::{PaintOp, RecordingSurface};

    #[test]
    fn right_then_bottom_inset_by_half_width() {
        let mut surface = RecordingSurface::new();
        let right = ResolvedEdge {
            size: 2.0,
            style: BorderLineStyle::Solid,
            color: "#000",
        };
        let bottom = ResolvedEdge {
            size: 1.0,
            style: BorderLineStyle::Dotted,
            color: "#f00",
        };
        draw_borders(&mut surface, Rect::new(10.0, 20.0, 50.0, 30.0), &right, &bottom);

        let ops = surface.ops();
        assert_eq!(ops.len(), 2);
        match &ops[0] {
            PaintOp::StrokeLine { from, to, width, dash, .. } => {
                assert_eq!(*from, (59.0, 20.0));
                assert_eq!(*to, (59.0, 50.0));
                assert_eq!(*width, 2.0);
                assert!(dash.is_empty());
            }
            other => panic!("expected stroke, got {other:?}"),
        }
        match &ops[1] {
            PaintOp::StrokeLine { from, to, color, dash, .. } => {
                assert_eq!(*from, (10.0, 49.5));
                assert_eq!(*to, (60.0, 49.5));
                assert_eq!(color, "#f00");
                assert_eq!(dash, &DOTTED_DASH.to_vec());
            }
            other => panic!("expected stroke, got {other:?}"),
        }
    }

    #[test]
    fn zero_width_edge_is_not_stroked() {
        let mut surface = RecordingSurface::new();
        let none = ResolvedEdge {
            size: 0.0,
            style: BorderLineStyle::Solid,
            color: "#000",
        };
        draw_borders(&mut surface, Rect::new(0.0, 0.0, 10.0, 10.0), &none, &none);
        assert!(surface.ops().is_empty());
    }
}
