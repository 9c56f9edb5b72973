//! Point-Renderer: gefüllte Marker über allem anderen.

use super::types::{DrawCommand, RenderContext, RenderFrame};

/// Hängt einen gefüllten Kreis pro Punkt in seiner eigenen Farbe an.
pub(crate) fn push_markers(ctx: &RenderContext<'_>, frame: &mut RenderFrame) {
    for point in ctx.scene.points.iter() {
        frame.push(DrawCommand::Disc {
            center: point.position,
            radius: ctx.scene.point_radius,
            color: point.color,
        });
    }
}
