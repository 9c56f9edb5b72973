//! Triangle-Renderer: geschlossene Kontur und Winkel-Labels.

use super::types::{DrawCommand, RenderContext, RenderFrame};
use crate::core::angle_label;

/// Hängt die geschlossene Kontur in Deklarationsreihenfolge an den Frame.
pub(crate) fn push_outline(ctx: &RenderContext<'_>, frame: &mut RenderFrame) {
    let scene = ctx.scene;
    frame.push(DrawCommand::ClosedPath {
        points: scene.points.positions().to_vec(),
        width: scene.line_thickness,
        color: scene.line_color,
    });
}

/// Hängt ein Winkel-Label pro Scheitel an.
///
/// Degenerierte Winkel erscheinen als Platzhalter statt als Fehler.
pub(crate) fn push_labels(ctx: &RenderContext<'_>, frame: &mut RenderFrame) {
    let scene = ctx.scene;
    let angles = scene.points.angles();
    for point in scene.points.iter() {
        frame.push(DrawCommand::Text {
            anchor: point.position + scene.label_offset,
            text: angle_label(angles.at(point.id)),
            font_size: scene.label_font_size,
            color: scene.line_color,
        });
    }
}
