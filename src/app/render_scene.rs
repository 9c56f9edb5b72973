//! Builder für Render-Szenen aus dem AppState.

use crate::app::AppState;
use crate::shared::RenderScene;

/// Baut eine RenderScene aus dem aktuellen AppState.
pub fn build(state: &AppState) -> RenderScene {
    RenderScene {
        points: state.scene.points.clone(),
        surface_size: state.view.surface_size,
        background: state.scene.background.clone(),
        line_thickness: state.scene.line_thickness,
        line_color: state.scene.line_color,
        point_radius: state.options.point_radius_px,
        label_offset: glam::Vec2::from(state.options.label_offset_px),
        label_font_size: state.options.label_font_size_px,
    }
}
