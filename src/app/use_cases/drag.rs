//! Use-Case-Funktionen für das Ziehen der Dreieckspunkte.

use crate::app::AppState;

/// Startet einen Drag, falls `pos` einen Punkt trifft.
///
/// Kein Redraw: das Drag-Flag ändert die Darstellung nicht.
pub fn begin(state: &mut AppState, pos: glam::Vec2) {
    let pick_radius = state.options.pick_radius_px;
    if state
        .drag
        .press(&mut state.scene.points, pos, pick_radius)
        .is_none()
    {
        log::trace!("Kein Punkt bei ({}, {})", pos.x, pos.y);
    }
}

/// Bewegt den aktiven Punkt, synchronisiert seine Koordinatenfelder und zeichnet neu.
pub fn move_to(state: &mut AppState, pos: glam::Vec2) {
    let Some(id) = state.drag.drag_to(&mut state.scene.points, pos) else {
        return;
    };
    state.ui.sync_coordinate_fields(id, pos);
    state.view.request_redraw();
}

/// Beendet den aktiven Drag; der Punkt bleibt an seiner letzten Position.
pub fn end(state: &mut AppState) {
    state.drag.release(&mut state.scene.points);
}
