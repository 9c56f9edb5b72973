//! Use-Case-Funktionen für direkte Punkt-Bearbeitung über die Seitenleiste.

use crate::app::AppState;
use crate::core::{Axis, PointId, Rgba};

/// Setzt eine Koordinate aus einem Koordinatenfeld.
///
/// Nicht endliche Werte werden abgelehnt, Punkt und Feld bleiben unverändert.
pub fn set_coordinate(state: &mut AppState, id: PointId, axis: Axis, value: f32) {
    if !value.is_finite() {
        log::warn!("Ungültige Koordinate für {} ({:?}): {}", id, axis, value);
        state
            .ui
            .set_status(format!("Ungültige Koordinate für {id}: {value}"));
        return;
    }

    let position = axis.replace(state.scene.points.get(id).position, value);
    set_position(state, id, position);
}

/// Setzt die Position eines Punkts vollständig.
pub fn set_position(state: &mut AppState, id: PointId, position: glam::Vec2) {
    state.scene.set_point_position(id, position);
    state.ui.sync_coordinate_fields(id, position);
    state.view.request_redraw();
}

/// Setzt die Marker-Farbe eines Punkts.
pub fn set_color(state: &mut AppState, id: PointId, color: Rgba) {
    state.scene.points.set_color(id, color);
    state.view.request_redraw();
}
