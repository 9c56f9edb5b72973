//! Handler für Zeichenfläche, Linienstil und Punkt-Eigenschaften.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::{Axis, PointId, Rgba};

/// Aktualisiert die Surface-Größe im State.
pub fn set_surface_size(state: &mut AppState, size: [f32; 2]) {
    use_cases::viewport::resize(state, size);
}

/// Setzt Linienstärke und -farbe.
pub fn set_line_style(state: &mut AppState, thickness: f32, color: Rgba) {
    use_cases::line_style::set_line_style(state, thickness, color);
}

/// Setzt die Farbe eines Punkts.
pub fn set_point_color(state: &mut AppState, point: PointId, color: Rgba) {
    use_cases::points::set_color(state, point, color);
}

/// Setzt eine Koordinate eines Punkts.
pub fn set_point_coordinate(state: &mut AppState, point: PointId, axis: Axis, value: f32) {
    use_cases::points::set_coordinate(state, point, axis, value);
}

/// Speichert den aktuellen Linienstil als Standard und propagiert Fehler an den Aufrufer.
pub fn save_line_style_as_default(state: &mut AppState) -> anyhow::Result<()> {
    use_cases::options::save_line_style_as_default(state)
}
