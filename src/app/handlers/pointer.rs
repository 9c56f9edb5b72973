//! Handler für Pointer-Ereignisse auf der Zeichenfläche.

use crate::app::use_cases;
use crate::app::AppState;

/// Startet einen Drag per Hit-Test.
pub fn begin_drag(state: &mut AppState, pos: glam::Vec2) {
    use_cases::drag::begin(state, pos);
}

/// Bewegt den aktiven Punkt.
pub fn drag_to(state: &mut AppState, pos: glam::Vec2) {
    use_cases::drag::move_to(state, pos);
}

/// Beendet den aktiven Drag.
pub fn end_drag(state: &mut AppState) {
    use_cases::drag::end(state);
}
