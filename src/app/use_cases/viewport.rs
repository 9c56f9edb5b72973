//! Use-Case-Funktionen für die Zeichenfläche.

use crate::app::AppState;

/// Aktualisiert die gespeicherte Surface-Größe und zeichnet neu.
pub fn resize(state: &mut AppState, size: [f32; 2]) {
    log::debug!("Surface-Größe: {}x{}", size[0], size[1]);
    state.view.surface_size = size;
    state.view.request_redraw();
}
