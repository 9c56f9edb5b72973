//! Use-Case-Funktionen für den Linienstil des Dreiecks.

use crate::app::AppState;
use crate::core::Rgba;

/// Setzt Linienstärke und -farbe.
///
/// Ungültige Stärken werden an der Grenze abgelehnt: Stil bleibt, kein Redraw,
/// die Ablehnung erscheint in der Statusleiste.
pub fn set_line_style(state: &mut AppState, thickness: f32, color: Rgba) {
    match state.scene.set_line_style(thickness, color) {
        Ok(()) => {
            log::debug!("Linienstil: {} px, {:?}", thickness, color);
            state.view.request_redraw();
        }
        Err(e) => {
            log::warn!("Linienstil abgelehnt: {}", e);
            state.ui.set_status(format!("Linienstärke abgelehnt: {thickness}"));
        }
    }
}
