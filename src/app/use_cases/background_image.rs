//! Use-Case-Funktionen für das Hintergrundbild.

use crate::app::background_loader::DecodeCompletion;
use crate::app::AppState;
use std::path::Path;

/// Öffnet den Hintergrundbild-Auswahl-Dialog.
pub fn request_background_dialog(state: &mut AppState) {
    state.ui.show_background_dialog = true;
}

/// Startet das asynchrone Laden eines Hintergrundbilds.
///
/// Nicht-Bilddateien werden ohne Zustandsänderung und ohne Redraw abgelehnt.
/// Bis zur Completion bleibt das bisherige Bild (oder keins) sichtbar.
pub fn request_background(state: &mut AppState, path: &str) {
    if let Err(e) = state.background_loader.request(Path::new(path)) {
        log::warn!("Hintergrundbild abgelehnt: {}", e);
        state.ui.set_status(format!("Keine Bilddatei: {path}"));
    }
}

/// Übernimmt eine abgeschlossene Dekodierung.
///
/// Veraltete Completions (nicht die zuletzt angefragte Datei) werden
/// verworfen. Fehlgeschlagene Dekodierungen lassen das Bild unverändert.
pub fn apply_decoded(state: &mut AppState, completion: DecodeCompletion) {
    state.background_loader.mark_finished();

    if !state.background_loader.is_current(completion.request_id) {
        log::warn!(
            "Veraltete Dekodierung #{} verworfen: {}",
            completion.request_id,
            completion.path
        );
        return;
    }

    match completion.result {
        Ok(image) => {
            let (width, height) = image.dimensions();
            log::info!(
                "Hintergrundbild geladen: {}x{} Pixel aus {}",
                width,
                height,
                completion.path
            );
            state.scene.set_background(image);
            state.view.background_dirty = true;
            state.ui.status_message = None;
            state.view.request_redraw();
        }
        Err(e) => {
            log::error!("Hintergrundbild konnte nicht dekodiert werden: {}", e);
            state
                .ui
                .set_status(format!("Bild konnte nicht geladen werden: {}", completion.path));
        }
    }
}
