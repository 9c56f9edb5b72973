//! Handler für das Hintergrundbild.

use crate::app::background_loader::DecodeCompletion;
use crate::app::use_cases;
use crate::app::AppState;

/// Startet das asynchrone Laden eines Hintergrundbilds.
pub fn load(state: &mut AppState, path: String) {
    use_cases::background_image::request_background(state, &path);
}

/// Übernimmt (oder verwirft) eine abgeschlossene Dekodierung.
pub fn apply_decoded(state: &mut AppState, completion: DecodeCompletion) {
    use_cases::background_image::apply_decoded(state, completion);
}
