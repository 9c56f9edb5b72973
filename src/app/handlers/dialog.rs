//! Handler für Dialog-State und Anwendungssteuerung.

use crate::app::use_cases;
use crate::app::AppState;

/// Markiert die Anwendung zum Beenden im nächsten Frame.
pub fn request_exit(state: &mut AppState) {
    state.should_exit = true;
}

/// Öffnet den Hintergrundbild-Dateidialog.
pub fn request_background_dialog(state: &mut AppState) {
    use_cases::background_image::request_background_dialog(state);
}
