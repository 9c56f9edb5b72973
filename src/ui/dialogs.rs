//! Datei-Dialoge (rfd).

use crate::app::{AppIntent, UiState};

/// Dateiendungen, die im Hintergrundbild-Dialog angeboten werden.
pub const BACKGROUND_IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "dds"];

fn path_to_ui_string(path: &std::path::Path) -> String {
    path.to_string_lossy().into_owned()
}

/// Verarbeitet ausstehende Datei-Dialoge und gibt AppIntents zurück.
pub fn handle_file_dialogs(ui_state: &mut UiState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if ui_state.show_background_dialog {
        ui_state.show_background_dialog = false;

        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Bild", BACKGROUND_IMAGE_EXTENSIONS)
            .pick_file()
        {
            events.push(AppIntent::BackgroundFileSelected {
                path: path_to_ui_string(&path),
            });
        }
    }

    events
}
