//! Use-Case-Funktionen für die Optionen-Datei.

use crate::app::AppState;
use crate::shared::OverlayOptions;
use anyhow::Context;

/// Übernimmt den aktuellen Linienstil als Standard und persistiert die Optionen.
///
/// Punktpositionen werden dabei nicht geschrieben.
pub fn save_line_style_as_default(state: &mut AppState) -> anyhow::Result<()> {
    let path = OverlayOptions::config_path();
    save_line_style_to(state, &path)
}

/// Wie `save_line_style_as_default`, aber mit explizitem Zielpfad.
pub fn save_line_style_to(state: &mut AppState, path: &std::path::Path) -> anyhow::Result<()> {
    state.options.line_thickness = state.scene.line_thickness;
    state.options.line_color = state.scene.line_color;
    state
        .options
        .save_to_file(path)
        .with_context(|| format!("Optionen konnten nicht gespeichert werden: {}", path.display()))?;
    state.ui.set_status("Linienstil als Standard gespeichert");
    Ok(())
}
