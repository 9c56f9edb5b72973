//! Status-Bar am unteren Bildschirmrand.

use crate::app::{AppState, DragState};

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            let [width, height] = state.view.surface_size;
            ui.label(format!("Fläche: {:.0}x{:.0}", width, height));

            ui.separator();

            match state.drag.state() {
                DragState::Idle => ui.label("Bereit"),
                DragState::Dragging(id) => ui.label(format!("Ziehe {}", id)),
            };

            ui.separator();

            if let Some(background) = state.scene.background.as_deref() {
                let (w, h) = background.dimensions();
                let filename = std::path::Path::new(background.source())
                    .file_name()
                    .and_then(|n| n.to_str())
                    .unwrap_or("unbekannt");
                ui.label(format!("Hintergrund: {} ({}x{})", filename, w, h));
            } else {
                ui.label("Hintergrund: keiner");
            }

            if state.background_loader.in_flight() > 0 {
                ui.separator();
                ui.spinner();
            }

            if let Some(ref msg) = state.ui.status_message {
                ui.separator();
                ui.label(egui::RichText::new(format!("⚠ {}", msg)).color(egui::Color32::YELLOW));
            }
        });
    });
}
