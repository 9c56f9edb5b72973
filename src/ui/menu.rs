//! Top-Menü (Datei).

use crate::app::{AppIntent, AppState};

/// Rendert die Menü-Leiste
pub fn render_menu(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("Datei", |ui| {
                let background_label = if state.scene.background.is_some() {
                    "Hintergrundbild ändern..."
                } else {
                    "Hintergrundbild öffnen..."
                };
                if ui.button(background_label).clicked() {
                    events.push(AppIntent::BackgroundSelectionRequested);
                    ui.close();
                }

                ui.separator();

                if ui.button("Linienstil als Standard speichern").clicked() {
                    events.push(AppIntent::SaveLineStyleAsDefaultRequested);
                    ui.close();
                }

                ui.separator();

                if ui.button("Beenden").clicked() {
                    events.push(AppIntent::ExitRequested);
                    ui.close();
                }
            });
        });
    });

    events
}
