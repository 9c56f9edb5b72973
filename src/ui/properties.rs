//! Properties-Panel (rechte Seitenleiste) für Linienstil, Punkte und Winkel.

use crate::app::{AppIntent, AppState};
use crate::core::{angle_label, Axis, PointId, Rgba};
use crate::render::{from_color32, to_color32};

/// Rendert das Properties-Panel und gibt erzeugte Events zurück.
pub fn render_properties_panel(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::SidePanel::right("properties_panel")
        .default_width(220.0)
        .min_width(180.0)
        .resizable(true)
        .show(ctx, |ui| {
            ui.heading("Linienstil");
            ui.separator();
            render_line_style(ui, state, &mut events);

            ui.add_space(8.0);
            ui.heading("Punkte");
            ui.separator();
            for id in PointId::ALL {
                render_point(ui, state, id, &mut events);
            }

            ui.add_space(8.0);
            ui.heading("Winkel");
            ui.separator();
            render_angles(ui, state);
        });

    events
}

fn render_line_style(ui: &mut egui::Ui, state: &AppState, events: &mut Vec<AppIntent>) {
    ui.horizontal(|ui| {
        ui.label("Stärke (px):");
        // Kein Range-Clamp: ungültige Werte werden im Use-Case abgelehnt
        let mut thickness = state.scene.line_thickness;
        if ui
            .add(egui::DragValue::new(&mut thickness).speed(0.1))
            .changed()
        {
            events.push(AppIntent::LineThicknessChanged { thickness });
        }
    });

    let mut color = state.scene.line_color;
    if color_edit(ui, "Farbe:", &mut color) {
        events.push(AppIntent::LineColorChanged { color });
    }
}

fn render_point(ui: &mut egui::Ui, state: &AppState, id: PointId, events: &mut Vec<AppIntent>) {
    ui.group(|ui| {
        ui.label(egui::RichText::new(id.name()).strong());

        let [mut x, mut y] = state.ui.coordinate_field(id);
        ui.horizontal(|ui| {
            ui.label("x:");
            if ui.add(egui::DragValue::new(&mut x).speed(1.0)).changed() {
                events.push(AppIntent::PointCoordinateEdited {
                    point: id,
                    axis: Axis::X,
                    value: x,
                });
            }
            ui.label("y:");
            if ui.add(egui::DragValue::new(&mut y).speed(1.0)).changed() {
                events.push(AppIntent::PointCoordinateEdited {
                    point: id,
                    axis: Axis::Y,
                    value: y,
                });
            }
        });

        let mut color = state.scene.points.get(id).color;
        if color_edit(ui, "Farbe:", &mut color) {
            events.push(AppIntent::PointColorChanged { point: id, color });
        }
    });
}

fn render_angles(ui: &mut egui::Ui, state: &AppState) {
    let angles = state.scene.points.angles();
    for (id, angle) in angles.iter() {
        ui.label(format!("{}: {}", id, angle_label(angle)));
    }
    if angles.is_degenerate() {
        ui.label(egui::RichText::new("Punkte fallen zusammen").color(egui::Color32::YELLOW));
    } else if let Ok(sum) = angles.sum() {
        ui.label(egui::RichText::new(format!("Summe: {:.1}°", sum)).weak());
    }
}

/// Farbwähler für eine RGBA-Farbe; gibt `true` bei Änderung zurück.
fn color_edit(ui: &mut egui::Ui, label: &str, color: &mut Rgba) -> bool {
    let mut changed = false;
    ui.horizontal(|ui| {
        ui.label(label);
        let mut c = to_color32(*color);
        if ui.color_edit_button_srgba(&mut c).changed() {
            *color = from_color32(c);
            changed = true;
        }
    });
    changed
}
