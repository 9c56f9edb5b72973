//! Zentrale Zeichenfläche: sammelt Pointer-Events und malt den Render-Frame.

use super::input::InputState;
use crate::app::AppIntent;
use crate::render::{RenderFrame, Renderer};

/// Belegt den verfügbaren Platz als Zeichenfläche.
///
/// Gibt die Intents dieses Frames und das belegte Rechteck zurück.
pub fn allocate_canvas(ui: &mut egui::Ui, input: &mut InputState) -> (Vec<AppIntent>, egui::Rect) {
    let (rect, response) = ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());
    let events = input.collect_canvas_events(ui, &response, rect);
    (events, rect)
}

/// Malt einen fertigen Frame in das Canvas-Rechteck.
pub fn paint_canvas(ui: &egui::Ui, rect: egui::Rect, renderer: &Renderer, frame: &RenderFrame) {
    let painter = ui.painter_at(rect);
    renderer.paint(&painter, rect, frame);
}
