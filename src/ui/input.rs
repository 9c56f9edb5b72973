//! Canvas-Input-Handling: Pointer-Events und Größenänderung → AppIntent.
//!
//! Alle Positionen werden relativ zur linken oberen Ecke der Zeichenfläche
//! übergeben.

use crate::app::AppIntent;
use glam::Vec2;

/// Pointer-Zustand eines Frames, bereits in Surface-Koordinaten.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerSample {
    /// Letzte bekannte Pointer-Position (None = außerhalb des Fensters)
    pub pos: Option<Vec2>,
    /// Pointer liegt über der Zeichenfläche
    pub inside: bool,
    /// Primäre Taste wurde in diesem Frame gedrückt
    pub pressed: bool,
    /// Primäre Taste wurde in diesem Frame losgelassen
    pub released: bool,
    /// Pointer hat sich in diesem Frame bewegt
    pub moved: bool,
}

/// Verwaltet den Input-Zustand der Zeichenfläche zwischen Frames.
#[derive(Default)]
pub struct InputState {
    was_inside: bool,
    last_surface_size: Option<[f32; 2]>,
}

impl InputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self {
            was_inside: false,
            last_surface_size: None,
        }
    }

    /// Sammelt Canvas-Events aus egui-Input und gibt AppIntents zurück.
    pub fn collect_canvas_events(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
        rect: egui::Rect,
    ) -> Vec<AppIntent> {
        let mut events = Vec::new();
        events.extend(self.surface_resized([rect.width(), rect.height()]));

        let sample = ui.input(|i| {
            let latest = i.pointer.latest_pos();
            PointerSample {
                pos: latest.map(|p| Vec2::new(p.x - rect.min.x, p.y - rect.min.y)),
                inside: latest.is_some_and(|p| rect.contains(p)) && response.contains_pointer(),
                pressed: i.pointer.primary_pressed(),
                released: i.pointer.primary_released(),
                moved: i.pointer.is_moving(),
            }
        });
        events.extend(self.pointer_intents(sample));
        events
    }

    /// Meldet die Surface-Größe nur, wenn sie sich geändert hat.
    pub fn surface_resized(&mut self, size: [f32; 2]) -> Option<AppIntent> {
        if self.last_surface_size == Some(size) {
            return None;
        }
        self.last_surface_size = Some(size);
        Some(AppIntent::SurfaceResized { size })
    }

    /// Übersetzt einen Pointer-Zustand in Intents.
    ///
    /// Reihenfolge innerhalb eines Frames: Press, Move, Release, Leave.
    /// Press und Move zählen nur über der Zeichenfläche; ein Release wird
    /// immer gemeldet, damit ein Drag nie hängen bleibt.
    pub fn pointer_intents(&mut self, sample: PointerSample) -> Vec<AppIntent> {
        let mut events = Vec::new();

        if let Some(pos) = sample.pos.filter(|_| sample.inside) {
            if sample.pressed {
                events.push(AppIntent::PointerPressed { pos });
            }
            if sample.moved {
                events.push(AppIntent::PointerMoved { pos });
            }
        }

        if sample.released {
            events.push(AppIntent::PointerReleased);
        }

        if self.was_inside && !sample.inside {
            events.push(AppIntent::PointerLeft);
        }
        self.was_inside = sample.inside;

        events
    }
}
