//! Drag-Zustandsmaschine für die drei Dreieckspunkte.
//!
//! Zustände: `Idle` und `Dragging(punkt)`. Der aktive Punkt wird nur hier
//! als `PointId`-Handle gehalten; der Punkt selbst trägt lediglich das
//! `dragging`-Flag für die Darstellung.

use crate::core::{PointId, TrianglePoints};
use glam::Vec2;

/// Zustand der Drag-Session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    /// Kein Punkt wird gezogen
    #[default]
    Idle,
    /// Der angegebene Punkt folgt dem Pointer
    Dragging(PointId),
}

/// Übersetzt Pointer-Ereignisse in Punkt-Mutationen.
#[derive(Debug, Default)]
pub struct DragController {
    state: DragState,
}

impl DragController {
    /// Erstellt einen Controller im Zustand `Idle`.
    pub fn new() -> Self {
        Self {
            state: DragState::Idle,
        }
    }

    /// Aktueller Zustand.
    pub fn state(&self) -> DragState {
        self.state
    }

    /// Aktuell gezogener Punkt, falls vorhanden.
    pub fn active_point(&self) -> Option<PointId> {
        match self.state {
            DragState::Idle => None,
            DragState::Dragging(id) => Some(id),
        }
    }

    /// Pointer gedrückt: Hit-Test in Deklarationsreihenfolge, erster Treffer gewinnt.
    ///
    /// Während eines laufenden Drags wird nicht erneut getestet.
    /// Gibt den neu gegriffenen Punkt zurück.
    pub fn press(
        &mut self,
        points: &mut TrianglePoints,
        pos: Vec2,
        pick_radius: f32,
    ) -> Option<PointId> {
        if let DragState::Dragging(active) = self.state {
            log::debug!("Press bei ({}, {}) ignoriert, {} wird bereits gezogen", pos.x, pos.y, active);
            return None;
        }

        let hit = points.hit_test(pos, pick_radius)?;
        points.get_mut(hit).dragging = true;
        self.state = DragState::Dragging(hit);
        log::debug!("Drag gestartet: {} bei ({}, {})", hit, pos.x, pos.y);
        Some(hit)
    }

    /// Pointer bewegt: setzt den aktiven Punkt auf `pos` (ohne Begrenzung).
    ///
    /// Gibt den bewegten Punkt zurück; im Zustand `Idle` passiert nichts.
    pub fn drag_to(&mut self, points: &mut TrianglePoints, pos: Vec2) -> Option<PointId> {
        let id = self.active_point()?;
        points.set_position(id, pos);
        Some(id)
    }

    /// Pointer losgelassen oder Fläche verlassen: beendet den Drag.
    ///
    /// Der Punkt bleibt an seiner letzten Position.
    pub fn release(&mut self, points: &mut TrianglePoints) -> Option<PointId> {
        let id = self.active_point()?;
        points.get_mut(id).dragging = false;
        self.state = DragState::Idle;
        log::debug!("Drag beendet: {}", id);
        Some(id)
    }
}
