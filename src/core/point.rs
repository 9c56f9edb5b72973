//! Verschiebbare Markierungspunkte des Dreiecks.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::fmt;

/// RGBA-Farbe, Komponenten im Bereich 0.0 bis 1.0.
pub type Rgba = [f32; 4];

/// Farbe eines Punkts ohne explizite Farbangabe (opak schwarz).
pub const POINT_COLOR_DEFAULT: Rgba = [0.0, 0.0, 0.0, 1.0];

/// Feste Identität eines der drei Dreieckspunkte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointId {
    /// Erster Punkt (Standard: rot)
    Dot1,
    /// Zweiter Punkt (Standard: blau)
    Dot2,
    /// Dritter Punkt (Standard: gelb)
    Dot3,
}

impl PointId {
    /// Alle Punkt-IDs in Deklarationsreihenfolge (= Zeichen- und Hit-Test-Reihenfolge).
    pub const ALL: [PointId; 3] = [PointId::Dot1, PointId::Dot2, PointId::Dot3];

    /// Stabiler Name des Punkts.
    pub fn name(self) -> &'static str {
        match self {
            PointId::Dot1 => "dot1",
            PointId::Dot2 => "dot2",
            PointId::Dot3 => "dot3",
        }
    }

    /// Position in der Deklarationsreihenfolge (0..3).
    pub fn index(self) -> usize {
        match self {
            PointId::Dot1 => 0,
            PointId::Dot2 => 1,
            PointId::Dot3 => 2,
        }
    }

    /// Die beiden anderen Punkte, die den Winkel an diesem Scheitel aufspannen.
    pub fn neighbors(self) -> (PointId, PointId) {
        match self {
            PointId::Dot1 => (PointId::Dot2, PointId::Dot3),
            PointId::Dot2 => (PointId::Dot1, PointId::Dot3),
            PointId::Dot3 => (PointId::Dot1, PointId::Dot2),
        }
    }
}

impl fmt::Display for PointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Achse eines Koordinatenfelds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    /// Ersetzt die Komponente dieser Achse in `position`.
    pub fn replace(self, position: Vec2, value: f32) -> Vec2 {
        match self {
            Axis::X => Vec2::new(value, position.y),
            Axis::Y => Vec2::new(position.x, value),
        }
    }
}

/// Ein Dreieckspunkt in Pixelkoordinaten der Zeichenfläche.
#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    /// Feste Identität
    pub id: PointId,
    /// Mittelpunkt in Surface-Pixeln (Ursprung oben links)
    pub position: Vec2,
    /// Füllfarbe des Markers
    pub color: Rgba,
    /// Nur während dieser Punkt aktiv gezogen wird
    pub dragging: bool,
}

impl Point {
    /// Erstellt einen Punkt an einer Position mit Farbe.
    pub fn new(id: PointId, position: Vec2, color: Rgba) -> Self {
        Self {
            id,
            position,
            color,
            dragging: false,
        }
    }

    /// Prüft, ob `pos` strikt innerhalb des Pick-Radius um den Mittelpunkt liegt.
    pub fn is_hit(&self, pos: Vec2, pick_radius: f32) -> bool {
        self.position.distance(pos) < pick_radius
    }
}
