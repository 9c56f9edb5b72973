//! Die drei benannten Dreieckspunkte und ihre Innenwinkel.

use glam::Vec2;
use indexmap::IndexMap;

use super::geometry::{angle_at_vertex, GeometryError};
use super::point::{Point, PointId, Rgba};

/// Feste, geordnete Menge aus genau drei Punkten.
///
/// Die Reihenfolge entspricht `PointId::ALL` und bestimmt Zeichen- und
/// Hit-Test-Reihenfolge. Punkte werden nie hinzugefügt oder entfernt.
#[derive(Debug, Clone, PartialEq)]
pub struct TrianglePoints {
    points: IndexMap<PointId, Point>,
}

impl TrianglePoints {
    /// Erstellt die drei Punkte aus Startpositionen und Farben (Deklarationsreihenfolge).
    pub fn new(positions: [Vec2; 3], colors: [Rgba; 3]) -> Self {
        let points = PointId::ALL
            .into_iter()
            .map(|id| {
                let index = id.index();
                (id, Point::new(id, positions[index], colors[index]))
            })
            .collect();
        Self { points }
    }

    /// Liefert einen Punkt.
    pub fn get(&self, id: PointId) -> &Point {
        &self.points[&id]
    }

    /// Liefert einen Punkt zur Mutation.
    pub fn get_mut(&mut self, id: PointId) -> &mut Point {
        &mut self.points[&id]
    }

    /// Iteriert in Deklarationsreihenfolge.
    pub fn iter(&self) -> impl Iterator<Item = &Point> {
        self.points.values()
    }

    /// Positionen in Deklarationsreihenfolge.
    pub fn positions(&self) -> [Vec2; 3] {
        PointId::ALL.map(|id| self.get(id).position)
    }

    /// Erster Punkt (in Deklarationsreihenfolge), dessen Pick-Radius `pos` enthält.
    pub fn hit_test(&self, pos: Vec2, pick_radius: f32) -> Option<PointId> {
        self.iter()
            .find(|point| point.is_hit(pos, pick_radius))
            .map(|point| point.id)
    }

    /// Überschreibt die Position eines Punkts (ohne Begrenzung auf die Fläche).
    pub fn set_position(&mut self, id: PointId, position: Vec2) {
        self.get_mut(id).position = position;
    }

    /// Überschreibt die Farbe eines Punkts.
    pub fn set_color(&mut self, id: PointId, color: Rgba) {
        self.get_mut(id).color = color;
    }

    /// Anzahl der Punkte mit gesetztem Drag-Flag (Invariante: höchstens 1).
    pub fn dragging_count(&self) -> usize {
        self.iter().filter(|point| point.dragging).count()
    }

    /// Berechnet die drei Innenwinkel; jeder Scheitel nutzt die beiden anderen Punkte.
    pub fn angles(&self) -> TriangleAngles {
        let angles = PointId::ALL.map(|id| {
            let (a, b) = id.neighbors();
            angle_at_vertex(
                self.get(id).position,
                self.get(a).position,
                self.get(b).position,
            )
        });
        TriangleAngles { angles }
    }
}

/// Innenwinkel pro Scheitel, in Grad.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriangleAngles {
    angles: [Result<f64, GeometryError>; 3],
}

impl TriangleAngles {
    /// Winkel am Scheitel `id`.
    pub fn at(&self, id: PointId) -> Result<f64, GeometryError> {
        self.angles[id.index()]
    }

    /// Iteriert in Deklarationsreihenfolge.
    pub fn iter(&self) -> impl Iterator<Item = (PointId, Result<f64, GeometryError>)> + '_ {
        PointId::ALL.into_iter().map(|id| (id, self.at(id)))
    }

    /// Summe aller drei Winkel; schlägt fehl, sobald ein Winkel degeneriert ist.
    pub fn sum(&self) -> Result<f64, GeometryError> {
        self.angles
            .iter()
            .try_fold(0.0_f64, |acc, angle| angle.map(|degrees| acc + degrees))
    }

    /// Gibt `true` zurück, wenn mindestens ein Winkel nicht berechenbar ist.
    pub fn is_degenerate(&self) -> bool {
        self.angles.iter().any(Result::is_err)
    }
}
