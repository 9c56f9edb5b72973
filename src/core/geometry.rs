//! Reine Winkelgeometrie für das Markierungsdreieck.
//!
//! Berechnung und Formatierung sind getrennt, damit die Darstellung
//! (eine Nachkommastelle, Gradzeichen) unabhängig getestet werden kann.

use glam::Vec2;
use thiserror::Error;

/// Anzeige für einen Winkel, der nicht berechnet werden kann.
pub const ANGLE_PLACEHOLDER: &str = "--.-°";

/// Fehler der Winkelberechnung.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GeometryError {
    /// Scheitel fällt mit einem Nachbarpunkt zusammen (Vektorlänge 0).
    #[error("degenerate triangle: vertex ({x}, {y}) coincides with a neighbor")]
    DegenerateTriangle { x: f32, y: f32 },
}

/// Berechnet den Winkel (in Grad, 0..=180) am Scheitel `vertex`,
/// aufgespannt durch die Vektoren zu `neighbor_a` und `neighbor_b`.
///
/// Die Reihenfolge der Nachbarn spielt keine Rolle.
pub fn angle_at_vertex(
    vertex: Vec2,
    neighbor_a: Vec2,
    neighbor_b: Vec2,
) -> Result<f64, GeometryError> {
    let to_a = (neighbor_a - vertex).as_dvec2();
    let to_b = (neighbor_b - vertex).as_dvec2();

    let length_product = to_a.length() * to_b.length();
    if length_product == 0.0 || !length_product.is_finite() {
        return Err(GeometryError::DegenerateTriangle {
            x: vertex.x,
            y: vertex.y,
        });
    }

    // Rundung kann |cos| minimal über 1 treiben -> acos wäre NaN
    let cos = (to_a.dot(to_b) / length_product).clamp(-1.0, 1.0);
    Ok(cos.acos().to_degrees())
}

/// Formatiert einen Winkel mit einer Nachkommastelle und Gradzeichen.
pub fn format_angle(degrees: f64) -> String {
    format!("{:.1}°", degrees)
}

/// Label-Text für ein Berechnungsergebnis; Fehler werden zum Platzhalter.
pub fn angle_label(angle: Result<f64, GeometryError>) -> String {
    match angle {
        Ok(degrees) => format_angle(degrees),
        Err(_) => ANGLE_PLACEHOLDER.to_string(),
    }
}
