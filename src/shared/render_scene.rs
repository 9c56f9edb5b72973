//! Render-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und `render` sie konsumiert.

use crate::core::{BackgroundImage, Rgba, TrianglePoints};
use std::sync::Arc;

/// Read-only Daten für einen Render-Frame.
#[derive(Debug, Clone)]
pub struct RenderScene {
    /// Die drei Dreieckspunkte (Kopie, drei Einträge)
    pub points: TrianglePoints,
    /// Größe der Zeichenfläche in Pixeln [Breite, Höhe]
    pub surface_size: [f32; 2],
    /// Hintergrundbild (optional, Arc für O(1)-Clone pro Frame)
    pub background: Option<Arc<BackgroundImage>>,
    /// Linienstärke der Dreieckskanten
    pub line_thickness: f32,
    /// Farbe der Dreieckskanten und Winkel-Labels
    pub line_color: Rgba,
    /// Radius der Punkt-Marker
    pub point_radius: f32,
    /// Label-Versatz relativ zum Scheitel
    pub label_offset: glam::Vec2,
    /// Schriftgröße der Winkel-Labels
    pub label_font_size: f32,
}

impl RenderScene {
    /// Gibt zurück, ob ein Hintergrundbild gezeichnet wird.
    pub fn has_background(&self) -> bool {
        self.background.is_some()
    }
}
