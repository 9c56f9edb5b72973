use crate::core::{BackgroundImage, PointId, Rgba, TrianglePoints};
use crate::shared::OverlayOptions;
use std::sync::Arc;
use thiserror::Error;

/// Abgelehnte Linienstil-Eingabe.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum LineStyleError {
    /// Linienstärke ist nicht endlich oder nicht positiv.
    #[error("invalid line thickness {0}: must be a positive number")]
    InvalidThickness(f32),
}

/// Szenenzustand: Punkte, Hintergrundbild und Linienstil.
///
/// Wird nur vom Control-Thread mutiert; der Renderer liest ihn über eine
/// `RenderScene`-Kopie.
#[derive(Debug)]
pub struct SceneState {
    /// Die drei benannten Punkte
    pub points: TrianglePoints,
    /// Hintergrundbild (None bis zur ersten erfolgreichen Dekodierung)
    pub background: Option<Arc<BackgroundImage>>,
    /// Linienstärke der Dreieckskanten (immer > 0)
    pub line_thickness: f32,
    /// Farbe der Kanten und Winkel-Labels
    pub line_color: Rgba,
}

impl SceneState {
    /// Erstellt die Startszene aus den Optionen.
    pub fn from_options(options: &OverlayOptions) -> Self {
        let positions = options
            .initial_point_positions
            .map(|[x, y]| glam::Vec2::new(x, y));
        Self {
            points: TrianglePoints::new(positions, options.initial_point_colors),
            background: None,
            line_thickness: options.line_thickness,
            line_color: options.line_color,
        }
    }

    /// Überschreibt die Position eines Punkts, ohne Begrenzung auf die Fläche.
    pub fn set_point_position(&mut self, id: PointId, position: glam::Vec2) {
        self.points.set_position(id, position);
    }

    /// Überschreibt Linienstärke und -farbe gemeinsam.
    ///
    /// Nicht endliche oder nicht positive Stärken werden abgelehnt,
    /// der bisherige Stil bleibt dann unverändert.
    pub fn set_line_style(&mut self, thickness: f32, color: Rgba) -> Result<(), LineStyleError> {
        if !thickness.is_finite() || thickness <= 0.0 {
            return Err(LineStyleError::InvalidThickness(thickness));
        }
        self.line_thickness = thickness;
        self.line_color = color;
        Ok(())
    }

    /// Ersetzt das Hintergrundbild vollständig.
    pub fn set_background(&mut self, image: Arc<BackgroundImage>) {
        self.background = Some(image);
    }
}
