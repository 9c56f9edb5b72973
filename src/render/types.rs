//! Rendering-Typen: Zeichenprimitive und Frame.

use crate::core::{BackgroundImage, Rgba};
use glam::Vec2;
use std::sync::Arc;

/// Füllfarbe beim Leeren der Zeichenfläche (opak weiß).
pub const CLEAR_COLOR: Rgba = [1.0, 1.0, 1.0, 1.0];

/// Ein Zeichenprimitiv in Surface-Pixeln.
#[derive(Debug, Clone)]
pub enum DrawCommand {
    /// Gesamte Fläche `[0, size]` mit einer Farbe füllen
    Clear { size: Vec2, color: Rgba },
    /// Bild in das Rechteck `[min, max]` strecken
    Image {
        image: Arc<BackgroundImage>,
        min: Vec2,
        max: Vec2,
    },
    /// Geschlossener Linienzug
    ClosedPath {
        points: Vec<Vec2>,
        width: f32,
        color: Rgba,
    },
    /// Text, linke untere Ecke an `anchor`
    Text {
        anchor: Vec2,
        text: String,
        font_size: f32,
        color: Rgba,
    },
    /// Gefüllter Kreis
    Disc {
        center: Vec2,
        radius: f32,
        color: Rgba,
    },
}

/// Geordnete Liste von Zeichenprimitiven für einen vollständigen Redraw.
///
/// Spätere Einträge werden über frühere gezeichnet.
#[derive(Debug, Clone, Default)]
pub struct RenderFrame {
    /// Zeichenprimitive in Zeichenreihenfolge
    pub commands: Vec<DrawCommand>,
}

impl RenderFrame {
    /// Erstellt einen leeren Frame mit Platz für `capacity` Primitive.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            commands: Vec::with_capacity(capacity),
        }
    }

    /// Hängt ein Primitiv an.
    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    /// Alle Text-Primitive in Zeichenreihenfolge.
    pub fn texts(&self) -> impl Iterator<Item = (&Vec2, &str)> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Text { anchor, text, .. } => Some((anchor, text.as_str())),
            _ => None,
        })
    }

    /// Alle Disc-Primitive in Zeichenreihenfolge.
    pub fn discs(&self) -> impl Iterator<Item = (&Vec2, f32, &Rgba)> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Disc {
                center,
                radius,
                color,
            } => Some((center, *radius, color)),
            _ => None,
        })
    }
}

/// Gemeinsamer Kontext für alle Sub-Renderer eines Frames.
pub(crate) struct RenderContext<'a> {
    /// Szene des aktuellen Frames
    pub scene: &'a crate::shared::RenderScene,
    /// Surface-Größe als Vektor
    pub surface_size: Vec2,
}
