use crate::app::background_loader::DecodeCompletion;
use crate::core::{Axis, PointId, Rgba};

/// App-Intent Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
/// Alle Werte sind bereits normalisiert (Surface-Pixel, RGBA, Pfade).
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Primäre Maustaste auf der Zeichenfläche gedrückt
    PointerPressed { pos: glam::Vec2 },
    /// Pointer über der Zeichenfläche bewegt
    PointerMoved { pos: glam::Vec2 },
    /// Primäre Maustaste losgelassen
    PointerReleased,
    /// Pointer hat die Zeichenfläche verlassen
    PointerLeft,
    /// Zeichenfläche hat eine neue Größe (auch initiales Layout)
    SurfaceResized { size: [f32; 2] },
    /// Linienstärke im Zahlenfeld geändert (roh, unvalidiert)
    LineThicknessChanged { thickness: f32 },
    /// Linienfarbe im Farbwähler geändert
    LineColorChanged { color: Rgba },
    /// Farbe eines Punkts geändert
    PointColorChanged { point: PointId, color: Rgba },
    /// Koordinatenfeld eines Punkts bearbeitet
    PointCoordinateEdited {
        point: PointId,
        axis: Axis,
        value: f32,
    },
    /// Hintergrundbild-Auswahldialog öffnen
    BackgroundSelectionRequested,
    /// Datei im Hintergrundbild-Dialog gewählt
    BackgroundFileSelected { path: String },
    /// Dekodierung eines Hintergrundbilds abgeschlossen (Worker-Thread)
    BackgroundDecoded { completion: DecodeCompletion },
    /// Aktuellen Linienstil als Standard in der Optionen-Datei speichern
    SaveLineStyleAsDefaultRequested,
    /// Anwendung beenden
    ExitRequested,
}
