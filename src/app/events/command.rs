use crate::app::background_loader::DecodeCompletion;
use crate::core::{Axis, PointId, Rgba};

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Drag-Start per Hit-Test an Surface-Position
    BeginDrag { pos: glam::Vec2 },
    /// Aktiven Punkt auf Surface-Position setzen
    DragTo { pos: glam::Vec2 },
    /// Aktiven Drag beenden (Release oder Pointer verlässt Fläche)
    EndDrag,
    /// Größe der Zeichenfläche setzen
    SetSurfaceSize { size: [f32; 2] },
    /// Linienstärke und -farbe gemeinsam setzen
    SetLineStyle { thickness: f32, color: Rgba },
    /// Farbe eines Punkts setzen
    SetPointColor { point: PointId, color: Rgba },
    /// Einzelne Koordinate eines Punkts setzen
    SetPointCoordinate {
        point: PointId,
        axis: Axis,
        value: f32,
    },
    /// Hintergrundbild-Dialog anfordern
    RequestBackgroundDialog,
    /// Hintergrundbild asynchron laden
    LoadBackgroundImage { path: String },
    /// Ergebnis einer Dekodierung übernehmen (oder verwerfen, wenn veraltet)
    ApplyDecodedBackground { completion: DecodeCompletion },
    /// Linienstil in die Optionen-Datei schreiben
    SaveLineStyleAsDefault,
    /// Anwendung beenden
    RequestExit,
}
