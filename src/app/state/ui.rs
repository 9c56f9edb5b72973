use crate::core::{PointId, TrianglePoints};
use indexmap::IndexMap;

/// UI-bezogener Anwendungszustand
#[derive(Debug, Default)]
pub struct UiState {
    /// Ob der Hintergrundbild-Dateidialog geöffnet werden soll
    pub show_background_dialog: bool,
    /// Letzte Statusmeldung (Fehler, abgelehnte Eingaben)
    pub status_message: Option<String>,
    /// Angezeigte x/y-Werte der Koordinatenfelder pro Punkt
    pub coordinate_fields: IndexMap<PointId, [f32; 2]>,
}

impl UiState {
    /// Erstellt den UI-Zustand mit Koordinatenfeldern passend zu den Punkten.
    pub fn new(points: &TrianglePoints) -> Self {
        let mut state = Self {
            show_background_dialog: false,
            status_message: None,
            coordinate_fields: IndexMap::new(),
        };
        for point in points.iter() {
            state.sync_coordinate_fields(point.id, point.position);
        }
        state
    }

    /// Schreibt Live-Koordinaten eines Punkts in seine Koordinatenfelder.
    pub fn sync_coordinate_fields(&mut self, id: PointId, position: glam::Vec2) {
        self.coordinate_fields.insert(id, [position.x, position.y]);
    }

    /// Angezeigte Koordinaten eines Punkts.
    pub fn coordinate_field(&self, id: PointId) -> [f32; 2] {
        self.coordinate_fields
            .get(&id)
            .copied()
            .unwrap_or([0.0, 0.0])
    }

    /// Setzt eine Statusmeldung (ersetzt die vorherige).
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }
}
