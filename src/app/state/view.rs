/// View-bezogener Anwendungszustand
#[derive(Debug, Default)]
pub struct ViewState {
    /// Aktuelle Größe der Zeichenfläche in Pixeln
    pub surface_size: [f32; 2],
    /// Anzahl angeforderter Redraws seit Start
    pub redraw_count: u64,
    /// Signalisiert dem Host, dass ein Repaint nötig ist
    pub redraw_requested: bool,
    /// Signalisiert, dass das Hintergrundbild neu als Textur hochgeladen werden muss
    pub background_dirty: bool,
}

impl ViewState {
    /// Erstellt den Standard-View-Zustand.
    pub fn new() -> Self {
        Self {
            surface_size: [0.0, 0.0],
            redraw_count: 0,
            redraw_requested: false,
            background_dirty: false,
        }
    }

    /// Fordert genau einen vollständigen Redraw an.
    pub fn request_redraw(&mut self) {
        self.redraw_count += 1;
        self.redraw_requested = true;
    }

    /// Liefert und löscht die ausstehende Redraw-Anforderung.
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.redraw_requested)
    }
}
