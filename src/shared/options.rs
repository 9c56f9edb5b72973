//! Zentrale Konfiguration für das Winkel-Overlay.
//!
//! `OverlayOptions` enthält alle beim Start ladbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::{Rgba, POINT_COLOR_DEFAULT};
use serde::{Deserialize, Serialize};

// ── Punkte ──────────────────────────────────────────────────────────

/// Startpositionen der drei Punkte in Surface-Pixeln (dot1, dot2, dot3).
pub const INITIAL_POINT_POSITIONS: [[f32; 2]; 3] = [[100.0, 100.0], [200.0, 200.0], [300.0, 100.0]];
/// Startfarben der drei Punkte (RGBA: Rot, Blau, Gelb).
pub const INITIAL_POINT_COLORS: [Rgba; 3] = [
    [1.0, 0.0, 0.0, 1.0],
    [0.0, 0.0, 1.0, 1.0],
    [1.0, 1.0, 0.0, 1.0],
];
/// Radius der gezeichneten Punkt-Marker in Pixeln.
pub const POINT_RADIUS_PX: f32 = 5.0;
/// Pick-Radius für den Hit-Test in Pixeln (Abstand strikt kleiner).
pub const POINT_PICK_RADIUS_PX: f32 = 5.0;

// ── Linien ──────────────────────────────────────────────────────────

/// Standard-Linienstärke des Dreiecks in Pixeln.
pub const LINE_THICKNESS_DEFAULT: f32 = 1.0;
/// Standard-Linienfarbe (RGBA: Dunkelgrau #333333).
pub const LINE_COLOR_DEFAULT: Rgba = [0.2, 0.2, 0.2, 1.0];

// ── Winkel-Labels ───────────────────────────────────────────────────

/// Versatz der Winkel-Labels relativ zum Scheitel (rechts, oben).
pub const LABEL_OFFSET_PX: [f32; 2] = [10.0, -10.0];
/// Schriftgröße der Winkel-Labels in Pixeln.
pub const LABEL_FONT_SIZE_PX: f32 = 14.0;

// ── Fenster ─────────────────────────────────────────────────────────

/// Startgröße des Hauptfensters.
pub const WINDOW_SIZE_DEFAULT: [f32; 2] = [1024.0, 720.0];

/// Alle beim Start ladbaren Overlay-Optionen.
/// Wird als `triangle_angle_overlay.toml` neben der Binary gespeichert.
///
/// Punktpositionen werden nur gelesen, nie zurückgeschrieben.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OverlayOptions {
    // ── Punkte ──────────────────────────────────────────────────
    /// Startpositionen (dot1, dot2, dot3)
    pub initial_point_positions: [[f32; 2]; 3],
    /// Startfarben (dot1, dot2, dot3)
    pub initial_point_colors: [Rgba; 3],
    /// Marker-Radius in Pixeln
    pub point_radius_px: f32,
    /// Pick-Radius für Drag-Start in Pixeln
    #[serde(default = "default_pick_radius_px")]
    pub pick_radius_px: f32,

    // ── Linien ──────────────────────────────────────────────────
    /// Start-Linienstärke
    pub line_thickness: f32,
    /// Start-Linienfarbe
    pub line_color: Rgba,

    // ── Labels ──────────────────────────────────────────────────
    /// Label-Versatz relativ zum Scheitel
    pub label_offset_px: [f32; 2],
    /// Label-Schriftgröße
    #[serde(default = "default_label_font_size_px")]
    pub label_font_size_px: f32,

    // ── Fenster ─────────────────────────────────────────────────
    /// Startgröße des Fensters
    #[serde(default = "default_window_size")]
    pub window_size: [f32; 2],
}

impl Default for OverlayOptions {
    fn default() -> Self {
        Self {
            initial_point_positions: INITIAL_POINT_POSITIONS,
            initial_point_colors: INITIAL_POINT_COLORS,
            point_radius_px: POINT_RADIUS_PX,
            pick_radius_px: POINT_PICK_RADIUS_PX,
            line_thickness: LINE_THICKNESS_DEFAULT,
            line_color: LINE_COLOR_DEFAULT,
            label_offset_px: LABEL_OFFSET_PX,
            label_font_size_px: LABEL_FONT_SIZE_PX,
            window_size: WINDOW_SIZE_DEFAULT,
        }
    }
}

/// Serde-Default für `pick_radius_px` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_pick_radius_px() -> f32 {
    POINT_PICK_RADIUS_PX
}

/// Serde-Default für `label_font_size_px` (Abwärtskompatibilität).
fn default_label_font_size_px() -> f32 {
    LABEL_FONT_SIZE_PX
}

/// Serde-Default für `window_size` (Abwärtskompatibilität).
fn default_window_size() -> [f32; 2] {
    WINDOW_SIZE_DEFAULT
}

impl OverlayOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<Self>(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts.sanitized()
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("triangle_angle_overlay"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("triangle_angle_overlay.toml")
    }

    /// Ersetzt unbrauchbare Werte durch Standardwerte.
    ///
    /// Größen müssen endlich und > 0 sein, Positionen, Versätze und Farben endlich.
    pub fn sanitized(mut self) -> Self {
        fn positive_or(value: f32, fallback: f32, name: &str) -> f32 {
            if value.is_finite() && value > 0.0 {
                value
            } else {
                log::warn!("Ungültiger Wert für {}: {}, verwende {}", name, value, fallback);
                fallback
            }
        }

        self.line_thickness =
            positive_or(self.line_thickness, LINE_THICKNESS_DEFAULT, "line_thickness");
        self.point_radius_px = positive_or(self.point_radius_px, POINT_RADIUS_PX, "point_radius_px");
        self.pick_radius_px =
            positive_or(self.pick_radius_px, POINT_PICK_RADIUS_PX, "pick_radius_px");
        self.label_font_size_px = positive_or(
            self.label_font_size_px,
            LABEL_FONT_SIZE_PX,
            "label_font_size_px",
        );
        fn all_finite(values: &[f32]) -> bool {
            values.iter().all(|v| v.is_finite())
        }

        for color in &mut self.initial_point_colors {
            if !all_finite(&color[..]) {
                log::warn!("Ungültige Punktfarbe {:?}, verwende Schwarz", color);
                *color = POINT_COLOR_DEFAULT;
            }
        }
        for (position, fallback) in self
            .initial_point_positions
            .iter_mut()
            .zip(INITIAL_POINT_POSITIONS)
        {
            if !all_finite(&position[..]) {
                log::warn!("Ungültige Startposition {:?}, verwende {:?}", position, fallback);
                *position = fallback;
            }
        }
        if !all_finite(&self.line_color) {
            log::warn!("Ungültige Linienfarbe {:?}, verwende Standard", self.line_color);
            self.line_color = LINE_COLOR_DEFAULT;
        }
        if !all_finite(&self.label_offset_px) {
            log::warn!("Ungültiger Label-Versatz {:?}, verwende Standard", self.label_offset_px);
            self.label_offset_px = LABEL_OFFSET_PX;
        }
        if !self.window_size.iter().all(|v| v.is_finite() && *v > 0.0) {
            log::warn!("Ungültige Fenstergröße {:?}, verwende Standard", self.window_size);
            self.window_size = WINDOW_SIZE_DEFAULT;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().expect("Temp-Verzeichnis");
        let opts = OverlayOptions::load_from_file(&dir.path().join("fehlt.toml"));
        assert_eq!(opts, OverlayOptions::default());
    }

    #[test]
    fn test_malformed_file_gives_defaults() {
        let dir = tempfile::tempdir().expect("Temp-Verzeichnis");
        let path = dir.path().join("kaputt.toml");
        std::fs::write(&path, "line_thickness = [nicht, gueltig").expect("Schreiben");
        assert_eq!(OverlayOptions::load_from_file(&path), OverlayOptions::default());
    }

    #[test]
    fn test_saved_line_style_is_loaded_back() {
        let dir = tempfile::tempdir().expect("Temp-Verzeichnis");
        let path = dir.path().join("overlay.toml");

        let mut opts = OverlayOptions::default();
        opts.line_thickness = 3.5;
        opts.line_color = [0.5, 0.25, 0.0, 1.0];
        opts.save_to_file(&path).expect("Speichern");

        let loaded = OverlayOptions::load_from_file(&path);
        assert_eq!(loaded, opts);
    }

    #[test]
    fn test_older_file_without_new_fields_uses_defaults() {
        let dir = tempfile::tempdir().expect("Temp-Verzeichnis");
        let path = dir.path().join("alt.toml");
        let content = r#"
initial_point_positions = [[10.0, 10.0], [20.0, 40.0], [60.0, 10.0]]
initial_point_colors = [[1.0, 0.0, 0.0, 1.0], [0.0, 0.0, 1.0, 1.0], [1.0, 1.0, 0.0, 1.0]]
point_radius_px = 6.0
line_thickness = 2.0
line_color = [0.0, 0.0, 0.0, 1.0]
label_offset_px = [10.0, -10.0]
"#;
        std::fs::write(&path, content).expect("Schreiben");

        let loaded = OverlayOptions::load_from_file(&path);
        assert_eq!(loaded.initial_point_positions[1], [20.0, 40.0]);
        assert_eq!(loaded.point_radius_px, 6.0);
        assert_eq!(loaded.line_thickness, 2.0);
        assert_eq!(loaded.pick_radius_px, POINT_PICK_RADIUS_PX);
        assert_eq!(loaded.label_font_size_px, LABEL_FONT_SIZE_PX);
        assert_eq!(loaded.window_size, WINDOW_SIZE_DEFAULT);
    }

    #[test]
    fn test_sanitized_replaces_unusable_values() {
        let opts = OverlayOptions {
            line_thickness: 0.0,
            pick_radius_px: -2.0,
            point_radius_px: f32::NAN,
            initial_point_colors: [
                [1.0, 0.0, 0.0, 1.0],
                [f32::NAN, 0.0, 0.0, 1.0],
                [1.0, 1.0, 0.0, 1.0],
            ],
            ..OverlayOptions::default()
        }
        .sanitized();
        assert_eq!(opts.line_thickness, LINE_THICKNESS_DEFAULT);
        assert_eq!(opts.initial_point_colors[1], POINT_COLOR_DEFAULT);
        assert_eq!(opts.pick_radius_px, POINT_PICK_RADIUS_PX);
        assert_eq!(opts.point_radius_px, POINT_RADIUS_PX);
    }

    #[test]
    fn test_sanitized_replaces_non_finite_positions_and_colors() {
        let opts = OverlayOptions {
            initial_point_positions: [[10.0, 10.0], [f32::INFINITY, 40.0], [60.0, f32::NAN]],
            line_color: [0.0, f32::NAN, 0.0, 1.0],
            label_offset_px: [f32::NEG_INFINITY, -10.0],
            window_size: [0.0, 600.0],
            ..OverlayOptions::default()
        }
        .sanitized();
        assert_eq!(opts.initial_point_positions[0], [10.0, 10.0]);
        assert_eq!(opts.initial_point_positions[1], INITIAL_POINT_POSITIONS[1]);
        assert_eq!(opts.initial_point_positions[2], INITIAL_POINT_POSITIONS[2]);
        assert_eq!(opts.line_color, LINE_COLOR_DEFAULT);
        assert_eq!(opts.label_offset_px, LABEL_OFFSET_PX);
        assert_eq!(opts.window_size, WINDOW_SIZE_DEFAULT);

        let nan_window = OverlayOptions {
            window_size: [f32::NAN, 600.0],
            ..OverlayOptions::default()
        }
        .sanitized();
        assert_eq!(nan_window.window_size, WINDOW_SIZE_DEFAULT);
    }
}
