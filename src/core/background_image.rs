//! Hintergrundbild für die Zeichenfläche.
//!
//! Das Bild wird beim Rendern immer auf die volle Surface-Größe gestreckt,
//! das Seitenverhältnis bleibt dabei nicht erhalten.

use image::{DynamicImage, ImageFormat, ImageReader, RgbaImage};
use std::fmt;
use std::io::BufReader;
use std::path::Path;
use thiserror::Error;

/// Fehler beim Laden eines Hintergrundbilds.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BackgroundError {
    /// Datei ist kein (lesbares) Bildformat; wird vor dem Dekodieren abgelehnt.
    #[error("unsupported file, not an image: {path}")]
    UnsupportedFile { path: String },
    /// Bilddaten konnten nicht dekodiert werden.
    #[error("failed to decode background image {path}: {message}")]
    DecodeFailure { path: String, message: String },
}

/// Dekodiertes Hintergrundbild (RGBA8).
pub struct BackgroundImage {
    image: RgbaImage,
    source: String,
}

impl fmt::Debug for BackgroundImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (width, height) = self.dimensions();
        f.debug_struct("BackgroundImage")
            .field("source", &self.source)
            .field("width", &width)
            .field("height", &height)
            .finish()
    }
}

impl BackgroundImage {
    /// Prüft anhand der Dateiendung, ob es sich um ein lesbares Bildformat handelt.
    pub fn ensure_image_kind(path: &Path) -> Result<ImageFormat, BackgroundError> {
        match ImageFormat::from_path(path) {
            Ok(format) if format.reading_enabled() => Ok(format),
            _ => Err(BackgroundError::UnsupportedFile {
                path: path.display().to_string(),
            }),
        }
    }

    /// Lädt und dekodiert ein Bild von der Festplatte.
    ///
    /// Schlägt die Erkennung über die Dateiendung fehl (z.B. falsch benannte
    /// Datei), wird das Format anhand der Magic Bytes erkannt.
    pub fn load_from_file(path: &Path) -> Result<Self, BackgroundError> {
        let label = path.display().to_string();
        let decode_failure = |message: String| BackgroundError::DecodeFailure {
            path: label.clone(),
            message,
        };

        let image = match image::open(path) {
            Ok(img) => img,
            Err(ext_err) => {
                log::warn!(
                    "Format-Erkennung via Dateiendung fehlgeschlagen für '{}': {}. Versuche Erkennung via Dateiinhalt...",
                    label,
                    ext_err
                );
                let file = std::fs::File::open(path).map_err(|e| decode_failure(e.to_string()))?;
                let reader = ImageReader::new(BufReader::new(file))
                    .with_guessed_format()
                    .map_err(|e| decode_failure(e.to_string()))?;
                if let Some(fmt) = reader.format() {
                    log::info!("Tatsächliches Bildformat erkannt: {:?} für '{}'", fmt, label);
                }
                reader.decode().map_err(|e| decode_failure(e.to_string()))?
            }
        };

        Ok(Self::from_image(image, &label))
    }

    /// Dekodiert ein Bild aus einem Speicherpuffer.
    pub fn from_bytes(bytes: &[u8], source_label: &str) -> Result<Self, BackgroundError> {
        let image =
            image::load_from_memory(bytes).map_err(|e| BackgroundError::DecodeFailure {
                path: source_label.to_string(),
                message: e.to_string(),
            })?;
        Ok(Self::from_image(image, source_label))
    }

    /// Übernimmt ein bereits dekodiertes Bild.
    pub fn from_image(image: DynamicImage, source_label: &str) -> Self {
        let image = image.to_rgba8();
        log::debug!(
            "Hintergrundbild dekodiert: {}x{} Pixel ({})",
            image.width(),
            image.height(),
            source_label
        );
        Self {
            image,
            source: source_label.to_string(),
        }
    }

    /// Breite und Höhe in Pixeln.
    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    /// Rohdaten, RGBA8 ohne Prämultiplikation, zeilenweise.
    pub fn pixels(&self) -> &[u8] {
        self.image.as_raw()
    }

    /// Herkunft (Dateipfad oder Label).
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Verkleinert das Bild so, dass keine Seite `max_side` überschreitet.
    ///
    /// Liefert `None`, wenn das Bild bereits passt. Das Seitenverhältnis
    /// bleibt erhalten, jede Seite ist mindestens 1 Pixel groß.
    pub fn fit_within(&self, max_side: u32) -> Option<Self> {
        let max_side = max_side.max(1);
        let (width, height) = self.dimensions();
        if width <= max_side && height <= max_side {
            return None;
        }

        let scale = f64::from(max_side) / f64::from(width.max(height));
        let scaled = |side: u32| ((f64::from(side) * scale).round() as u32).clamp(1, max_side);
        let (new_width, new_height) = (scaled(width), scaled(height));
        log::info!(
            "Hintergrundbild zu groß für Textur ({}x{}), verkleinert auf {}x{}",
            width,
            height,
            new_width,
            new_height
        );

        Some(Self {
            image: image::imageops::resize(
                &self.image,
                new_width,
                new_height,
                image::imageops::FilterType::Triangle,
            ),
            source: self.source.clone(),
        })
    }
}
