//! Konvertierung von Hintergrundbildern in egui-Bilddaten.

use crate::core::BackgroundImage;

/// Erstellt ein `egui::ColorImage` aus einem dekodierten RGBA8-Bild.
///
/// Bilder mit einer Seite über `max_side` (GPU-Limit) werden vorher verkleinert.
pub fn to_color_image(image: &BackgroundImage, max_side: usize) -> egui::ColorImage {
    let max_side = u32::try_from(max_side).unwrap_or(u32::MAX);
    let fitted = image.fit_within(max_side);
    let image = fitted.as_ref().unwrap_or(image);
    let (width, height) = image.dimensions();
    egui::ColorImage::from_rgba_unmultiplied([width as usize, height as usize], image.pixels())
}

/// Wandelt eine RGBA-Farbe (0.0 bis 1.0) in eine egui-Farbe um.
pub fn to_color32(color: crate::core::Rgba) -> egui::Color32 {
    let [r, g, b, a] = color.map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8);
    egui::Color32::from_rgba_unmultiplied(r, g, b, a)
}

/// Wandelt eine egui-Farbe zurück in RGBA (0.0 bis 1.0, nicht prämultipliziert).
pub fn from_color32(color: egui::Color32) -> crate::core::Rgba {
    color.to_srgba_unmultiplied().map(|c| f32::from(c) / 255.0)
}
