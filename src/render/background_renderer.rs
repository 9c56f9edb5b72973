//! Background-Renderer: Hintergrundbild als egui-Textur.

use super::texture::to_color_image;
use super::types::{DrawCommand, RenderContext, RenderFrame};
use crate::core::BackgroundImage;
use glam::Vec2;

/// Hält die hochgeladene Textur des aktuellen Hintergrundbilds.
#[derive(Default)]
pub struct BackgroundRenderer {
    texture: Option<egui::TextureHandle>,
}

impl BackgroundRenderer {
    /// Erstellt einen Renderer ohne Textur.
    pub fn new() -> Self {
        Self { texture: None }
    }

    /// Hängt das Hintergrundbild, gestreckt auf die volle Fläche, an den Frame.
    pub(crate) fn push_commands(ctx: &RenderContext<'_>, frame: &mut RenderFrame) {
        let Some(image) = ctx.scene.background.as_ref() else {
            return;
        };
        frame.push(DrawCommand::Image {
            image: image.clone(),
            min: Vec2::ZERO,
            max: ctx.surface_size,
        });
    }

    /// Lädt das Bild als Textur hoch und ersetzt eine vorherige.
    ///
    /// Zu große Bilder werden auf die maximale Texturgröße des Backends verkleinert.
    pub fn set_background(&mut self, egui_ctx: &egui::Context, image: &BackgroundImage) {
        let (width, height) = image.dimensions();
        let max_side = egui_ctx.input(|i| i.max_texture_side);
        log::debug!(
            "Lade Hintergrund-Textur hoch: {}x{} Pixel (max. Seite {})",
            width,
            height,
            max_side
        );
        self.texture = Some(egui_ctx.load_texture(
            "background-image",
            to_color_image(image, max_side),
            egui::TextureOptions::LINEAR,
        ));
    }

    /// Entfernt die Textur.
    pub fn clear_background(&mut self) {
        self.texture = None;
    }

    /// ID der aktuellen Textur, falls hochgeladen.
    pub fn texture_id(&self) -> Option<egui::TextureId> {
        self.texture.as_ref().map(|t| t.id())
    }
}
