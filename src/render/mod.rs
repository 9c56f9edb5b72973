//! Rendering: RenderScene → RenderFrame → egui-Painter.
//!
//! `render` ist rein und damit ohne GPU testbar; `Renderer` hält nur die
//! hochgeladene Hintergrund-Textur und malt einen fertigen Frame.

mod background_renderer;
mod point_renderer;
mod texture;
mod triangle_renderer;
mod types;

pub use crate::shared::RenderScene;
pub use background_renderer::BackgroundRenderer;
pub use texture::{from_color32, to_color32, to_color_image};
pub use types::{DrawCommand, RenderFrame, CLEAR_COLOR};
use types::RenderContext;

use crate::core::BackgroundImage;
use glam::Vec2;

/// Baut den vollständigen Frame einer Szene.
///
/// Reihenfolge: Fläche leeren, Hintergrund, Kontur, Winkel-Labels, Marker.
/// Gleiche Szene ergibt immer den gleichen Frame.
pub fn render(scene: &RenderScene) -> RenderFrame {
    let ctx = RenderContext {
        scene,
        surface_size: Vec2::from(scene.surface_size),
    };
    let mut frame = RenderFrame::with_capacity(9);

    frame.push(DrawCommand::Clear {
        size: ctx.surface_size,
        color: CLEAR_COLOR,
    });
    BackgroundRenderer::push_commands(&ctx, &mut frame);
    triangle_renderer::push_outline(&ctx, &mut frame);
    triangle_renderer::push_labels(&ctx, &mut frame);
    point_renderer::push_markers(&ctx, &mut frame);

    frame
}

/// Malt Render-Frames mit dem egui-Painter.
#[derive(Default)]
pub struct Renderer {
    background_renderer: BackgroundRenderer,
}

impl Renderer {
    /// Erstellt einen neuen Renderer ohne Hintergrund-Textur.
    pub fn new() -> Self {
        Self {
            background_renderer: BackgroundRenderer::new(),
        }
    }

    /// Setzt das Hintergrundbild (Textur-Upload).
    pub fn set_background(&mut self, egui_ctx: &egui::Context, image: &BackgroundImage) {
        self.background_renderer.set_background(egui_ctx, image);
    }

    /// Entfernt das Hintergrundbild.
    pub fn clear_background(&mut self) {
        self.background_renderer.clear_background();
    }

    /// Malt alle Primitive des Frames in `rect` (Surface-Ursprung = `rect.min`).
    pub fn paint(&self, painter: &egui::Painter, rect: egui::Rect, frame: &RenderFrame) {
        let to_screen = |p: Vec2| rect.min + egui::vec2(p.x, p.y);

        for command in &frame.commands {
            match command {
                DrawCommand::Clear { size, color } => {
                    let area = egui::Rect::from_min_max(rect.min, to_screen(*size));
                    painter.rect_filled(area, 0.0, to_color32(*color));
                }
                DrawCommand::Image { min, max, .. } => {
                    let Some(texture_id) = self.background_renderer.texture_id() else {
                        log::trace!("Hintergrund-Textur noch nicht hochgeladen");
                        continue;
                    };
                    let uv = egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
                    painter.image(
                        texture_id,
                        egui::Rect::from_min_max(to_screen(*min), to_screen(*max)),
                        uv,
                        egui::Color32::WHITE,
                    );
                }
                DrawCommand::ClosedPath {
                    points,
                    width,
                    color,
                } => {
                    let screen_points = points.iter().map(|p| to_screen(*p)).collect();
                    painter.add(egui::Shape::closed_line(
                        screen_points,
                        egui::Stroke::new(*width, to_color32(*color)),
                    ));
                }
                DrawCommand::Text {
                    anchor,
                    text,
                    font_size,
                    color,
                } => {
                    painter.text(
                        to_screen(*anchor),
                        egui::Align2::LEFT_BOTTOM,
                        text,
                        egui::FontId::proportional(*font_size),
                        to_color32(*color),
                    );
                }
                DrawCommand::Disc {
                    center,
                    radius,
                    color,
                } => {
                    painter.circle_filled(to_screen(*center), *radius, to_color32(*color));
                }
            }
        }
    }
}
