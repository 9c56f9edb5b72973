//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::RenderScene;

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Pointer & Drag ===
            AppCommand::BeginDrag { pos } => handlers::pointer::begin_drag(state, pos),
            AppCommand::DragTo { pos } => handlers::pointer::drag_to(state, pos),
            AppCommand::EndDrag => handlers::pointer::end_drag(state),

            // === Szene ===
            AppCommand::SetSurfaceSize { size } => handlers::scene::set_surface_size(state, size),
            AppCommand::SetLineStyle { thickness, color } => {
                handlers::scene::set_line_style(state, thickness, color)
            }
            AppCommand::SetPointColor { point, color } => {
                handlers::scene::set_point_color(state, point, color)
            }
            AppCommand::SetPointCoordinate { point, axis, value } => {
                handlers::scene::set_point_coordinate(state, point, axis, value)
            }
            AppCommand::SaveLineStyleAsDefault => {
                handlers::scene::save_line_style_as_default(state)?
            }

            // === Hintergrundbild ===
            AppCommand::LoadBackgroundImage { path } => handlers::background::load(state, path),
            AppCommand::ApplyDecodedBackground { completion } => {
                handlers::background::apply_decoded(state, completion)
            }

            // === Dialoge & Anwendungssteuerung ===
            AppCommand::RequestBackgroundDialog => {
                handlers::dialog::request_background_dialog(state)
            }
            AppCommand::RequestExit => handlers::dialog::request_exit(state),
        }

        Ok(())
    }

    /// Baut die Render-Szene aus dem aktuellen AppState.
    pub fn build_render_scene(&self, state: &AppState) -> RenderScene {
        render_scene::build(state)
    }
}
