//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::PointerPressed { pos } => vec![AppCommand::BeginDrag { pos }],
        AppIntent::PointerMoved { pos } => {
            // Bewegungen ohne aktiven Drag ändern nichts und lösen keinen Redraw aus
            if state.drag.active_point().is_some() {
                vec![AppCommand::DragTo { pos }]
            } else {
                vec![]
            }
        }
        AppIntent::PointerReleased | AppIntent::PointerLeft => {
            if state.drag.active_point().is_some() {
                vec![AppCommand::EndDrag]
            } else {
                vec![]
            }
        }
        AppIntent::SurfaceResized { size } => vec![AppCommand::SetSurfaceSize { size }],
        AppIntent::LineThicknessChanged { thickness } => vec![AppCommand::SetLineStyle {
            thickness,
            color: state.scene.line_color,
        }],
        AppIntent::LineColorChanged { color } => vec![AppCommand::SetLineStyle {
            thickness: state.scene.line_thickness,
            color,
        }],
        AppIntent::PointColorChanged { point, color } => {
            vec![AppCommand::SetPointColor { point, color }]
        }
        AppIntent::PointCoordinateEdited { point, axis, value } => {
            vec![AppCommand::SetPointCoordinate { point, axis, value }]
        }
        AppIntent::BackgroundSelectionRequested => vec![AppCommand::RequestBackgroundDialog],
        AppIntent::BackgroundFileSelected { path } => {
            vec![AppCommand::LoadBackgroundImage { path }]
        }
        AppIntent::BackgroundDecoded { completion } => {
            vec![AppCommand::ApplyDecodedBackground { completion }]
        }
        AppIntent::SaveLineStyleAsDefaultRequested => vec![AppCommand::SaveLineStyleAsDefault],
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
    }
}
