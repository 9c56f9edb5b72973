use approx::assert_abs_diff_eq;
use glam::Vec2;
use triangle_angle_overlay::app::DragState;
use triangle_angle_overlay::core::{Axis, ANGLE_PLACEHOLDER};
use triangle_angle_overlay::{
    render, AppCommand, AppController, AppIntent, AppState, DrawCommand, PointId,
};

fn surface_state() -> (AppController, AppState) {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    controller
        .handle_intent(
            &mut state,
            AppIntent::SurfaceResized {
                size: [800.0, 600.0],
            },
        )
        .expect("SurfaceResized sollte ohne Fehler durchlaufen");
    (controller, state)
}

fn send(controller: &mut AppController, state: &mut AppState, intent: AppIntent) {
    controller
        .handle_intent(state, intent)
        .expect("Intent sollte ohne Fehler durchlaufen");
}

#[test]
fn test_default_triangle_shows_45_90_45() {
    let (_, state) = surface_state();
    let angles = state.scene.points.angles();

    assert_abs_diff_eq!(angles.at(PointId::Dot1).expect("dot1"), 45.0, epsilon = 0.1);
    assert_abs_diff_eq!(angles.at(PointId::Dot2).expect("dot2"), 90.0, epsilon = 0.1);
    assert_abs_diff_eq!(angles.at(PointId::Dot3).expect("dot3"), 45.0, epsilon = 0.1);
}

#[test]
fn test_drag_flow_moves_point_and_redraws_per_move() {
    let (mut controller, mut state) = surface_state();
    let redraws_before = state.view.redraw_count;

    send(
        &mut controller,
        &mut state,
        AppIntent::PointerPressed {
            pos: Vec2::new(200.0, 200.0),
        },
    );
    assert_eq!(state.drag.state(), DragState::Dragging(PointId::Dot2));
    assert_eq!(state.view.redraw_count, redraws_before);

    for pos in [Vec2::new(220.0, 180.0), Vec2::new(250.0, 150.0)] {
        send(&mut controller, &mut state, AppIntent::PointerMoved { pos });
    }
    assert_eq!(state.view.redraw_count, redraws_before + 2);
    assert_eq!(state.ui.coordinate_field(PointId::Dot2), [250.0, 150.0]);

    send(&mut controller, &mut state, AppIntent::PointerReleased);

    assert_eq!(state.drag.state(), DragState::Idle);
    assert_eq!(
        state.scene.points.get(PointId::Dot2).position,
        Vec2::new(250.0, 150.0)
    );
    assert_eq!(state.scene.points.dragging_count(), 0);
}

#[test]
fn test_dragged_marker_is_rendered_at_pointer() {
    let (mut controller, mut state) = surface_state();

    send(
        &mut controller,
        &mut state,
        AppIntent::PointerPressed {
            pos: Vec2::new(300.0, 100.0),
        },
    );
    send(
        &mut controller,
        &mut state,
        AppIntent::PointerMoved {
            pos: Vec2::new(412.5, 37.25),
        },
    );

    let frame = render(&controller.build_render_scene(&state));
    let centers: Vec<Vec2> = frame.discs().map(|(center, _, _)| *center).collect();

    assert_eq!(centers[2], Vec2::new(412.5, 37.25));
}

#[test]
fn test_moves_while_idle_change_nothing() {
    let (mut controller, mut state) = surface_state();
    let before = state.scene.points.clone();
    let redraws_before = state.view.redraw_count;
    let log_before = state.command_log.len();

    send(
        &mut controller,
        &mut state,
        AppIntent::PointerMoved {
            pos: Vec2::new(10.0, 10.0),
        },
    );
    send(&mut controller, &mut state, AppIntent::PointerReleased);

    assert_eq!(state.scene.points, before);
    assert_eq!(state.view.redraw_count, redraws_before);
    assert_eq!(state.command_log.len(), log_before);
}

#[test]
fn test_press_while_dragging_keeps_first_point() {
    let (mut controller, mut state) = surface_state();

    send(
        &mut controller,
        &mut state,
        AppIntent::PointerPressed {
            pos: Vec2::new(100.0, 100.0),
        },
    );
    send(
        &mut controller,
        &mut state,
        AppIntent::PointerPressed {
            pos: Vec2::new(300.0, 100.0),
        },
    );

    assert_eq!(state.drag.active_point(), Some(PointId::Dot1));
    assert!(!state.scene.points.get(PointId::Dot3).dragging);
}

#[test]
fn test_pointer_leaving_surface_ends_drag() {
    let (mut controller, mut state) = surface_state();

    send(
        &mut controller,
        &mut state,
        AppIntent::PointerPressed {
            pos: Vec2::new(100.0, 100.0),
        },
    );
    send(
        &mut controller,
        &mut state,
        AppIntent::PointerMoved {
            pos: Vec2::new(5.0, 5.0),
        },
    );
    send(&mut controller, &mut state, AppIntent::PointerLeft);

    assert!(!state.is_dragging());
    assert_eq!(
        state.scene.points.get(PointId::Dot1).position,
        Vec2::new(5.0, 5.0)
    );

    // Weitere Bewegungen nach dem Verlassen bewegen nichts mehr
    send(
        &mut controller,
        &mut state,
        AppIntent::PointerMoved {
            pos: Vec2::new(50.0, 50.0),
        },
    );
    assert_eq!(
        state.scene.points.get(PointId::Dot1).position,
        Vec2::new(5.0, 5.0)
    );
}

#[test]
fn test_line_style_is_used_by_outline() {
    let (mut controller, mut state) = surface_state();
    let color = [0.0, 0.6, 0.2, 1.0];

    send(
        &mut controller,
        &mut state,
        AppIntent::LineThicknessChanged { thickness: 5.0 },
    );
    send(
        &mut controller,
        &mut state,
        AppIntent::LineColorChanged { color },
    );

    let frame = render(&controller.build_render_scene(&state));
    let outline = frame
        .commands
        .iter()
        .find_map(|command| match command {
            DrawCommand::ClosedPath { width, color, .. } => Some((*width, *color)),
            _ => None,
        })
        .expect("Kontur erwartet");

    assert_eq!(outline, (5.0, color));
    // Labels übernehmen die Linienfarbe
    assert!(frame.commands.iter().all(|command| match command {
        DrawCommand::Text { color: c, .. } => *c == color,
        _ => true,
    }));
}

#[test]
fn test_invalid_thickness_is_rejected_without_redraw() {
    let (mut controller, mut state) = surface_state();
    let redraws_before = state.view.redraw_count;

    send(
        &mut controller,
        &mut state,
        AppIntent::LineThicknessChanged { thickness: 0.0 },
    );
    send(
        &mut controller,
        &mut state,
        AppIntent::LineThicknessChanged { thickness: -3.0 },
    );

    assert_eq!(state.scene.line_thickness, 1.0);
    assert_eq!(state.view.redraw_count, redraws_before);
    assert!(state.ui.status_message.is_some());
}

#[test]
fn test_coordinate_edit_and_point_color() {
    let (mut controller, mut state) = surface_state();

    send(
        &mut controller,
        &mut state,
        AppIntent::PointCoordinateEdited {
            point: PointId::Dot3,
            axis: Axis::Y,
            value: 300.0,
        },
    );
    send(
        &mut controller,
        &mut state,
        AppIntent::PointColorChanged {
            point: PointId::Dot3,
            color: [0.0, 1.0, 0.0, 1.0],
        },
    );

    let dot3 = state.scene.points.get(PointId::Dot3);
    assert_eq!(dot3.position, Vec2::new(300.0, 300.0));
    assert_eq!(dot3.color, [0.0, 1.0, 0.0, 1.0]);
    assert_eq!(state.ui.coordinate_field(PointId::Dot3), [300.0, 300.0]);
}

#[test]
fn test_degenerate_triangle_renders_placeholder_without_error() {
    let (mut controller, mut state) = surface_state();

    for axis in [Axis::X, Axis::Y] {
        send(
            &mut controller,
            &mut state,
            AppIntent::PointCoordinateEdited {
                point: PointId::Dot1,
                axis,
                value: 200.0,
            },
        );
    }

    let frame = render(&controller.build_render_scene(&state));
    let labels: Vec<&str> = frame.texts().map(|(_, text)| text).collect();

    assert_eq!(labels.len(), 3);
    assert_eq!(labels[0], ANGLE_PLACEHOLDER);
    assert_eq!(labels[1], ANGLE_PLACEHOLDER);
}

#[test]
fn test_resize_redraws_and_stores_surface_size() {
    let (mut controller, mut state) = surface_state();
    let redraws_before = state.view.redraw_count;

    send(
        &mut controller,
        &mut state,
        AppIntent::SurfaceResized {
            size: [1024.0, 768.0],
        },
    );

    assert_eq!(state.view.surface_size, [1024.0, 768.0]);
    assert_eq!(state.view.redraw_count, redraws_before + 1);
    let frame = render(&controller.build_render_scene(&state));
    assert!(matches!(
        frame.commands[0],
        DrawCommand::Clear { size, .. } if size == Vec2::new(1024.0, 768.0)
    ));
}

#[test]
fn test_exit_requested_sets_exit_flag_and_logs_command() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    assert!(!state.should_exit);

    controller
        .handle_intent(&mut state, AppIntent::ExitRequested)
        .expect("ExitRequested sollte ohne Fehler durchlaufen");

    assert!(state.should_exit);

    let last = state
        .command_log
        .last_command()
        .expect("Es sollte ein Command geloggt sein");

    match last {
        AppCommand::RequestExit => {}
        other => panic!("Unerwarteter letzter Command: {other:?}"),
    }
}

#[test]
fn test_background_selection_opens_dialog_flag() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(&mut state, AppIntent::BackgroundSelectionRequested)
        .expect("BackgroundSelectionRequested sollte ohne Fehler durchlaufen");

    assert!(state.ui.show_background_dialog);
    assert!(matches!(
        state.command_log.last_command(),
        Some(AppCommand::RequestBackgroundDialog)
    ));
}
