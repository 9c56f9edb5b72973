//! Integrationstests für das asynchrone Laden von Hintergrundbildern.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Weak};
use std::time::Duration;
use triangle_angle_overlay::{
    render, AppController, AppIntent, AppState, BackgroundImage, DecodeCompletion, DrawCommand,
    LogEntry,
};

const TIMEOUT: Duration = Duration::from_secs(10);

fn write_png(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let path = dir.join(name);
    image::RgbaImage::from_pixel(width, height, image::Rgba([200, 100, 50, 255]))
        .save(&path)
        .expect("PNG speichern");
    path
}

fn select_file(controller: &mut AppController, state: &mut AppState, path: &Path) {
    controller
        .handle_intent(
            state,
            AppIntent::BackgroundFileSelected {
                path: path.to_string_lossy().into_owned(),
            },
        )
        .expect("Dateiauswahl sollte ohne Fehler durchlaufen");
}

fn wait(state: &AppState) -> DecodeCompletion {
    state
        .background_loader
        .wait_for_completion(TIMEOUT)
        .expect("Dekodierung sollte abschließen")
}

fn apply(controller: &mut AppController, state: &mut AppState, completion: DecodeCompletion) {
    controller
        .handle_intent(state, AppIntent::BackgroundDecoded { completion })
        .expect("BackgroundDecoded sollte ohne Fehler durchlaufen");
}

#[test]
fn test_image_is_loaded_and_stretched_to_surface() {
    let dir = tempfile::tempdir().expect("Temp-Verzeichnis");
    let path = write_png(dir.path(), "hintergrund.png", 32, 16);
    let mut controller = AppController::new();
    let mut state = AppState::new();
    state.view.surface_size = [640.0, 480.0];

    select_file(&mut controller, &mut state, &path);
    // Bis zur Completion bleibt der Hintergrund unverändert
    assert!(state.scene.background.is_none());

    let completion = wait(&state);
    apply(&mut controller, &mut state, completion);

    let background = state.scene.background.as_deref().expect("Hintergrund");
    assert_eq!(background.dimensions(), (32, 16));
    assert!(state.view.background_dirty);
    assert_eq!(state.view.redraw_count, 1);

    let frame = render(&controller.build_render_scene(&state));
    assert!(matches!(
        &frame.commands[1],
        DrawCommand::Image { max, .. } if *max == glam::Vec2::new(640.0, 480.0)
    ));
}

#[test]
fn test_non_image_file_is_ignored_without_error() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    select_file(&mut controller, &mut state, Path::new("notizen.txt"));

    assert!(state.scene.background.is_none());
    assert_eq!(state.view.redraw_count, 0);
    assert_eq!(state.background_loader.in_flight(), 0);
}

#[test]
fn test_decode_failure_keeps_previous_background() {
    let dir = tempfile::tempdir().expect("Temp-Verzeichnis");
    let good = write_png(dir.path(), "gut.png", 4, 4);
    let broken = dir.path().join("kaputt.png");
    std::fs::write(&broken, b"das ist kein png").expect("Schreiben");
    let mut controller = AppController::new();
    let mut state = AppState::new();

    select_file(&mut controller, &mut state, &good);
    let completion = wait(&state);
    apply(&mut controller, &mut state, completion);
    let redraws_after_load = state.view.redraw_count;

    select_file(&mut controller, &mut state, &broken);
    let completion = wait(&state);
    assert!(completion.result.is_err());
    apply(&mut controller, &mut state, completion);

    let background = state.scene.background.as_deref().expect("Hintergrund");
    assert_eq!(background.dimensions(), (4, 4));
    assert_eq!(state.view.redraw_count, redraws_after_load);
    assert!(state.ui.status_message.is_some());
}

#[test]
fn test_stale_completion_never_overwrites_newer_request() {
    let dir = tempfile::tempdir().expect("Temp-Verzeichnis");
    let first = write_png(dir.path(), "erst.png", 10, 10);
    let second = write_png(dir.path(), "zweit.png", 20, 20);
    let mut controller = AppController::new();
    let mut state = AppState::new();

    select_file(&mut controller, &mut state, &first);
    select_file(&mut controller, &mut state, &second);

    let mut completions = vec![wait(&state), wait(&state)];
    // Neueste Anfrage zuerst anwenden, dann die veraltete
    completions.sort_by_key(|c| std::cmp::Reverse(c.request_id));
    for completion in completions {
        apply(&mut controller, &mut state, completion);
    }

    let background = state.scene.background.as_deref().expect("Hintergrund");
    assert_eq!(background.dimensions(), (20, 20));
    assert_eq!(state.background_loader.in_flight(), 0);
}

#[test]
fn test_stale_completion_arriving_first_is_discarded() {
    let dir = tempfile::tempdir().expect("Temp-Verzeichnis");
    let first = write_png(dir.path(), "erst.png", 10, 10);
    let second = write_png(dir.path(), "zweit.png", 20, 20);
    let mut controller = AppController::new();
    let mut state = AppState::new();

    select_file(&mut controller, &mut state, &first);
    select_file(&mut controller, &mut state, &second);

    let mut completions = vec![wait(&state), wait(&state)];
    completions.sort_by_key(|c| c.request_id);
    let mut completions = completions.into_iter();

    let stale = completions.next().expect("veraltete Completion");
    apply(&mut controller, &mut state, stale);
    assert!(state.scene.background.is_none());
    assert_eq!(state.view.redraw_count, 0);

    let current = completions.next().expect("aktuelle Completion");
    apply(&mut controller, &mut state, current);
    let background = state.scene.background.as_deref().expect("Hintergrund");
    assert_eq!(background.dimensions(), (20, 20));
}

#[test]
fn test_replaced_backgrounds_are_released() {
    let dir = tempfile::tempdir().expect("Temp-Verzeichnis");
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let mut loaded: Vec<Weak<BackgroundImage>> = Vec::new();

    for (index, name) in ["a.png", "b.png", "c.png"].into_iter().enumerate() {
        let path = write_png(dir.path(), name, 64, 64);
        select_file(&mut controller, &mut state, &path);
        let completion = wait(&state);
        let image = completion.result.as_ref().expect("Dekodierung erfolgreich");
        loaded.push(Arc::downgrade(image));
        apply(&mut controller, &mut state, completion);
        assert_eq!(state.scene.background.as_deref().map(|b| b.dimensions()), Some((64, 64)));
        assert_eq!(loaded.iter().filter(|w| w.upgrade().is_some()).count(), 1, "Bild {index}");
    }

    assert!(loaded[2].upgrade().is_some());
    let decoded = state
        .command_log
        .entries()
        .iter()
        .filter(|entry| matches!(entry, LogEntry::DecodedBackground { succeeded: true, .. }))
        .count();
    assert_eq!(decoded, 3);
}
