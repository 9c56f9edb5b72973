//! Triangle Angle Overlay.
//!
//! Drei verschiebbare Punkte über einem optionalen Hintergrundbild,
//! mit Live-Anzeige der Innenwinkel des aufgespannten Dreiecks.

use eframe::egui;
use std::time::Duration;
use triangle_angle_overlay::{render, ui, AppController, AppIntent, AppState, OverlayOptions};

/// Abfrageintervall, solange Hintergrundbilder dekodiert werden.
const DECODE_POLL_INTERVAL: Duration = Duration::from_millis(50);

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!(
            "Triangle Angle Overlay v{} startet...",
            env!("CARGO_PKG_VERSION")
        );

        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = OverlayOptions::config_path();
        let overlay_options = OverlayOptions::load_from_file(&config_path);

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size(overlay_options.window_size)
                .with_title("Triangle Angle Overlay"),
            ..Default::default()
        };

        eframe::run_native(
            "Triangle Angle Overlay",
            options,
            Box::new(|_cc| Ok(Box::new(OverlayApp::new(overlay_options)))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct OverlayApp {
    state: AppState,
    controller: AppController,
    renderer: render::Renderer,
    input: ui::InputState,
}

impl OverlayApp {
    fn new(options: OverlayOptions) -> Self {
        Self {
            state: AppState::with_options(options),
            controller: AppController::new(),
            renderer: render::Renderer::new(),
            input: ui::InputState::new(),
        }
    }
}

impl eframe::App for OverlayApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let decoded = self.collect_decode_events();
        self.process_events(decoded);

        let events = self.collect_panel_events(ctx);
        self.process_events(events);

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let (events, rect) = ui::allocate_canvas(ui, &mut self.input);
                self.process_events(events);
                self.sync_background_upload(ctx);

                let scene = self.controller.build_render_scene(&self.state);
                let frame = render::render(&scene);
                ui::paint_canvas(ui, rect, &self.renderer, &frame);
            });

        self.maybe_request_repaint(ctx);
    }
}

impl OverlayApp {
    fn collect_decode_events(&self) -> Vec<AppIntent> {
        self.state
            .background_loader
            .drain_completions()
            .into_iter()
            .map(|completion| AppIntent::BackgroundDecoded { completion })
            .collect()
    }

    fn collect_panel_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        ui::render_status_bar(ctx, &self.state);
        events.extend(ui::render_menu(ctx, &self.state));
        events.extend(ui::render_properties_panel(ctx, &self.state));
        events.extend(ui::handle_file_dialogs(&mut self.state.ui));

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
                self.state.ui.set_status(format!("{:#}", e));
            }
        }
    }

    fn sync_background_upload(&mut self, ctx: &egui::Context) {
        if !self.state.view.background_dirty {
            return;
        }
        self.state.view.background_dirty = false;

        if let Some(background) = self.state.scene.background.as_deref() {
            self.renderer.set_background(ctx, background);
            log::info!("Hintergrundbild in Renderer hochgeladen");
        } else {
            self.renderer.clear_background();
            log::info!("Hintergrundbild aus Renderer entfernt");
        }
    }

    fn maybe_request_repaint(&mut self, ctx: &egui::Context) {
        if self.state.view.take_redraw_request() || self.state.should_exit {
            ctx.request_repaint();
        }
        if self.state.background_loader.in_flight() > 0 {
            ctx.request_repaint_after(DECODE_POLL_INTERVAL);
        }
    }
}
