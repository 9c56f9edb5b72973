use crate::app::background_loader::BackgroundLoader;
use crate::app::drag_controller::DragController;
use crate::app::CommandLog;
use crate::shared::OverlayOptions;

use super::{SceneState, UiState, ViewState};

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Punkte, Hintergrundbild und Linienstil
    pub scene: SceneState,
    /// View-State
    pub view: ViewState,
    /// UI-State
    pub ui: UiState,
    /// Drag-Zustandsmaschine (einzige Quelle für den aktiven Punkt)
    pub drag: DragController,
    /// Asynchroner Hintergrundbild-Loader mit Request-Sequenznummern
    pub background_loader: BackgroundLoader,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Beim Start geladene Optionen (Radien, Label-Layout, Standardstil)
    pub options: OverlayOptions,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen neuen App-State mit Standardoptionen
    pub fn new() -> Self {
        Self::with_options(OverlayOptions::default())
    }

    /// Erstellt einen App-State aus geladenen Optionen.
    pub fn with_options(options: OverlayOptions) -> Self {
        let scene = SceneState::from_options(&options);
        let ui = UiState::new(&scene.points);
        Self {
            scene,
            view: ViewState::new(),
            ui,
            drag: DragController::new(),
            background_loader: BackgroundLoader::new(),
            command_log: CommandLog::new(),
            options,
            should_exit: false,
        }
    }

    /// Gibt zurück, ob gerade ein Punkt gezogen wird (für UI-Anzeige)
    pub fn is_dragging(&self) -> bool {
        self.drag.active_point().is_some()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
