//! Application-Layer: Controller, State, Events und Use-Cases.

pub mod background_loader;
pub mod command_log;
pub mod controller;
pub mod drag_controller;
pub mod events;
pub mod handlers;
mod intent_mapping;
pub mod render_scene;
/// Application State
///
/// Dieses Modul verwaltet den Zustand der Anwendung (Szene, View, UI).
pub mod state;
pub mod use_cases;

pub use background_loader::{BackgroundLoader, DecodeCompletion};
pub use command_log::{CommandLog, LogEntry};
pub use controller::AppController;
pub use drag_controller::{DragController, DragState};
pub use events::{AppCommand, AppIntent};
pub use render_scene::build as build_render_scene;
pub use state::{AppState, LineStyleError, SceneState, UiState, ViewState};
