//! Triangle Angle Overlay Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod render;
pub mod shared;
pub mod ui;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, BackgroundLoader, DecodeCompletion,
    DragController, DragState, LogEntry, SceneState, UiState, ViewState,
};
pub use core::{
    angle_at_vertex, angle_label, format_angle, BackgroundError, BackgroundImage, GeometryError,
    Point, PointId, TriangleAngles, TrianglePoints,
};
pub use render::{render, DrawCommand, RenderFrame};
pub use shared::{OverlayOptions, RenderScene};
