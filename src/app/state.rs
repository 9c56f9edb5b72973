//! Application State: zentrale Datenhaltung.
//!
//! Aufgeteilt in Szene (Punkte, Hintergrund, Linienstil), View
//! (Surface-Größe, Redraw-Zähler) und UI (Dialoge, Koordinatenfelder).

mod app_state;
mod scene;
mod ui;
mod view;

pub use app_state::AppState;
pub use scene::{LineStyleError, SceneState};
pub use ui::UiState;
pub use view::ViewState;
