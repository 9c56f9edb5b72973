//! UI-Komponenten: Menü, Properties, Canvas, Input-Handling, Dialoge.

pub mod canvas;
pub mod dialogs;
pub mod input;
/// UI-Layer mit egui
///
/// Dieses Modul implementiert alle UI-Komponenten (Menüs, Panels, Dialogs).
pub mod menu;
pub mod properties;
pub mod status;

pub use canvas::{allocate_canvas, paint_canvas};
pub use dialogs::handle_file_dialogs;
pub use input::{InputState, PointerSample};
pub use menu::render_menu;
pub use properties::render_properties_panel;
pub use status::render_status_bar;
