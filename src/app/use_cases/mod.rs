//! Use-Cases der Application-Layer-Orchestrierung.

pub mod background_image;
pub mod drag;
pub mod line_style;
pub mod options;
pub mod points;
pub mod viewport;
