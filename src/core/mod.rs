//! Core-Domänentypen: Punkte, Dreieck, Winkelgeometrie, Hintergrundbild.

pub mod background_image;
pub mod geometry;
pub mod point;
pub mod triangle;

pub use background_image::{BackgroundError, BackgroundImage};
pub use geometry::{angle_at_vertex, angle_label, format_angle, GeometryError, ANGLE_PLACEHOLDER};
pub use point::{Axis, Point, PointId, Rgba, POINT_COLOR_DEFAULT};
pub use triangle::{TriangleAngles, TrianglePoints};
