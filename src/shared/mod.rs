//! Gemeinsame Konstanten und Laufzeit-Optionen.

pub mod options;

pub use options::{DragMode, EditorOptions};
pub use options::{
    DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH, GEOMETRY_EPSILON, HISTORY_MAX_DEPTH,
};
