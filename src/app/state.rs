//! Hauptzustand der Editor-Session.

use crate::app::history::{EditHistory, Snapshot};
use crate::app::use_cases::transform::TransformGesture;
use crate::core::Pose;
use crate::shared::{DragMode, EditorOptions};
use glam::Vec2;
use std::sync::Arc;

/// Hauptzustand der Anwendung.
///
/// Es gibt genau einen logischen Schreiber: jede Operation läuft synchron
/// auf einem Event bis zum Ende durch, bevor das nächste verarbeitet wird.
pub struct AppState {
    /// Aktuelle Pose (COW hinter Arc, siehe `history::Snapshot`)
    pub pose: Arc<Pose>,
    /// Undo/Redo-History (Snapshot-basiert)
    pub history: EditHistory,
    /// Globaler Drag-Modus
    pub drag_mode: DragMode,
    /// Laufender Transform-Gesture (Idle außerhalb von Start..End)
    pub gesture: TransformGesture,
    /// Laufzeit-Optionen (Canvas-Größe, History-Tiefe)
    pub options: EditorOptions,
}

impl AppState {
    /// Erstellt einen neuen App-State mit Default-Optionen und Default-Pose
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt einen App-State aus gegebenen Optionen
    pub fn with_options(options: EditorOptions) -> Self {
        Self {
            pose: Arc::new(Pose::new(options.canvas_width, options.canvas_height)),
            history: EditHistory::new_with_capacity(options.history_depth),
            drag_mode: options.drag_mode,
            gesture: TransformGesture::Idle,
            options,
        }
    }

    /// Canvas-Breite in Pixeln
    pub fn canvas_width(&self) -> f32 {
        self.options.canvas_width
    }

    /// Canvas-Höhe in Pixeln
    pub fn canvas_height(&self) -> f32 {
        self.options.canvas_height
    }

    /// Canvas-Mittelpunkt (Pivot-Fallback)
    pub fn canvas_center(&self) -> Vec2 {
        Vec2::new(self.options.canvas_width * 0.5, self.options.canvas_height * 0.5)
    }

    /// Gibt zurück, ob ein Undo-Schritt verfügbar ist.
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Gibt zurück, ob ein Redo-Schritt verfügbar ist.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Erstellt einen Undo-Snapshot des aktuellen Zustands.
    /// Reduziert Boilerplate in mutierenden Use-Cases.
    pub fn record_undo_snapshot(&mut self) {
        let snap = Snapshot::from_state(self);
        self.history.record_snapshot(snap);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
