//! Linearer Undo/Redo-Verlauf über vollständige Pose-Snapshots.

use crate::core::Pose;
use std::sync::Arc;

/// Snapshot der für Undo/Redo relevanten Teile (Keypoints + Constraints).
///
/// Nutzt Arc-Clone (Copy-on-Write): Das Erstellen eines Snapshots ist O(1) —
/// der Pose-Klon findet erst beim nächsten `Arc::make_mut()` in einem
/// Use-Case statt (COW-Semantik).
#[derive(Clone)]
pub struct Snapshot {
    /// Pose zum Zeitpunkt des Snapshots (Arc-Klon für O(1)-Snapshot)
    pub pose: Arc<Pose>,
}

impl Snapshot {
    /// Erstellt einen O(1)-Snapshot durch Arc-Clone statt Deep-Clone.
    pub fn from_state(state: &crate::app::AppState) -> Self {
        Self {
            pose: state.pose.clone(),
        }
    }

    /// Stellt den Snapshot wieder her (O(1) Arc-Zuweisung).
    pub fn apply_to(self, state: &mut crate::app::AppState) {
        state.pose = self.pose;
    }
}

/// Einfacher Undo/Redo-Manager mit Snapshotting.
#[derive(Default)]
pub struct EditHistory {
    undo_stack: Vec<Snapshot>,
    redo_stack: Vec<Snapshot>,
    max_depth: usize,
}

impl EditHistory {
    /// Erstellt einen neuen History-Manager mit maximaler Tiefe.
    pub fn new_with_capacity(max_depth: usize) -> Self {
        Self {
            undo_stack: Vec::with_capacity(max_depth),
            redo_stack: Vec::with_capacity(max_depth),
            max_depth,
        }
    }

    /// Zeichnet einen Prä-Mutations-Snapshot auf und invalidiert Redo.
    ///
    /// Wird einmal pro Geste aufgerufen (Drag-Beginn, vor Toggle, vor
    /// Transform-Start) — nie pro Move-Event, damit ein ganzer Drag ein
    /// einzelner Undo-Schritt bleibt.
    ///
    /// Tiefe 0 (z.B. aus einer Options-Datei) deaktiviert die History:
    /// es wird nichts aufgezeichnet, Redo wird trotzdem invalidiert.
    pub fn record_snapshot(&mut self, snap: Snapshot) {
        self.redo_stack.clear();
        if self.max_depth == 0 {
            return;
        }
        if self.undo_stack.len() >= self.max_depth {
            self.undo_stack.remove(0);
        }
        self.undo_stack.push(snap);
    }

    /// Prüft ob Undo möglich ist.
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Prüft ob Redo möglich ist.
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Pop undo stack and push `current` onto redo stack; returns the snapshot to apply.
    pub fn pop_undo_with_current(&mut self, current: Snapshot) -> Option<Snapshot> {
        if let Some(prev) = self.undo_stack.pop() {
            if self.redo_stack.len() >= self.max_depth {
                self.redo_stack.remove(0);
            }
            self.redo_stack.push(current);
            Some(prev)
        } else {
            None
        }
    }

    /// Pop redo stack and push `current` onto undo stack; returns the snapshot to apply.
    pub fn pop_redo_with_current(&mut self, current: Snapshot) -> Option<Snapshot> {
        if let Some(next) = self.redo_stack.pop() {
            if self.undo_stack.len() >= self.max_depth {
                self.undo_stack.remove(0);
            }
            self.undo_stack.push(current);
            Some(next)
        } else {
            None
        }
    }
}
