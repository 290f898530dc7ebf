//! Intent-Typen: was das UI vom Kern will.

use crate::app::use_cases::MirrorDirection;
use crate::core::KeypointId;
use crate::shared::DragMode;
use glam::Vec2;

/// Eine vom UI ausgelöste Absicht.
///
/// Kontinuierliche Gesten kommen als Started/Moved/Updated-Folgen an;
/// jedes Event wird synchron und vollständig verarbeitet, bevor das
/// nächste eintrifft.
#[derive(Debug, Clone, PartialEq)]
pub enum AppIntent {
    /// Drag eines Gelenks beginnt (Maus-Down auf einem Gelenk)
    DragStarted(KeypointId),
    /// Drag-Bewegung: Zielposition ist bereits Canvas-geklammert
    DragMoved(KeypointId, Vec2),
    /// Sichtbarkeit eines Gelenks umschalten
    VisibilityToggleRequested(KeypointId),
    /// Limb-Sperre eines Gelenkpaars umschalten
    LimbLockToggleRequested(KeypointId, KeypointId),
    /// Alle Limb-Sperren entfernen
    UnlockAllRequested,
    /// Drag-Modus wechseln
    DragModeChanged(DragMode),
    /// Transform-Gesture beginnt (Scale- oder Spin-Slider gedrückt)
    TransformStarted,
    /// Scale-Update relativ zur Gesture-Basis
    ScaleUpdated(f32),
    /// Spin-Update: Winkel in Grad + Breitenfaktor, relativ zur Basis
    SpinUpdated {
        /// Rotationswinkel in Grad
        angle_degrees: f32,
        /// Stauchung der x-Offsets (Perspektiv-Breite)
        width_factor: f32,
    },
    /// Transform-Gesture beendet (Slider losgelassen)
    TransformEnded,
    /// Horizontal spiegeln
    FlipHorizontalRequested,
    /// Vertikal spiegeln
    FlipVerticalRequested,
    /// Körperseite spiegeln
    MirrorRequested(MirrorDirection),
    /// Undo-Schritt
    UndoRequested,
    /// Redo-Schritt
    RedoRequested,
    /// Pose auf Default zurücksetzen
    ResetRequested,
    /// Pose aus JSON importieren
    ImportRequested(String),
    /// Erkennungs-Aufruf startet (Snapshot spekulativ aufzeichnen)
    DetectionStarted,
    /// Erkennungs-Ergebnis liegt vor (18 Punkte oder Fehlschlag)
    DetectionCompleted(Vec<Vec2>),
}
