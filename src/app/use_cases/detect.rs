//! Use-Case: Ergebnis der externen Pose-Erkennung übernehmen.
//!
//! Der eigentliche Erkennungs-Aufruf (Bild → 18 Punkte) ist ein externer
//! Kollaborateur; der Kern übernimmt nur das Ergebnis. Der History-Snapshot
//! wird spekulativ vor dem Aufruf aufgezeichnet (`begin_detection`); ein
//! Fehlschlag rollt ihn nicht zurück — der entstehende No-Op-Undo-Schritt
//! ist dokumentiertes Verhalten.

use crate::app::AppState;
use crate::core::JOINT_COUNT;
use glam::Vec2;
use std::sync::Arc;

/// Zeichnet den Snapshot auf, bevor der Erkennungs-Aufruf startet.
pub fn begin_detection(state: &mut AppState) {
    state.record_undo_snapshot();
    log::debug!("Pose-Erkennung gestartet (Snapshot aufgezeichnet)");
}

/// Übernimmt ein Erkennungs-Ergebnis in die Pose.
///
/// Alles außer exakt 18 Punkten gilt als Fehlschlag: Pose bleibt unverändert,
/// Rückgabe false (das UI meldet den Fehlschlag). Bei Erfolg werden alle
/// Positionen gesetzt, alle Gelenke sichtbar und die Constraints verworfen
/// (alte Soll-Distanzen passen nicht zur erkannten Geometrie).
pub fn apply_detection(state: &mut AppState, points: &[Vec2]) -> bool {
    if points.len() != JOINT_COUNT {
        log::warn!(
            "Pose-Erkennung fehlgeschlagen: {} statt {} Punkte",
            points.len(),
            JOINT_COUNT
        );
        return false;
    }

    let pose = Arc::make_mut(&mut state.pose);
    for (kp, &point) in pose.keypoints.iter_mut().zip(points.iter()) {
        kp.position = point;
        kp.visible = true;
    }
    pose.constraints.clear();
    log::info!("Pose-Erkennung übernommen ({} Punkte)", JOINT_COUNT);
    true
}
