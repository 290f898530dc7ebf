//! Handler für Undo/Redo: tauschen den aktuellen Pose-Stand gegen einen
//! Snapshot aus dem Verlauf. Beide sind an den Verlaufsgrenzen No-Ops.

use crate::app::history::Snapshot;
use crate::app::AppState;

/// Stellt den vorherigen Pose-Stand wieder her, falls vorhanden.
pub fn undo(state: &mut AppState) {
    let current = Snapshot::from_state(state);
    if let Some(prev) = state.history.pop_undo_with_current(current) {
        prev.apply_to(state);
        log::info!("Undo: vorheriger Pose-Stand wiederhergestellt");
    } else {
        log::debug!("Undo ohne Verlauf: nichts zu tun");
    }
}

/// Stellt einen zurückgenommenen Pose-Stand wieder her, falls vorhanden.
pub fn redo(state: &mut AppState) {
    let current = Snapshot::from_state(state);
    if let Some(next) = state.history.pop_redo_with_current(current) {
        next.apply_to(state);
        log::info!("Redo: Pose-Stand erneut angewendet");
    } else {
        log::debug!("Redo ohne Verlauf: nichts zu tun");
    }
}
