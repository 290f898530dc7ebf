//! Use-Case: Limb-Längen sperren und entsperren (Distanz-Constraints).

use crate::app::AppState;
use crate::core::KeypointId;
use std::sync::Arc;

/// Schaltet den Distanz-Constraint eines Gelenkpaars um.
///
/// Beim Sperren wird die aktuelle Distanz als Soll-Wert eingefroren; beim
/// Entsperren wird der Eintrag entfernt. Das UI bietet nur Limb-Paare an,
/// der Engine selbst erzwingt die Limb-Adjazenz nicht.
pub fn toggle_limb_lock(state: &mut AppState, p1: KeypointId, p2: KeypointId) {
    if p1 == p2 {
        log::warn!("Limb-Lock auf Selbst-Paar ({}) ignoriert", p1);
        return;
    }
    if state.pose.keypoint(p1).is_none() || state.pose.keypoint(p2).is_none() {
        log::warn!("Limb-Lock: Gelenk {} oder {} existiert nicht", p1, p2);
        return;
    }

    state.record_undo_snapshot();
    let pose = Arc::make_mut(&mut state.pose);
    if pose.constraints.contains(p1, p2) {
        pose.constraints.remove(p1, p2);
        log::info!("Limb {}–{} entsperrt", p1, p2);
    } else {
        pose.lock_limb_distance(p1, p2);
        log::info!(
            "Limb {}–{} gesperrt (Distanz {:.2})",
            p1,
            p2,
            pose.constraints.get(p1, p2).unwrap_or(0.0)
        );
    }
}

/// Entfernt alle Constraints als einen Undo-Schritt.
pub fn unlock_all(state: &mut AppState) {
    if state.pose.constraints.is_empty() {
        return;
    }
    state.record_undo_snapshot();
    Arc::make_mut(&mut state.pose).constraints.clear();
    log::info!("Alle Limb-Sperren entfernt");
}
