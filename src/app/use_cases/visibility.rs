//! Use-Case: Sichtbarkeit eines Gelenks umschalten (mit Hide-Cascade).

use crate::app::AppState;
use crate::core::{children_of, KeypointId};
use std::collections::VecDeque;
use std::sync::Arc;

/// Schaltet die Sichtbarkeit eines Gelenks um.
///
/// Wird ein Gelenk versteckt, werden alle Hierarchie-Nachfahren per BFS
/// mitversteckt. Einblenden wirkt nur auf das Gelenk selbst — der Cascade
/// ist bewusst asymmetrisch.
pub fn toggle_visibility(state: &mut AppState, id: KeypointId) {
    if state.pose.keypoint(id).is_none() {
        log::warn!("Sichtbarkeits-Toggle: Gelenk {} existiert nicht", id);
        return;
    }

    state.record_undo_snapshot();
    let pose = Arc::make_mut(&mut state.pose);

    let kp = pose.keypoint_mut(id).expect("ID oben geprüft");
    kp.visible = !kp.visible;
    let now_visible = kp.visible;
    log::debug!(
        "Gelenk {} ({}) ist jetzt {}",
        id,
        kp.name,
        if now_visible { "sichtbar" } else { "versteckt" }
    );

    if now_visible {
        return;
    }

    // Hide-Cascade: alle erreichbaren Nachfahren mitverstecken
    let mut queue = VecDeque::from([id]);
    while let Some(current) = queue.pop_front() {
        for &child in children_of(current) {
            if let Some(kp) = pose.keypoint_mut(child) {
                kp.visible = false;
            }
            queue.push_back(child);
        }
    }
}
