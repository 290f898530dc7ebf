//! Use-Case: Ziehen eines Gelenks (Translate- oder Resolve-Modus).

use crate::app::AppState;
use crate::core::{KeypointId, Pose};
use crate::shared::{DragMode, GEOMETRY_EPSILON};
use glam::Vec2;
use std::collections::VecDeque;
use std::sync::Arc;

/// Beginnt einen Drag-Gesture für ein Gelenk.
///
/// Zeichnet den Prä-Mutations-Snapshot auf (einmal pro Geste). Gesperrte
/// oder unbekannte Gelenke werden verweigert (false) — das UI zeigt dann
/// den Shake-Hinweis, ohne dass der Engine erreicht wird.
pub fn begin_drag(state: &mut AppState, id: KeypointId) -> bool {
    let Some(kp) = state.pose.keypoint(id) else {
        log::warn!("Drag verweigert: Gelenk {} existiert nicht", id);
        return false;
    };
    let (locked, name) = (kp.locked, kp.name);
    if locked {
        log::warn!("Drag verweigert: Gelenk {} ({}) ist gesperrt", id, name);
        return false;
    }

    state.record_undo_snapshot();
    log::debug!("Drag gestartet: Gelenk {} ({})", id, name);
    true
}

/// Bewegt das gezogene Gelenk auf die bereits Canvas-geklammerte Zielposition.
///
/// Dispatch auf den globalen Drag-Modus; gesperrte Gelenke werden hier
/// zusätzlich ignoriert (der Aufrufer filtert bereits über `begin_drag`).
pub fn drag_keypoint(state: &mut AppState, id: KeypointId, target: Vec2) {
    let locked = match state.pose.keypoint(id) {
        Some(kp) => kp.locked,
        None => return,
    };
    if locked {
        return;
    }

    let pose = Arc::make_mut(&mut state.pose);
    match state.drag_mode {
        DragMode::Translate => drag_translate(pose, id, target),
        DragMode::Resolve => drag_resolve(pose, id, target),
    }
}

/// Translate-Modus: die ganze Constraint-Komponente starr mitverschieben.
///
/// Da die gesamte starre Gruppe denselben Delta bekommt, bleiben alle
/// relativen Distanzen exakt erhalten — kein Constraint-Solving nötig.
fn drag_translate(pose: &mut Pose, id: KeypointId, target: Vec2) {
    let Some(dragged) = pose.keypoint(id) else {
        return;
    };
    let delta = target - dragged.position;
    if delta == Vec2::ZERO {
        return;
    }

    for member in connected_component(pose, id) {
        if let Some(kp) = pose.keypoint_mut(member) {
            kp.position += delta;
        }
    }
}

/// Resolve-Modus: nur das gezogene Gelenk bewegen.
///
/// Für jeden Constraint-Partner wird der Zielpunkt auf den Kreis mit der
/// Soll-Distanz projiziert; die Endposition ist das arithmetische Mittel
/// aller Kandidaten (glatter Mehrfach-Constraint-Kompromiss, Single-Pass —
/// Partner werden nicht nachbalanciert).
fn drag_resolve(pose: &mut Pose, id: KeypointId, target: Vec2) {
    let partners = pose.constraints.neighbors(id);
    if partners.is_empty() {
        if let Some(kp) = pose.keypoint_mut(id) {
            kp.position = target;
        }
        return;
    }

    let Some(current) = pose.keypoint(id).map(|kp| kp.position) else {
        return;
    };

    let mut candidate_sum = Vec2::ZERO;
    let mut candidate_count = 0u32;
    for partner in partners {
        let (Some(anchor), Some(distance)) = (
            pose.keypoint(partner).map(|kp| kp.position),
            pose.constraints.get(id, partner),
        ) else {
            continue;
        };

        let raw = target - anchor;
        let raw_len = raw.length();
        // Ziel fällt mit dem Partner zusammen: keine Richtung ableitbar,
        // dieser Constraint trägt "keine Bewegung" bei
        let candidate = if raw_len < GEOMETRY_EPSILON {
            current
        } else {
            anchor + raw / raw_len * distance
        };
        candidate_sum += candidate;
        candidate_count += 1;
    }

    if candidate_count == 0 {
        return;
    }
    if let Some(kp) = pose.keypoint_mut(id) {
        kp.position = candidate_sum / candidate_count as f32;
    }
}

/// Zusammenhangskomponente über aktive Constraints (BFS, ≤18 Knoten).
fn connected_component(pose: &Pose, start: KeypointId) -> Vec<KeypointId> {
    let mut component = vec![start];
    let mut queue = VecDeque::from([start]);
    while let Some(current) = queue.pop_front() {
        for neighbor in pose.constraints.neighbors(current) {
            if !component.contains(&neighbor) {
                component.push(neighbor);
                queue.push_back(neighbor);
            }
        }
    }
    component
}
