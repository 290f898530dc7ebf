//! Use-Case: Ganzkörper-Transformationen (Scale, Spin, Flip, Mirror).
//!
//! Kontinuierliche Gesten folgen dem Lifecycle Start → Update* → End:
//! `transform_start` friert die Basis-Pose ein, jedes Update ist eine pure
//! Funktion aus (Basis, Live-Parameter) — nie inkrementell, damit sich über
//! einen langen Slider-Drag keine Rundungsfehler aufsummieren.
//! Flip und Mirror sind Einzelschritt-Operationen mit eigenem Snapshot.

use crate::app::AppState;
use crate::core::{KeypointId, Pose, MIRROR_PAIRS};
use glam::Vec2;
use std::sync::Arc;

/// Lifecycle-Zustand eines Transform-Gestures (Idle → Active → Idle).
#[derive(Clone, Default)]
pub enum TransformGesture {
    /// Kein Gesture aktiv; Updates sind No-Ops
    #[default]
    Idle,
    /// Gesture läuft; `base` ist die eingefrorene Pose beim Start
    Active {
        /// Basis-Pose, auf die jedes Update angewendet wird
        base: Arc<Pose>,
    },
}

impl TransformGesture {
    /// Gibt die Basis-Pose zurück, falls ein Gesture aktiv ist
    fn base(&self) -> Option<&Arc<Pose>> {
        match self {
            TransformGesture::Idle => None,
            TransformGesture::Active { base } => Some(base),
        }
    }
}

/// Richtung der Mirror-Operation.
///
/// Benannt nach der Leserichtung des UI-Buttons: `LeftToRight` schreibt
/// die *linke* Seite aus der gespiegelten rechten neu (die rechte Seite
/// ist die Quelle und bleibt unverändert), `RightToLeft` umgekehrt.
/// Dadurch stellt die Folge LeftToRight → RightToLeft die ursprünglichen
/// rechten Koordinaten wieder her (doppelte Reflexion der erhaltenen Seite).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MirrorDirection {
    /// Linke Seite aus der gespiegelten rechten neu schreiben
    LeftToRight,
    /// Rechte Seite aus der gespiegelten linken neu schreiben
    RightToLeft,
}

/// Berechnet den Pivot für Scale/Spin.
///
/// Prioritäten: Schwerpunkt der geankerten Gelenke → Mittelpunkt der
/// Bounding-Box der sichtbaren Gelenke → Canvas-Mitte.
pub fn compute_pivot(pose: &Pose, canvas_center: Vec2) -> Vec2 {
    if let Some(centroid) = pose.anchored_centroid() {
        return centroid;
    }
    if let Some((min, max)) = pose.visible_bounds() {
        return (min + max) * 0.5;
    }
    canvas_center
}

/// Startet einen Transform-Gesture: History-Snapshot + Basis einfrieren.
pub fn transform_start(state: &mut AppState) {
    state.record_undo_snapshot();
    state.gesture = TransformGesture::Active {
        base: state.pose.clone(),
    };
    log::debug!("Transform-Gesture gestartet");
}

/// Beendet den Gesture: Constraints aus den finalen Positionen neu berechnen.
///
/// Ohne aktiven Gesture ein No-Op.
pub fn transform_end(state: &mut AppState) {
    if state.gesture.base().is_none() {
        log::debug!("TransformEnd ohne aktiven Gesture: nichts zu tun");
        return;
    }
    state.gesture = TransformGesture::Idle;

    let pose = Arc::make_mut(&mut state.pose);
    pose.constraints.recompute_from(&pose.keypoints);
    log::debug!("Transform-Gesture beendet, Constraints neu berechnet");
}

/// Skaliert die Pose um `factor` relativ zur Gesture-Basis.
///
/// Constraint-Distanzen werden im Gleichschritt mitskaliert, damit die
/// Pose ohne Resolve-Pass konsistent bleibt.
pub fn apply_scale(state: &mut AppState, factor: f32) {
    let Some(base) = state.gesture.base().cloned() else {
        log::debug!("Scale-Update ohne aktiven Gesture: nichts zu tun");
        return;
    };
    let pivot = compute_pivot(&base, state.canvas_center());

    let pose = Arc::make_mut(&mut state.pose);
    for (kp, base_kp) in pose.keypoints.iter_mut().zip(base.keypoints.iter()) {
        kp.position = pivot + (base_kp.position - pivot) * factor;
    }
    pose.constraints = base.constraints.clone();
    pose.constraints.scale_all(factor);
}

/// Kombinierter Spin+Perspektive-Operator relativ zur Gesture-Basis.
///
/// Der Offset zum Pivot wird zuerst in x um `width_factor` gestaucht
/// (Perspektiv-Verkürzung entlang einer Achse) und dann um `angle_degrees`
/// rotiert. Constraint-Distanzen bleiben bis `transform_end` unangetastet.
pub fn apply_spin(state: &mut AppState, angle_degrees: f32, width_factor: f32) {
    let Some(base) = state.gesture.base().cloned() else {
        log::debug!("Spin-Update ohne aktiven Gesture: nichts zu tun");
        return;
    };
    let pivot = compute_pivot(&base, state.canvas_center());
    let angle = angle_degrees.to_radians();
    let (sin, cos) = angle.sin_cos();

    let pose = Arc::make_mut(&mut state.pose);
    for (kp, base_kp) in pose.keypoints.iter_mut().zip(base.keypoints.iter()) {
        let offset = base_kp.position - pivot;
        let squeezed = Vec2::new(offset.x * width_factor, offset.y);
        let rotated = Vec2::new(
            squeezed.x * cos - squeezed.y * sin,
            squeezed.x * sin + squeezed.y * cos,
        );
        kp.position = pivot + rotated;
    }
}

/// Spiegelt alle Gelenke horizontal an der Schwerpunkt-Achse der sichtbaren
/// Gelenke. Distanzen bleiben erhalten, Constraints brauchen kein Recompute.
pub fn flip_horizontal(state: &mut AppState) {
    flip(state, FlipAxis::Horizontal);
}

/// Spiegelt alle Gelenke vertikal an der Schwerpunkt-Achse.
pub fn flip_vertical(state: &mut AppState) {
    flip(state, FlipAxis::Vertical);
}

enum FlipAxis {
    Horizontal,
    Vertical,
}

fn flip(state: &mut AppState, axis: FlipAxis) {
    let Some(centroid) = state.pose.visible_centroid() else {
        log::debug!("Flip ohne sichtbare Gelenke: nichts zu tun");
        return;
    };

    state.record_undo_snapshot();
    let pose = Arc::make_mut(&mut state.pose);
    for kp in &mut pose.keypoints {
        match axis {
            FlipAxis::Horizontal => kp.position.x = centroid.x + (centroid.x - kp.position.x),
            FlipAxis::Vertical => kp.position.y = centroid.y + (centroid.y - kp.position.y),
        }
    }
    log::debug!("Flip ausgeführt");
}

/// Spiegelt eine Körperseite auf die andere.
///
/// Achse: x-Koordinate des Necks falls sichtbar, sonst der Nase falls
/// sichtbar, sonst halbe Canvas-Breite. Für jedes der 8 symmetrischen Paare
/// werden y und Sichtbarkeit der Quellseite übernommen und x an der Achse
/// gespiegelt; die Quellseite bleibt unverändert.
pub fn mirror(state: &mut AppState, direction: MirrorDirection) {
    let axis_x = mirror_axis(state);

    state.record_undo_snapshot();
    let pose = Arc::make_mut(&mut state.pose);
    for &(right, left) in &MIRROR_PAIRS {
        let (source, dest): (KeypointId, KeypointId) = match direction {
            MirrorDirection::LeftToRight => (right, left),
            MirrorDirection::RightToLeft => (left, right),
        };
        let Some(src) = pose.keypoint(source) else {
            continue;
        };
        let (src_pos, src_visible) = (src.position, src.visible);
        if let Some(dst) = pose.keypoint_mut(dest) {
            dst.position = Vec2::new(axis_x + (axis_x - src_pos.x), src_pos.y);
            dst.visible = src_visible;
        }
    }
    log::debug!("Mirror {:?} an Achse x={}", direction, axis_x);
}

/// Spiegelachse für Mirror: Neck → Nose → halbe Canvas-Breite.
fn mirror_axis(state: &AppState) -> f32 {
    for id in [1u8, 0u8] {
        if let Some(kp) = state.pose.keypoint(id) {
            if kp.visible {
                return kp.position.x;
            }
        }
    }
    state.canvas_width() * 0.5
}
