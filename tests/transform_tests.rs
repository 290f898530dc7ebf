//! Integrationstests für Ganzkörper-Transformationen:
//! Scale- und Spin-Gesten, Flip, Mirror und der Gesture-Lifecycle.

use approx::assert_relative_eq;
use glam::Vec2;
use pose2d_editor::{AppController, AppIntent, AppState, MirrorDirection};

fn new_editor() -> (AppController, AppState) {
    (AppController::new(), AppState::new())
}

// ─── Scale ───────────────────────────────────────────────────────────────────

#[test]
fn scale_moves_all_joints_in_lockstep_about_the_pivot() {
    let (mut controller, mut state) = new_editor();
    let pivot = state
        .pose
        .visible_bounds()
        .map(|(min, max)| (min + max) * 0.5)
        .expect("Default-Pose hat sichtbare Gelenke");
    let before: Vec<Vec2> = state.pose.keypoints.iter().map(|k| k.position).collect();

    controller
        .handle_intent(&mut state, AppIntent::TransformStarted)
        .unwrap();
    controller
        .handle_intent(&mut state, AppIntent::ScaleUpdated(2.0))
        .unwrap();

    for (k, b) in state.pose.keypoints.iter().zip(&before) {
        let expected = pivot + (*b - pivot) * 2.0;
        assert_relative_eq!(k.position.x, expected.x, epsilon = 1e-3);
        assert_relative_eq!(k.position.y, expected.y, epsilon = 1e-3);
    }
}

#[test]
fn scale_updates_are_replayable_not_cumulative() {
    let (mut controller, mut state) = new_editor();
    let before: Vec<Vec2> = state.pose.keypoints.iter().map(|k| k.position).collect();

    controller
        .handle_intent(&mut state, AppIntent::TransformStarted)
        .unwrap();
    controller
        .handle_intent(&mut state, AppIntent::ScaleUpdated(3.0))
        .unwrap();
    controller
        .handle_intent(&mut state, AppIntent::ScaleUpdated(1.0))
        .unwrap();

    // Faktor 1.0 relativ zur Basis = Ausgangslage, egal was davor kam
    for (k, b) in state.pose.keypoints.iter().zip(&before) {
        assert_relative_eq!(k.position.x, b.x, epsilon = 1e-3);
        assert_relative_eq!(k.position.y, b.y, epsilon = 1e-3);
    }
}

#[test]
fn scale_rescales_locked_distances_with_the_same_factor() {
    let (mut controller, mut state) = new_editor();
    controller
        .handle_intent(&mut state, AppIntent::LimbLockToggleRequested(2, 3))
        .unwrap();
    let d = state.pose.constraints.get(2, 3).unwrap();

    controller
        .handle_intent(&mut state, AppIntent::TransformStarted)
        .unwrap();
    controller
        .handle_intent(&mut state, AppIntent::ScaleUpdated(1.5))
        .unwrap();
    controller
        .handle_intent(&mut state, AppIntent::TransformEnded)
        .unwrap();

    let d_after = state.pose.constraints.get(2, 3).unwrap();
    assert_relative_eq!(d_after, d * 1.5, epsilon = 1e-3);
    // Nach dem Ende der Geste stimmt die Constraint-Länge mit der Geometrie überein
    let p2 = state.pose.keypoints[2].position;
    let p3 = state.pose.keypoints[3].position;
    assert_relative_eq!(p2.distance(p3), d_after, epsilon = 1e-3);
}

// ─── Spin ────────────────────────────────────────────────────────────────────

#[test]
fn spin_of_180_degrees_mirrors_offsets_about_the_pivot() {
    let (mut controller, mut state) = new_editor();
    let pivot = state
        .pose
        .visible_bounds()
        .map(|(min, max)| (min + max) * 0.5)
        .unwrap();
    let nose_before = state.pose.keypoints[0].position;

    controller
        .handle_intent(&mut state, AppIntent::TransformStarted)
        .unwrap();
    controller
        .handle_intent(
            &mut state,
            AppIntent::SpinUpdated {
                angle_degrees: 180.0,
                width_factor: 1.0,
            },
        )
        .unwrap();

    let nose = state.pose.keypoints[0].position;
    let expected = pivot - (nose_before - pivot);
    assert_relative_eq!(nose.x, expected.x, epsilon = 1e-2);
    assert_relative_eq!(nose.y, expected.y, epsilon = 1e-2);
}

#[test]
fn spin_width_factor_squeezes_x_offsets_before_rotation() {
    let (mut controller, mut state) = new_editor();
    let pivot = state
        .pose
        .visible_bounds()
        .map(|(min, max)| (min + max) * 0.5)
        .unwrap();
    let rwrist_before = state.pose.keypoints[4].position;

    controller
        .handle_intent(&mut state, AppIntent::TransformStarted)
        .unwrap();
    controller
        .handle_intent(
            &mut state,
            AppIntent::SpinUpdated {
                angle_degrees: 0.0,
                width_factor: 0.5,
            },
        )
        .unwrap();

    let rwrist = state.pose.keypoints[4].position;
    assert_relative_eq!(
        rwrist.x,
        pivot.x + (rwrist_before.x - pivot.x) * 0.5,
        epsilon = 1e-3
    );
    assert_relative_eq!(rwrist.y, rwrist_before.y, epsilon = 1e-3);
}

// ─── Gesture-Lifecycle ───────────────────────────────────────────────────────

#[test]
fn transform_updates_without_start_are_ignored() {
    let (mut controller, mut state) = new_editor();
    let before: Vec<Vec2> = state.pose.keypoints.iter().map(|k| k.position).collect();

    controller
        .handle_intent(&mut state, AppIntent::ScaleUpdated(5.0))
        .unwrap();

    let after: Vec<Vec2> = state.pose.keypoints.iter().map(|k| k.position).collect();
    assert_eq!(before, after);
    assert!(!state.can_undo());
}

#[test]
fn whole_transform_gesture_is_one_undo_step() {
    let (mut controller, mut state) = new_editor();
    let before: Vec<Vec2> = state.pose.keypoints.iter().map(|k| k.position).collect();

    controller
        .handle_intent(&mut state, AppIntent::TransformStarted)
        .unwrap();
    controller
        .handle_intent(&mut state, AppIntent::ScaleUpdated(1.2))
        .unwrap();
    controller
        .handle_intent(&mut state, AppIntent::ScaleUpdated(1.7))
        .unwrap();
    controller
        .handle_intent(&mut state, AppIntent::TransformEnded)
        .unwrap();
    controller
        .handle_intent(&mut state, AppIntent::UndoRequested)
        .unwrap();

    let after: Vec<Vec2> = state.pose.keypoints.iter().map(|k| k.position).collect();
    assert_eq!(before, after);
    assert!(!state.can_undo());
}

// ─── Flip ────────────────────────────────────────────────────────────────────

#[test]
fn horizontal_flip_twice_restores_the_pose() {
    let (mut controller, mut state) = new_editor();
    let before: Vec<Vec2> = state.pose.keypoints.iter().map(|k| k.position).collect();

    controller
        .handle_intent(&mut state, AppIntent::FlipHorizontalRequested)
        .unwrap();
    controller
        .handle_intent(&mut state, AppIntent::FlipHorizontalRequested)
        .unwrap();

    for (k, b) in state.pose.keypoints.iter().zip(&before) {
        assert_relative_eq!(k.position.x, b.x, epsilon = 1e-3);
        assert_relative_eq!(k.position.y, b.y, epsilon = 1e-3);
    }
}

#[test]
fn vertical_flip_reflects_about_the_visible_centroid() {
    let (mut controller, mut state) = new_editor();
    let centroid = state.pose.visible_centroid().unwrap();
    let nose_before = state.pose.keypoints[0].position;

    controller
        .handle_intent(&mut state, AppIntent::FlipVerticalRequested)
        .unwrap();

    let nose = state.pose.keypoints[0].position;
    assert_relative_eq!(nose.x, nose_before.x, epsilon = 1e-3);
    assert_relative_eq!(nose.y, 2.0 * centroid.y - nose_before.y, epsilon = 1e-3);
}

// ─── Mirror ──────────────────────────────────────────────────────────────────

#[test]
fn mirror_left_to_right_rewrites_left_joints_from_the_right_side() {
    let (mut controller, mut state) = new_editor();
    let axis_x = state.pose.keypoints[1].position.x;
    let rwrist = state.pose.keypoints[4].position;

    controller
        .handle_intent(
            &mut state,
            AppIntent::MirrorRequested(MirrorDirection::LeftToRight),
        )
        .unwrap();

    let lwrist = state.pose.keypoints[7].position;
    assert_relative_eq!(lwrist.x, 2.0 * axis_x - rwrist.x, epsilon = 1e-3);
    assert_relative_eq!(lwrist.y, rwrist.y, epsilon = 1e-3);
    // Quellseite bleibt unangetastet
    assert_eq!(state.pose.keypoints[4].position, rwrist);
}

#[test]
fn mirror_roundtrip_restores_the_right_side() {
    let (mut controller, mut state) = new_editor();
    let right_before: Vec<Vec2> = [2usize, 3, 4, 8, 9, 10, 14, 16]
        .iter()
        .map(|&i| state.pose.keypoints[i].position)
        .collect();

    controller
        .handle_intent(
            &mut state,
            AppIntent::MirrorRequested(MirrorDirection::LeftToRight),
        )
        .unwrap();
    controller
        .handle_intent(
            &mut state,
            AppIntent::MirrorRequested(MirrorDirection::RightToLeft),
        )
        .unwrap();

    for (&i, b) in [2usize, 3, 4, 8, 9, 10, 14, 16].iter().zip(&right_before) {
        let p = state.pose.keypoints[i].position;
        assert_relative_eq!(p.x, b.x, epsilon = 1e-3);
        assert_relative_eq!(p.y, b.y, epsilon = 1e-3);
    }
}

#[test]
fn mirror_copies_visibility_from_the_source_side() {
    let (mut controller, mut state) = new_editor();
    // Rechtes Handgelenk verstecken, dann die linke Seite neu schreiben
    controller
        .handle_intent(&mut state, AppIntent::VisibilityToggleRequested(4))
        .unwrap();

    controller
        .handle_intent(
            &mut state,
            AppIntent::MirrorRequested(MirrorDirection::LeftToRight),
        )
        .unwrap();

    assert!(!state.pose.keypoints[7].visible);
}
