//! Use-Case: Pose auf die Default-Stellung zurücksetzen.

use crate::app::AppState;
use crate::core::Pose;
use std::sync::Arc;

/// Regeneriert die Default-Pose für die aktuelle Canvas-Größe.
///
/// Verwirft alle Constraints; ein einzelner Undo-Schritt.
pub fn reset_pose(state: &mut AppState) {
    state.record_undo_snapshot();
    state.pose = Arc::new(Pose::new(state.canvas_width(), state.canvas_height()));
    log::info!("Pose zurückgesetzt");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::use_cases::{constraints::toggle_limb_lock, drag};
    use glam::Vec2;

    #[test]
    fn reset_restores_default_pose_and_clears_constraints() {
        let mut state = AppState::new();
        let default_nose = state.pose.keypoints[0].position;

        toggle_limb_lock(&mut state, 2, 3);
        drag::begin_drag(&mut state, 0);
        drag::drag_keypoint(&mut state, 0, Vec2::new(5.0, 5.0));

        reset_pose(&mut state);
        assert_eq!(state.pose.keypoints[0].position, default_nose);
        assert!(state.pose.constraints.is_empty());
    }

    #[test]
    fn reset_is_undoable() {
        let mut state = AppState::new();
        drag::begin_drag(&mut state, 0);
        drag::drag_keypoint(&mut state, 0, Vec2::new(5.0, 5.0));

        reset_pose(&mut state);
        crate::app::undo(&mut state);
        assert_eq!(state.pose.keypoints[0].position, Vec2::new(5.0, 5.0));
    }
}
