//! Controller: mappt Intents auf Use-Cases.

use crate::app::events::AppIntent;
use crate::app::use_cases;
use crate::app::{handlers, AppState};
use anyhow::Result;

/// Zentraler Dispatcher für alle UI-Intents.
///
/// Zustandslos bis auf den übergebenen `AppState`; jede Verarbeitung läuft
/// synchron bis zum Ende durch (ein logischer Schreiber, keine Locks).
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent vollständig.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> Result<()> {
        match intent {
            AppIntent::DragStarted(id) => {
                use_cases::begin_drag(state, id);
            }
            AppIntent::DragMoved(id, target) => {
                use_cases::drag_keypoint(state, id, target);
            }
            AppIntent::VisibilityToggleRequested(id) => {
                use_cases::toggle_visibility(state, id);
            }
            AppIntent::LimbLockToggleRequested(p1, p2) => {
                use_cases::toggle_limb_lock(state, p1, p2);
            }
            AppIntent::UnlockAllRequested => {
                use_cases::unlock_all(state);
            }
            AppIntent::DragModeChanged(mode) => {
                state.drag_mode = mode;
                log::debug!("Drag-Modus: {:?}", mode);
            }
            AppIntent::TransformStarted => {
                use_cases::transform_start(state);
            }
            AppIntent::ScaleUpdated(factor) => {
                use_cases::apply_scale(state, factor);
            }
            AppIntent::SpinUpdated {
                angle_degrees,
                width_factor,
            } => {
                use_cases::apply_spin(state, angle_degrees, width_factor);
            }
            AppIntent::TransformEnded => {
                use_cases::transform_end(state);
            }
            AppIntent::FlipHorizontalRequested => {
                use_cases::flip_horizontal(state);
            }
            AppIntent::FlipVerticalRequested => {
                use_cases::flip_vertical(state);
            }
            AppIntent::MirrorRequested(direction) => {
                use_cases::mirror(state, direction);
            }
            AppIntent::UndoRequested => {
                handlers::undo(state);
            }
            AppIntent::RedoRequested => {
                handlers::redo(state);
            }
            AppIntent::ResetRequested => {
                use_cases::reset_pose(state);
            }
            AppIntent::ImportRequested(json_content) => {
                use_cases::import_pose(state, &json_content)?;
            }
            AppIntent::DetectionStarted => {
                use_cases::begin_detection(state);
            }
            AppIntent::DetectionCompleted(points) => {
                use_cases::apply_detection(state, &points);
            }
        }
        Ok(())
    }
}
