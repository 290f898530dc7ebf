//! Use-Case: Pose aus dem JSON-Format importieren.

use crate::app::AppState;
use crate::json::parse_pose_json;
use anyhow::Result;
use std::sync::Arc;

/// Importiert eine Pose aus einem JSON-String.
///
/// Geparst wird vor dem Snapshot: schlägt das Parsen fehl, bleibt der
/// Zustand (inklusive History) vollständig unverändert. Bei Erfolg werden
/// alle Keypoints ersetzt, sämtliche Constraints verworfen und eine in der
/// Datei hinterlegte Canvas-Größe übernommen.
pub fn import_pose(state: &mut AppState, json_content: &str) -> Result<()> {
    let imported = parse_pose_json(json_content)?;

    state.record_undo_snapshot();
    Arc::make_mut(&mut state.pose).replace_keypoints(imported.keypoints);

    if let Some(width) = imported.canvas_width {
        state.options.canvas_width = width;
    }
    if let Some(height) = imported.canvas_height {
        state.options.canvas_height = height;
    }
    log::info!("Pose importiert");
    Ok(())
}
