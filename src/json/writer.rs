//! Writer für das persistierte Pose-JSON-Format.

use crate::core::Pose;
use anyhow::Result;
use serde::Serialize;

/// Serialisierbare Form des externen Pose-Schemas
#[derive(Serialize)]
struct PoseFileOut {
    pose_keypoints_2d: Vec<f64>,
    canvas_width: f32,
    canvas_height: f32,
}

/// Schreibt eine Pose als JSON-String (18 Tripel x, y, Sichtbarkeit).
pub fn write_pose_json(pose: &Pose, canvas_width: f32, canvas_height: f32) -> Result<String> {
    let mut values = Vec::with_capacity(pose.keypoints.len() * 3);
    for kp in &pose.keypoints {
        values.push(kp.position.x as f64);
        values.push(kp.position.y as f64);
        values.push(if kp.visible { 1.0 } else { 0.0 });
    }

    let out = PoseFileOut {
        pose_keypoints_2d: values,
        canvas_width,
        canvas_height,
    };
    Ok(serde_json::to_string_pretty(&out)?)
}
