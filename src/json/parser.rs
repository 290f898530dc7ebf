//! Parser für das persistierte Pose-JSON-Format (`pose_keypoints_2d`).
//!
//! Akzeptiert 18 Gelenke (54 Werte, direkte BODY_18-Reihenfolge) oder
//! 25 Gelenke (75 Werte, BODY_25 → BODY_18-Remap). Alles andere ist ein
//! harter Fehler; der Zustand des Aufrufers bleibt unberührt.

use crate::core::{Keypoint, KeypointId, JOINT_COLORS, JOINT_COUNT, JOINT_NAMES};
use anyhow::{bail, Result};
use glam::Vec2;
use serde::Deserialize;

/// Rohdaten eines Pose-Files (Schema des externen Formats)
#[derive(Debug, Deserialize)]
pub struct PoseFile {
    /// Flache Folge von 3 Werten pro Gelenk: x, y, Sichtbarkeit ∈ {0, 1}
    pub pose_keypoints_2d: Vec<f64>,
    /// Optionale Canvas-Breite
    #[serde(default)]
    pub canvas_width: Option<f32>,
    /// Optionale Canvas-Höhe
    #[serde(default)]
    pub canvas_height: Option<f32>,
}

/// Ergebnis eines erfolgreichen Imports
#[derive(Debug)]
pub struct ImportedPose {
    /// Die 18 Keypoints in BODY_18-Reihenfolge
    pub keypoints: Vec<Keypoint>,
    /// Canvas-Breite aus der Datei (falls vorhanden)
    pub canvas_width: Option<f32>,
    /// Canvas-Höhe aus der Datei (falls vorhanden)
    pub canvas_height: Option<f32>,
}

/// BODY_25 → BODY_18: Quell-Index pro Ziel-Gelenk.
///
/// 0–7 direkt, 8–10 aus 9–11, 11–13 aus 12–14, 14–17 aus 15–18;
/// MidHip (8) und die Fuß-Gelenke (19–24) entfallen.
const BODY_25_TO_18: [usize; JOINT_COUNT] = [
    0, 1, 2, 3, 4, 5, 6, 7, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18,
];

/// Parsed ein Pose-JSON in die 18 Keypoints.
pub fn parse_pose_json(json_content: &str) -> Result<ImportedPose> {
    let file: PoseFile = serde_json::from_str(json_content)?;
    let values = &file.pose_keypoints_2d;

    let keypoints = match values.len() {
        n if n == JOINT_COUNT * 3 => keypoints_direct(values),
        75 => keypoints_from_body25(values),
        n => bail!(
            "pose_keypoints_2d hat {} Werte (erwartet {} oder 75)",
            n,
            JOINT_COUNT * 3
        ),
    };

    Ok(ImportedPose {
        keypoints,
        canvas_width: file.canvas_width,
        canvas_height: file.canvas_height,
    })
}

/// Baut einen Keypoint aus einem (x, y)-Tripel-Anfang.
///
/// Sichtbarkeit: Punkte im Ursprung gelten als nicht erkannt.
fn keypoint_from_triple(id: KeypointId, x: f64, y: f64) -> Keypoint {
    let mut kp = Keypoint::new(
        id,
        JOINT_NAMES[id as usize],
        Vec2::new(x as f32, y as f32),
        JOINT_COLORS[id as usize],
    );
    kp.visible = x != 0.0 || y != 0.0;
    kp
}

fn keypoints_direct(values: &[f64]) -> Vec<Keypoint> {
    (0..JOINT_COUNT)
        .map(|i| keypoint_from_triple(i as KeypointId, values[i * 3], values[i * 3 + 1]))
        .collect()
}

fn keypoints_from_body25(values: &[f64]) -> Vec<Keypoint> {
    BODY_25_TO_18
        .iter()
        .enumerate()
        .map(|(target, &source)| {
            keypoint_from_triple(
                target as KeypointId,
                values[source * 3],
                values[source * 3 + 1],
            )
        })
        .collect()
}
