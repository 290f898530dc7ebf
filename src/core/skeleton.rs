//! Statische Skelett-Tabellen: Gelenknamen, Limbs, Hierarchie, Spiegelpaare.
//!
//! Alle Tabellen folgen der COCO/BODY_18-Reihenfolge:
//! 0=Nose, 1=Neck, 2=RShoulder, 3=RElbow, 4=RWrist, 5=LShoulder, 6=LElbow,
//! 7=LWrist, 8=RHip, 9=RKnee, 10=RAnkle, 11=LHip, 12=LKnee, 13=LAnkle,
//! 14=REye, 15=LEye, 16=REar, 17=LEar.

use super::keypoint::{Keypoint, KeypointId};
use glam::Vec2;

/// Anzahl der Gelenke pro Pose (fix für die gesamte Session)
pub const JOINT_COUNT: usize = 18;

/// Gelenknamen in BODY_18-Reihenfolge
pub const JOINT_NAMES: [&str; JOINT_COUNT] = [
    "Nose", "Neck", "RShoulder", "RElbow", "RWrist", "LShoulder", "LElbow", "LWrist", "RHip",
    "RKnee", "RAnkle", "LHip", "LKnee", "LAnkle", "REye", "LEye", "REar", "LEar",
];

/// Anzeigefarben (RGB) der Gelenke — OpenPose-Standardpalette
pub const JOINT_COLORS: [[u8; 3]; JOINT_COUNT] = [
    [255, 0, 0],
    [255, 85, 0],
    [255, 170, 0],
    [255, 255, 0],
    [170, 255, 0],
    [85, 255, 0],
    [0, 255, 0],
    [0, 255, 85],
    [0, 255, 170],
    [0, 255, 255],
    [0, 170, 255],
    [0, 85, 255],
    [0, 0, 255],
    [85, 0, 255],
    [170, 0, 255],
    [255, 0, 255],
    [255, 0, 170],
    [255, 0, 85],
];

/// Die 17 festen Limb-Paare (Adjazenz für Rendering und Constraint-Auswahl)
pub const LIMBS: [(KeypointId, KeypointId); 17] = [
    (1, 2),
    (1, 5),
    (2, 3),
    (3, 4),
    (5, 6),
    (6, 7),
    (1, 8),
    (8, 9),
    (9, 10),
    (1, 11),
    (11, 12),
    (12, 13),
    (1, 0),
    (0, 14),
    (14, 16),
    (0, 15),
    (15, 17),
];

/// Sichtbarkeits-Hierarchie: Eltern-Gelenk → direkte Kinder.
///
/// Nur für den Hide-Cascade: Neck versteckt Kopf, Schultern und Hüften,
/// Nose die Augen, jedes Auge sein Ohr; Ellbogen/Knie ihr distales Gelenk.
/// Schultern und Hüften haben bewusst keine Kinder — das Verstecken des
/// Halses lässt Arme und Beine unterhalb der Schulter/Hüfte unberührt.
pub const HIERARCHY: [(KeypointId, &[KeypointId]); 8] = [
    (0, &[14, 15]),
    (1, &[0, 2, 5, 8, 11]),
    (3, &[4]),
    (6, &[7]),
    (9, &[10]),
    (12, &[13]),
    (14, &[16]),
    (15, &[17]),
];

/// Symmetrische Gelenkpaare (rechts, links) für die Mirror-Operatoren
pub const MIRROR_PAIRS: [(KeypointId, KeypointId); 8] = [
    (2, 5),
    (3, 6),
    (4, 7),
    (8, 11),
    (9, 12),
    (10, 13),
    (14, 15),
    (16, 17),
];

/// Default-Pose-Koordinaten bezogen auf ein 512×512-Canvas
const DEFAULT_POSE_512: [(f32, f32); JOINT_COUNT] = [
    (241.0, 77.0),
    (241.0, 120.0),
    (191.0, 118.0),
    (177.0, 183.0),
    (163.0, 252.0),
    (298.0, 118.0),
    (317.0, 182.0),
    (332.0, 245.0),
    (225.0, 241.0),
    (213.0, 359.0),
    (215.0, 454.0),
    (270.0, 240.0),
    (282.0, 360.0),
    (286.0, 456.0),
    (232.0, 59.0),
    (253.0, 60.0),
    (225.0, 70.0),
    (260.0, 72.0),
];

/// Gibt die direkten Kinder eines Gelenks zurück (leer falls keins)
pub fn children_of(id: KeypointId) -> &'static [KeypointId] {
    HIERARCHY
        .iter()
        .find(|(parent, _)| *parent == id)
        .map(|(_, children)| *children)
        .unwrap_or(&[])
}

/// Gibt den Anzeigenamen eines Gelenks zurück
pub fn joint_name(id: KeypointId) -> &'static str {
    JOINT_NAMES[id as usize]
}

/// Prüft ob zwei Gelenke durch einen Limb verbunden sind (ungerichtet)
pub fn is_limb(p1: KeypointId, p2: KeypointId) -> bool {
    LIMBS
        .iter()
        .any(|&(a, b)| (a == p1 && b == p2) || (a == p2 && b == p1))
}

/// Erzeugt die 18 Default-Keypoints, skaliert auf die Canvas-Größe
pub fn default_keypoints(canvas_width: f32, canvas_height: f32) -> Vec<Keypoint> {
    let sx = canvas_width / 512.0;
    let sy = canvas_height / 512.0;
    DEFAULT_POSE_512
        .iter()
        .enumerate()
        .map(|(i, &(x, y))| {
            Keypoint::new(
                i as KeypointId,
                JOINT_NAMES[i],
                Vec2::new(x * sx, y * sy),
                JOINT_COLORS[i],
            )
        })
        .collect()
}
