//! Repräsentiert einen einzelnen Gelenkpunkt (Keypoint) des Skeletts.

use glam::Vec2;

/// Stabile Gelenk-ID (0..17, COCO/BODY_18-Reihenfolge)
pub type KeypointId = u8;

/// Ein Gelenkpunkt der 2D-Pose
#[derive(Debug, Clone)]
pub struct Keypoint {
    /// Stabile ID (entspricht der BODY_18-Position)
    pub id: KeypointId,
    /// Anzeigename (z.B. "Neck", "RWrist")
    pub name: &'static str,
    /// Position in Canvas-Koordinaten
    pub position: Vec2,
    /// Sichtbarkeit (wird vom Hide-Cascade mitgesetzt)
    pub visible: bool,
    /// Gesperrt: Drag wird vom Aufrufer verweigert
    pub locked: bool,
    /// Anker-Flag: geankerte Gelenke bestimmen den Transform-Pivot
    pub anchored: bool,
    /// Anzeigefarbe (RGB, OpenPose-Palette)
    pub color: [u8; 3],
}

impl Keypoint {
    /// Erstellt einen sichtbaren, ungesperrten Keypoint
    pub fn new(id: KeypointId, name: &'static str, position: Vec2, color: [u8; 3]) -> Self {
        Self {
            id,
            name,
            position,
            visible: true,
            locked: false,
            anchored: false,
            color,
        }
    }

    /// Euklidische Distanz zu einem anderen Keypoint
    pub fn distance_to(&self, other: &Keypoint) -> f32 {
        self.position.distance(other.position)
    }
}
