//! Die zentrale Pose-Datenstruktur: 18 Keypoints plus aktive Constraints.

use super::constraint::ConstraintStore;
use super::keypoint::{Keypoint, KeypointId};
use super::skeleton::{default_keypoints, JOINT_COUNT};
use glam::Vec2;

/// Eine vollständige 2D-Pose — die Snapshot-Einheit für Undo/Redo.
///
/// Die 18 Keypoints existieren für die gesamte Session; Operatoren mutieren
/// Positionen und Flags in place, Import/Reset regenerieren den Satz.
#[derive(Debug, Clone)]
pub struct Pose {
    /// Die 18 Gelenke in fester BODY_18-Reihenfolge
    pub keypoints: Vec<Keypoint>,
    /// Aktive Distanz-Constraints
    pub constraints: ConstraintStore,
}

impl Pose {
    /// Erstellt die Default-Pose für die gegebene Canvas-Größe
    pub fn new(canvas_width: f32, canvas_height: f32) -> Self {
        Self {
            keypoints: default_keypoints(canvas_width, canvas_height),
            constraints: ConstraintStore::new(),
        }
    }

    /// Keypoint per ID (None für IDs außerhalb 0..17)
    pub fn keypoint(&self, id: KeypointId) -> Option<&Keypoint> {
        self.keypoints.get(id as usize)
    }

    /// Mutabler Keypoint per ID
    pub fn keypoint_mut(&mut self, id: KeypointId) -> Option<&mut Keypoint> {
        self.keypoints.get_mut(id as usize)
    }

    /// Bounding-Box aller sichtbaren Gelenke als (min, max)
    pub fn visible_bounds(&self) -> Option<(Vec2, Vec2)> {
        let mut bounds: Option<(Vec2, Vec2)> = None;
        for kp in self.keypoints.iter().filter(|kp| kp.visible) {
            bounds = Some(match bounds {
                None => (kp.position, kp.position),
                Some((min, max)) => (min.min(kp.position), max.max(kp.position)),
            });
        }
        bounds
    }

    /// Schwerpunkt aller sichtbaren Gelenke
    pub fn visible_centroid(&self) -> Option<Vec2> {
        let mut sum = Vec2::ZERO;
        let mut count = 0u32;
        for kp in self.keypoints.iter().filter(|kp| kp.visible) {
            sum += kp.position;
            count += 1;
        }
        (count > 0).then(|| sum / count as f32)
    }

    /// Schwerpunkt aller geankerten Gelenke (Pivot-Kandidat)
    pub fn anchored_centroid(&self) -> Option<Vec2> {
        let mut sum = Vec2::ZERO;
        let mut count = 0u32;
        for kp in self.keypoints.iter().filter(|kp| kp.anchored) {
            sum += kp.position;
            count += 1;
        }
        (count > 0).then(|| sum / count as f32)
    }

    /// Speichert die aktuelle Distanz eines Gelenkpaars als Constraint.
    ///
    /// Gibt false zurück falls eine der IDs ungültig ist.
    pub fn lock_limb_distance(&mut self, p1: KeypointId, p2: KeypointId) -> bool {
        let (Some(ka), Some(kb)) = (self.keypoint(p1), self.keypoint(p2)) else {
            return false;
        };
        let distance = ka.distance_to(kb);
        self.constraints.set(p1, p2, distance);
        true
    }

    /// Ersetzt alle Keypoints und verwirft sämtliche Constraints (Import)
    pub fn replace_keypoints(&mut self, keypoints: Vec<Keypoint>) {
        debug_assert_eq!(keypoints.len(), JOINT_COUNT);
        self.keypoints = keypoints;
        self.constraints.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_pose_has_18_visible_keypoints_and_no_constraints() {
        let pose = Pose::new(512.0, 512.0);
        assert_eq!(pose.keypoints.len(), JOINT_COUNT);
        assert!(pose.keypoints.iter().all(|kp| kp.visible));
        assert!(pose.constraints.is_empty());
    }

    #[test]
    fn visible_bounds_ignores_hidden_joints() {
        let mut pose = Pose::new(512.0, 512.0);
        for kp in &mut pose.keypoints {
            kp.visible = false;
        }
        pose.keypoints[0].position = Vec2::new(10.0, 20.0);
        pose.keypoints[0].visible = true;
        pose.keypoints[1].position = Vec2::new(30.0, 5.0);
        pose.keypoints[1].visible = true;

        let (min, max) = pose.visible_bounds().expect("bounds vorhanden");
        assert_eq!(min, Vec2::new(10.0, 5.0));
        assert_eq!(max, Vec2::new(30.0, 20.0));
    }

    #[test]
    fn visible_bounds_none_when_all_hidden() {
        let mut pose = Pose::new(512.0, 512.0);
        for kp in &mut pose.keypoints {
            kp.visible = false;
        }
        assert!(pose.visible_bounds().is_none());
        assert!(pose.visible_centroid().is_none());
    }

    #[test]
    fn anchored_centroid_averages_anchored_positions() {
        let mut pose = Pose::new(512.0, 512.0);
        pose.keypoints[8].position = Vec2::new(0.0, 0.0);
        pose.keypoints[8].anchored = true;
        pose.keypoints[11].position = Vec2::new(10.0, 20.0);
        pose.keypoints[11].anchored = true;

        assert_eq!(pose.anchored_centroid(), Some(Vec2::new(5.0, 10.0)));
    }

    #[test]
    fn lock_limb_distance_captures_current_distance() {
        let mut pose = Pose::new(512.0, 512.0);
        pose.keypoints[2].position = Vec2::new(0.0, 0.0);
        pose.keypoints[3].position = Vec2::new(0.0, 70.0);

        assert!(pose.lock_limb_distance(2, 3));
        assert_eq!(pose.constraints.get(2, 3), Some(70.0));
        assert!(!pose.lock_limb_distance(2, 99));
    }

    #[test]
    fn replace_keypoints_clears_constraints() {
        let mut pose = Pose::new(512.0, 512.0);
        pose.lock_limb_distance(1, 2);
        assert!(!pose.constraints.is_empty());

        pose.replace_keypoints(default_keypoints(256.0, 256.0));
        assert!(pose.constraints.is_empty());
        assert_eq!(pose.keypoints.len(), JOINT_COUNT);
    }
}
