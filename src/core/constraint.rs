//! Distanz-Constraints zwischen Gelenkpaaren.

use super::keypoint::{Keypoint, KeypointId};
use indexmap::IndexMap;

/// Speichert pro ungeordnetem Gelenkpaar eine starre Soll-Distanz.
///
/// Schlüssel werden immer aufsteigend normalisiert, damit `(a,b)` und `(b,a)`
/// auf denselben Eintrag treffen. `IndexMap` statt `HashMap`, damit die
/// Iterationsreihenfolge (Kandidaten-Mittelung im Resolve-Drag, Export)
/// deterministisch bleibt.
#[derive(Debug, Clone, Default)]
pub struct ConstraintStore {
    distances: IndexMap<(KeypointId, KeypointId), f32>,
}

/// Normalisiert ein Gelenkpaar auf aufsteigende Reihenfolge
fn normalize(p1: KeypointId, p2: KeypointId) -> (KeypointId, KeypointId) {
    if p1 <= p2 {
        (p1, p2)
    } else {
        (p2, p1)
    }
}

impl ConstraintStore {
    /// Erstellt einen leeren Store
    pub fn new() -> Self {
        Self::default()
    }

    /// Setzt die Soll-Distanz für ein Gelenkpaar.
    ///
    /// Selbst-Paare (`p1 == p2`) werden ignoriert.
    pub fn set(&mut self, p1: KeypointId, p2: KeypointId, distance: f32) {
        if p1 == p2 {
            log::warn!("Constraint auf Selbst-Paar ({}) ignoriert", p1);
            return;
        }
        self.distances.insert(normalize(p1, p2), distance);
    }

    /// Entfernt den Constraint eines Gelenkpaars (true falls vorhanden)
    pub fn remove(&mut self, p1: KeypointId, p2: KeypointId) -> bool {
        self.distances.shift_remove(&normalize(p1, p2)).is_some()
    }

    /// Gibt die Soll-Distanz eines Gelenkpaars zurück
    pub fn get(&self, p1: KeypointId, p2: KeypointId) -> Option<f32> {
        self.distances.get(&normalize(p1, p2)).copied()
    }

    /// Prüft ob ein Constraint für das Paar existiert
    pub fn contains(&self, p1: KeypointId, p2: KeypointId) -> bool {
        self.distances.contains_key(&normalize(p1, p2))
    }

    /// Alle Gelenke, die über einen aktiven Constraint mit `id` verbunden sind
    pub fn neighbors(&self, id: KeypointId) -> Vec<KeypointId> {
        self.distances
            .keys()
            .filter_map(|&(a, b)| {
                if a == id {
                    Some(b)
                } else if b == id {
                    Some(a)
                } else {
                    None
                }
            })
            .collect()
    }

    /// Iterator über alle Constraints (Paar, Distanz)
    pub fn iter(&self) -> impl Iterator<Item = ((KeypointId, KeypointId), f32)> + '_ {
        self.distances.iter().map(|(&pair, &d)| (pair, d))
    }

    /// Anzahl aktiver Constraints
    pub fn len(&self) -> usize {
        self.distances.len()
    }

    /// Prüft ob keine Constraints aktiv sind
    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    /// Entfernt alle Constraints
    pub fn clear(&mut self) {
        self.distances.clear();
    }

    /// Multipliziert alle Soll-Distanzen mit `factor` (Scale-Operator)
    pub fn scale_all(&mut self, factor: f32) {
        for distance in self.distances.values_mut() {
            *distance *= factor;
        }
    }

    /// Berechnet alle Soll-Distanzen aus den aktuellen Positionen neu.
    ///
    /// Wird am Ende eines Transform-Gestures aufgerufen, damit die Constraints
    /// zur neuen Geometrie passen (Rotation/Perspektive erhalten Distanzen
    /// nicht vorhersagbar).
    pub fn recompute_from(&mut self, keypoints: &[Keypoint]) {
        for (&(a, b), distance) in self.distances.iter_mut() {
            let (Some(ka), Some(kb)) = (keypoints.get(a as usize), keypoints.get(b as usize))
            else {
                continue;
            };
            *distance = ka.distance_to(kb);
        }
    }
}
