//! Zentrale Konfiguration für den Pose-Editor-Kern.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

// ── Canvas ──────────────────────────────────────────────────────────

/// Standard-Canvas-Breite in Pixeln.
pub const DEFAULT_CANVAS_WIDTH: f32 = 512.0;
/// Standard-Canvas-Höhe in Pixeln.
pub const DEFAULT_CANVAS_HEIGHT: f32 = 512.0;

// ── History ─────────────────────────────────────────────────────────

/// Maximale Undo-Tiefe (ältere Snapshots werden verworfen).
pub const HISTORY_MAX_DEPTH: usize = 200;

// ── Geometrie ───────────────────────────────────────────────────────

/// Toleranz für degenerierte Geometrie (z.B. Null-Distanz bei Projektion).
pub const GEOMETRY_EPSILON: f32 = 1e-6;

/// Drag-Modus des Drag-Engines (global, wechselseitig exklusiv).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DragMode {
    /// Zusammenhängende Constraint-Komponente als Ganzes verschieben
    #[default]
    Translate,
    /// Nur das gezogene Gelenk bewegen und auf die Constraint-Kreise projizieren
    Resolve,
}

/// Laufzeit-Optionen des Editors (persistent als TOML).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorOptions {
    /// Canvas-Breite in Pixeln
    pub canvas_width: f32,
    /// Canvas-Höhe in Pixeln
    pub canvas_height: f32,
    /// Maximale Undo-Tiefe
    pub history_depth: usize,
    /// Drag-Modus beim Start
    #[serde(default)]
    pub drag_mode: DragMode,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            canvas_width: DEFAULT_CANVAS_WIDTH,
            canvas_height: DEFAULT_CANVAS_HEIGHT,
            history_depth: HISTORY_MAX_DEPTH,
            drag_mode: DragMode::default(),
        }
    }
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Optionen nicht lesbar: {}", path.display()))?;
        let options: Self = toml::from_str(&content)
            .with_context(|| format!("Optionen nicht parsebar: {}", path.display()))?;
        Ok(options)
    }

    /// Speichert die Optionen als TOML-Datei.
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Optionen nicht serialisierbar")?;
        std::fs::write(path, content)
            .with_context(|| format!("Optionen nicht schreibbar: {}", path.display()))?;
        Ok(())
    }
}
