//! Use-Case-Funktionen für Pose-Mutationen.
//!
//! Aufgeteilt nach Operation:
//! - `drag` — Gelenk ziehen (Translate / Resolve)
//! - `visibility` — Sichtbarkeit umschalten mit Hide-Cascade
//! - `transform` — Scale/Spin-Gesten, Flip, Mirror
//! - `constraints` — Limb-Sperren setzen/entfernen
//! - `detect` — Erkennungs-Ergebnis übernehmen
//! - `import` — Pose aus JSON laden
//! - `reset` — Default-Pose wiederherstellen

pub mod constraints;
pub mod detect;
pub mod drag;
pub mod import;
pub mod reset;
pub mod transform;
pub mod visibility;

pub use constraints::{toggle_limb_lock, unlock_all};
pub use detect::{apply_detection, begin_detection};
pub use drag::{begin_drag, drag_keypoint};
pub use import::import_pose;
pub use reset::reset_pose;
pub use transform::{
    apply_scale, apply_spin, compute_pivot, flip_horizontal, flip_vertical, mirror,
    transform_end, transform_start, MirrorDirection, TransformGesture,
};
pub use visibility::toggle_visibility;
