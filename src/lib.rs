//! Pose2D-Editor Library.
//! Editier-Kern für 2D-Skelett-Posen: 18 BODY_18-Keypoints, Distanz-Constraints,
//! Drag-Engine, Sichtbarkeits-Cascade, Ganzkörper-Transformationen und
//! Snapshot-basiertes Undo/Redo. Rendering und UI sitzen außerhalb.

pub mod app;
pub mod core;
pub mod json;
pub mod shared;

pub use app::{AppController, AppIntent, AppState, MirrorDirection, TransformGesture};
pub use core::{
    ConstraintStore, Keypoint, KeypointId, Pose, HIERARCHY, JOINT_COUNT, LIMBS, MIRROR_PAIRS,
};
pub use json::{parse_pose_json, write_pose_json};
pub use shared::{DragMode, EditorOptions};
