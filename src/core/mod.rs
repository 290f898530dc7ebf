//! Core-Domänentypen: Keypoints, Skelett-Tabellen, Constraints, Pose.

pub mod constraint;
pub mod keypoint;
pub mod pose;
pub mod skeleton;

pub use constraint::ConstraintStore;
pub use keypoint::{Keypoint, KeypointId};
pub use pose::Pose;
pub use skeleton::{
    children_of, default_keypoints, is_limb, joint_name, HIERARCHY, JOINT_COLORS, JOINT_COUNT,
    JOINT_NAMES, LIMBS, MIRROR_PAIRS,
};
