//! Import/Export des persistierten Pose-JSON-Formats.

pub mod parser;
pub mod writer;

pub use parser::{parse_pose_json, ImportedPose, PoseFile};
pub use writer::write_pose_json;
