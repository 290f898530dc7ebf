//! Application-Layer: Controller, State, Events, History und Use-Cases.

pub mod controller;
pub mod events;
pub mod handlers;
pub mod history;
pub mod state;
pub mod use_cases;

pub use controller::AppController;
pub use events::AppIntent;
pub use handlers::{redo, undo};
pub use history::{EditHistory, Snapshot};
pub use state::AppState;
pub use use_cases::{MirrorDirection, TransformGesture};
