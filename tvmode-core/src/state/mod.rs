//! Settings state machine
//!
//! Tracks what the device last confirmed (committed state) next to what the
//! user has selected (pending state), and reconciles the two on apply.

pub mod actions;
pub mod apply;
pub mod machine;

pub use actions::Action;
pub use apply::{ApplyBranch, ApplyReport};
pub use machine::{CommittedState, Frame, PendingState, RenderModel, SettingsMachine};
