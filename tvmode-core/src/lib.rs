//! Board-agnostic core logic for the video mode changer
//!
//! This crate contains all application logic that does not depend on
//! the platform's AV, display or controller drivers:
//!
//! - Device facade and host lifecycle traits
//! - Resolution catalog and output mode types
//! - Port/resolution compatibility policy
//! - Settings state machine (pending vs. committed state, apply algorithm)
//! - Tool configuration type definitions

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

#[macro_use]
mod fmt;

pub mod catalog;
pub mod config;
pub mod policy;
pub mod state;
pub mod traits;
pub mod types;

pub use catalog::{Catalog, CatalogError, ResolutionEntry};
pub use policy::{default_resolution_index_for_port, CompatibilityPolicy};
pub use state::{Frame, RenderModel, SettingsMachine};
pub use types::{AspectRatio, Direction, OutputPort, Region, ResolutionCode, SelectableField};
