//! Configuration types
//!
//! Board-agnostic tool configuration. The application embeds a TOML file
//! and deserializes it into these types when the `serde` feature is on.

pub mod types;

pub use types::*;
