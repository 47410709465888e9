//! Configuration loading
//!
//! The tool configuration is compiled in from `tvmode.toml`.

mod loader;

pub use loader::{load_config, load_embedded_config, parse_config, ConfigError};

/// Embedded default configuration (compiled into the application)
/// Edit tvmode.toml and rebuild to customize
pub const EMBEDDED_CONFIG: &str = include_str!("../../tvmode.toml");
