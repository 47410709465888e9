//! Host-side session for the tvmode video mode changer
//!
//! Wires the settings machine to the platform: pumps the host's process
//! messages, owns the screen buffers across foreground changes, polls
//! input, renders frames and decides when the tool is done.

#![deny(unsafe_code)]

#[macro_use]
mod fmt;

pub mod config;
pub mod session;

pub use config::{load_config, load_embedded_config, parse_config, ConfigError, EMBEDDED_CONFIG};
pub use session::{ExitReason, Session, SessionError};
