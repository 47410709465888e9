//! Display abstraction traits and renderer for tvmode
//!
//! This crate provides:
//! - `DisplayBackend` trait for the platform's text console
//! - `ScreenBuffers` trait for acquiring and releasing screen memory
//! - `Screen`, a character buffer with dirty tracking
//! - `render`, which projects a `RenderModel` onto a `Screen`
//!
//! # Architecture
//!
//! The settings machine never touches the display. Each frame it hands out
//! a `RenderModel`; the session renders it into a `Screen` and presents the
//! screen through whatever `DisplayBackend` the platform provides.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod backend;
pub mod render;
pub mod screen;

// Re-export key types
pub use backend::{DisplayBackend, DisplayError, ScreenBuffers};
pub use render::{render, CREDITS, HELP_LINES, TITLE};
pub use screen::{Screen, LINE_LEN, SCREEN_COLS, SCREEN_ROWS};
