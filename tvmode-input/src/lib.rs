//! Controller input normalization
//!
//! The device accepts input from several controller families, each with its
//! own native button bit layout:
//!
//! ```text
//! ┌──────────────┐  ┌──────────────┐  ┌──────────────┐
//! │ Gamepad      │  │ Remote core  │  │ Classic-type │
//! │ (16-bit)     │  │ (16-bit)     │  │ extension    │
//! └──────┬───────┘  └──────┬───────┘  └──────┬───────┘
//!        └─────────────────┼─────────────────┘
//!                          ▼
//!                   ┌─────────────┐
//!                   │  ButtonSet  │  (one closed set per tick)
//!                   └─────────────┘
//! ```
//!
//! Everything above the boundary works with [`ButtonSet`] only and never
//! branches on controller hardware.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod buttons;
pub mod controllers;
pub mod source;

pub use buttons::{Button, ButtonSet};
pub use controllers::{normalize_classic, normalize_gamepad, normalize_remote, Extension, RemoteReading};
pub use source::{InputSource, Normalizer, PadSource, REMOTE_CHANNELS};
