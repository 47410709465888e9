//! Native controller bit layouts
//!
//! Each controller family reports "newly pressed" buttons as a bitmask in
//! its own layout. The tables below translate those layouts into
//! [`ButtonSet`]; buttons with no abstract counterpart (remote 1/2, nunchuk
//! C/Z, gamepad sync and stick emulation bits) are dropped.

use crate::buttons::{Button, ButtonSet};

// Gamepad layout
#[allow(dead_code)] // not mapped
const GAMEPAD_SYNC: u32 = 0x0001;
const GAMEPAD_HOME: u32 = 0x0002;
const GAMEPAD_MINUS: u32 = 0x0004;
const GAMEPAD_PLUS: u32 = 0x0008;
const GAMEPAD_R: u32 = 0x0010;
const GAMEPAD_L: u32 = 0x0020;
const GAMEPAD_ZR: u32 = 0x0040;
const GAMEPAD_ZL: u32 = 0x0080;
const GAMEPAD_DOWN: u32 = 0x0100;
const GAMEPAD_UP: u32 = 0x0200;
const GAMEPAD_RIGHT: u32 = 0x0400;
const GAMEPAD_LEFT: u32 = 0x0800;
const GAMEPAD_Y: u32 = 0x1000;
const GAMEPAD_X: u32 = 0x2000;
const GAMEPAD_B: u32 = 0x4000;
const GAMEPAD_A: u32 = 0x8000;

// Remote core layout
const REMOTE_LEFT: u32 = 0x0001;
const REMOTE_RIGHT: u32 = 0x0002;
const REMOTE_DOWN: u32 = 0x0004;
const REMOTE_UP: u32 = 0x0008;
const REMOTE_PLUS: u32 = 0x0010;
#[allow(dead_code)] // not mapped
const REMOTE_TWO: u32 = 0x0100;
#[allow(dead_code)] // not mapped
const REMOTE_ONE: u32 = 0x0200;
const REMOTE_B: u32 = 0x0400;
const REMOTE_A: u32 = 0x0800;
const REMOTE_MINUS: u32 = 0x1000;
const REMOTE_HOME: u32 = 0x8000;

// Classic-type extension layout (classic and pro controllers)
const CLASSIC_UP: u32 = 0x0001;
const CLASSIC_LEFT: u32 = 0x0002;
const CLASSIC_ZR: u32 = 0x0004;
const CLASSIC_X: u32 = 0x0008;
const CLASSIC_A: u32 = 0x0010;
const CLASSIC_Y: u32 = 0x0020;
const CLASSIC_B: u32 = 0x0040;
const CLASSIC_ZL: u32 = 0x0080;
const CLASSIC_R: u32 = 0x0200;
const CLASSIC_PLUS: u32 = 0x0400;
const CLASSIC_HOME: u32 = 0x0800;
const CLASSIC_MINUS: u32 = 0x1000;
const CLASSIC_L: u32 = 0x2000;
const CLASSIC_DOWN: u32 = 0x4000;
const CLASSIC_RIGHT: u32 = 0x8000;

const GAMEPAD_MAP: [(u32, Button); 15] = [
    (GAMEPAD_HOME, Button::Home),
    (GAMEPAD_MINUS, Button::Minus),
    (GAMEPAD_PLUS, Button::Plus),
    (GAMEPAD_R, Button::R),
    (GAMEPAD_L, Button::L),
    (GAMEPAD_ZR, Button::ZR),
    (GAMEPAD_ZL, Button::ZL),
    (GAMEPAD_DOWN, Button::Down),
    (GAMEPAD_UP, Button::Up),
    (GAMEPAD_RIGHT, Button::Right),
    (GAMEPAD_LEFT, Button::Left),
    (GAMEPAD_Y, Button::Y),
    (GAMEPAD_X, Button::X),
    (GAMEPAD_B, Button::Back),
    (GAMEPAD_A, Button::Confirm),
];

const REMOTE_MAP: [(u32, Button); 9] = [
    (REMOTE_LEFT, Button::Left),
    (REMOTE_RIGHT, Button::Right),
    (REMOTE_DOWN, Button::Down),
    (REMOTE_UP, Button::Up),
    (REMOTE_PLUS, Button::Plus),
    (REMOTE_B, Button::Back),
    (REMOTE_A, Button::Confirm),
    (REMOTE_MINUS, Button::Minus),
    (REMOTE_HOME, Button::Home),
];

const CLASSIC_MAP: [(u32, Button); 15] = [
    (CLASSIC_UP, Button::Up),
    (CLASSIC_LEFT, Button::Left),
    (CLASSIC_ZR, Button::ZR),
    (CLASSIC_X, Button::X),
    (CLASSIC_A, Button::Confirm),
    (CLASSIC_Y, Button::Y),
    (CLASSIC_B, Button::Back),
    (CLASSIC_ZL, Button::ZL),
    (CLASSIC_R, Button::R),
    (CLASSIC_PLUS, Button::Plus),
    (CLASSIC_HOME, Button::Home),
    (CLASSIC_MINUS, Button::Minus),
    (CLASSIC_L, Button::L),
    (CLASSIC_DOWN, Button::Down),
    (CLASSIC_RIGHT, Button::Right),
];

// Extension type values reported by the remote driver
const EXT_CORE: u8 = 0;
const EXT_NUNCHUK: u8 = 1;
const EXT_CLASSIC: u8 = 2;
const EXT_MOTION_PLUS: u8 = 5;
const EXT_MOTION_PLUS_NUNCHUK: u8 = 6;
const EXT_MOTION_PLUS_CLASSIC: u8 = 7;
const EXT_PRO: u8 = 31;
const EXT_ABSENT: u8 = 0xFF;

/// Extension attached to a remote channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Extension {
    /// Remote with nothing attached
    Core,
    Nunchuk,
    Classic,
    MotionPlus,
    MotionPlusNunchuk,
    MotionPlusClassic,
    /// Pro controller (reports in the classic layout)
    Pro,
    /// Any other extension value; read in the classic layout
    Other(u8),
    /// No controller on this channel
    Absent,
}

impl Extension {
    /// Parse the driver's extension type byte
    pub fn from_byte(byte: u8) -> Self {
        match byte {
            EXT_CORE => Extension::Core,
            EXT_NUNCHUK => Extension::Nunchuk,
            EXT_CLASSIC => Extension::Classic,
            EXT_MOTION_PLUS => Extension::MotionPlus,
            EXT_MOTION_PLUS_NUNCHUK => Extension::MotionPlusNunchuk,
            EXT_MOTION_PLUS_CLASSIC => Extension::MotionPlusClassic,
            EXT_PRO => Extension::Pro,
            EXT_ABSENT => Extension::Absent,
            other => Extension::Other(other),
        }
    }

    /// Returns true if buttons come from the remote's own core layout
    pub fn uses_core_layout(&self) -> bool {
        matches!(
            self,
            Extension::Core
                | Extension::Nunchuk
                | Extension::MotionPlus
                | Extension::MotionPlusNunchuk
        )
    }
}

/// One remote channel's reading for a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RemoteReading {
    pub extension: Extension,
    /// Newly pressed buttons in the core layout
    pub core: u32,
    /// Newly pressed buttons in the classic layout
    pub classic: u32,
}

fn map_bits(raw: u32, table: &[(u32, Button)]) -> ButtonSet {
    table
        .iter()
        .filter(|(mask, _)| raw & mask != 0)
        .map(|(_, button)| *button)
        .collect()
}

/// Normalize the gamepad's newly pressed mask
pub fn normalize_gamepad(raw: u32) -> ButtonSet {
    map_bits(raw, &GAMEPAD_MAP)
}

/// Normalize a classic-type extension mask
pub fn normalize_classic(raw: u32) -> ButtonSet {
    map_bits(raw, &CLASSIC_MAP)
}

/// Normalize one remote channel
///
/// Core-style extensions are read from the core mask, everything else from
/// the classic mask. An absent controller contributes nothing.
pub fn normalize_remote(reading: RemoteReading) -> ButtonSet {
    match reading.extension {
        Extension::Absent => ButtonSet::EMPTY,
        ext if ext.uses_core_layout() => map_bits(reading.core, &REMOTE_MAP),
        _ => normalize_classic(reading.classic),
    }
}
