//! Input sources
//!
//! [`InputSource`] is what the session loop polls once per tick.
//! [`Normalizer`] implements it on top of the platform's raw controller
//! drivers ([`PadSource`]).

use crate::buttons::ButtonSet;
use crate::controllers::{normalize_gamepad, normalize_remote, RemoteReading};

/// Number of remote channels polled each tick
pub const REMOTE_CHANNELS: u8 = 4;

/// Source of abstract button events
pub trait InputSource {
    /// Buttons newly pressed since the previous poll (edge-triggered)
    fn poll(&mut self) -> ButtonSet;
}

/// Raw controller driver access
///
/// Implemented by the platform layer. A read that fails or finds no
/// controller returns `None`.
pub trait PadSource {
    /// Newly pressed mask of the primary gamepad
    fn read_gamepad(&mut self) -> Option<u32>;

    /// Reading for remote `channel` (0-based, below [`REMOTE_CHANNELS`])
    fn read_remote(&mut self, channel: u8) -> Option<RemoteReading>;
}

/// Merges every attached controller into one [`ButtonSet`] per tick
pub struct Normalizer<P> {
    pads: P,
}

impl<P: PadSource> Normalizer<P> {
    pub fn new(pads: P) -> Self {
        Self { pads }
    }

    #[cfg(test)]
    fn pads(&self) -> &P {
        &self.pads
    }
}

impl<P: PadSource> InputSource for Normalizer<P> {
    fn poll(&mut self) -> ButtonSet {
        let mut pressed = self
            .pads
            .read_gamepad()
            .map(normalize_gamepad)
            .unwrap_or_default();

        for channel in 0..REMOTE_CHANNELS {
            if let Some(reading) = self.pads.read_remote(channel) {
                pressed |= normalize_remote(reading);
            }
        }

        pressed
    }
}
