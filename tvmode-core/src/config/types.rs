//! Configuration type definitions

use core::time::Duration;

use crate::policy::CompatibilityPolicy;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default loop interval (ms)
pub const DEFAULT_TICK_MS: u16 = 25;

/// Longest accepted loop interval (ms)
pub const MAX_TICK_MS: u16 = 1000;

/// Compatibility policy selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct PolicyConfig {
    /// Port/region rule used while editing
    pub compatibility: CompatibilityPolicy,
}

/// Session loop configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct SessionConfig {
    /// Loop interval in milliseconds
    pub tick_ms: u16,
    /// Initial value of the "exit after applying" field
    pub exit_after_apply: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            tick_ms: DEFAULT_TICK_MS,
            exit_after_apply: false,
        }
    }
}

impl SessionConfig {
    /// Loop interval as a duration
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms as u64)
    }

    /// Check that the interval is within 1..=MAX_TICK_MS
    pub fn is_valid(&self) -> bool {
        (1..=MAX_TICK_MS).contains(&self.tick_ms)
    }
}

/// Complete tool configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct ToolConfig {
    pub policy: PolicyConfig,
    pub session: SessionConfig,
}
