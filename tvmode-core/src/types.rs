//! Output mode types
//!
//! The values a user can select, plus the cursor positions used to select
//! them. Cyclic types wrap in both directions.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Direction of a cursor move or field edit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    /// Step `index` one place in this direction within `0..len`, wrapping
    /// at both ends
    pub fn step_index(self, index: usize, len: usize) -> usize {
        debug_assert!(len > 0 && index < len);
        match self {
            Direction::Forward => (index + 1) % len,
            Direction::Backward => (index + len - 1) % len,
        }
    }
}

/// Physical video output port
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum OutputPort {
    #[default]
    Hdmi = 0,
    Component = 1,
    /// Composite or S-Video through the multi-AV connector
    Composite = 2,
    /// Composite through a SCART adapter
    Scart = 3,
}

impl OutputPort {
    /// All ports in ordinal order
    pub const ALL: [OutputPort; 4] = [
        OutputPort::Hdmi,
        OutputPort::Component,
        OutputPort::Composite,
        OutputPort::Scart,
    ];

    /// Port for a known ordinal
    pub fn from_ordinal(ordinal: u8) -> Option<Self> {
        Self::ALL.get(ordinal as usize).copied()
    }

    /// Port for a raw value reported by the device
    ///
    /// The device may report ports this tool does not model; those read
    /// as HDMI.
    pub fn from_raw(raw: u8) -> Self {
        Self::from_ordinal(raw).unwrap_or(OutputPort::Hdmi)
    }

    /// Next port in `direction`, wrapping
    pub fn step(self, direction: Direction) -> Self {
        let index = direction.step_index(self as usize, Self::ALL.len());
        Self::ALL[index]
    }

    pub fn label(self) -> &'static str {
        match self {
            OutputPort::Hdmi => "HDMI",
            OutputPort::Component => "Component",
            OutputPort::Composite => "Composite/S-Video",
            OutputPort::Scart => "Composite/SCART",
        }
    }
}

/// Broadcast standard region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Region {
    #[default]
    Ntsc,
    Pal,
}

impl Region {
    pub fn toggled(self) -> Self {
        match self {
            Region::Ntsc => Region::Pal,
            Region::Pal => Region::Ntsc,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Region::Ntsc => "NTSC",
            Region::Pal => "PAL",
        }
    }
}

/// TV aspect ratio
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AspectRatio {
    /// 4:3
    Standard,
    /// 16:9
    #[default]
    Wide,
}

impl AspectRatio {
    pub fn toggled(self) -> Self {
        match self {
            AspectRatio::Standard => AspectRatio::Wide,
            AspectRatio::Wide => AspectRatio::Standard,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AspectRatio::Standard => "4:3",
            AspectRatio::Wide => "16:9",
        }
    }
}

/// Device-level resolution code
///
/// Opaque to the core: the numeric values belong to the AV driver. The
/// catalog pairs each code with its display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ResolutionCode(pub u32);

/// Cursor positions, in screen order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SelectableField {
    #[default]
    Region,
    Port,
    Resolution,
    AspectRatio,
    /// Leave the tool once an apply succeeds
    ExitAfterApply,
}

impl SelectableField {
    pub const ALL: [SelectableField; 5] = [
        SelectableField::Region,
        SelectableField::Port,
        SelectableField::Resolution,
        SelectableField::AspectRatio,
        SelectableField::ExitAfterApply,
    ];

    /// Position on screen (0-based)
    pub fn index(self) -> usize {
        self as usize
    }

    /// Next field in `direction`, wrapping
    pub fn step(self, direction: Direction) -> Self {
        Self::ALL[direction.step_index(self.index(), Self::ALL.len())]
    }

    pub fn label(self) -> &'static str {
        match self {
            SelectableField::Region => "Video Region",
            SelectableField::Port => "Output Port",
            SelectableField::Resolution => "Output Resolution",
            SelectableField::AspectRatio => "Aspect Ratio",
            SelectableField::ExitAfterApply => "Exit After Applying",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_index_wraps() {
        assert_eq!(Direction::Forward.step_index(2, 3), 0);
        assert_eq!(Direction::Backward.step_index(0, 3), 2);
        assert_eq!(Direction::Forward.step_index(0, 1), 0);
        assert_eq!(Direction::Backward.step_index(0, 1), 0);
    }

    #[test]
    fn test_port_cycle() {
        assert_eq!(OutputPort::Scart.step(Direction::Forward), OutputPort::Hdmi);
        assert_eq!(OutputPort::Hdmi.step(Direction::Backward), OutputPort::Scart);
        assert_eq!(OutputPort::Component.step(Direction::Forward), OutputPort::Composite);
    }

    #[test]
    fn test_port_from_raw() {
        assert_eq!(OutputPort::from_raw(1), OutputPort::Component);
        assert_eq!(OutputPort::from_raw(3), OutputPort::Scart);
        // Unmodelled ports read as HDMI
        assert_eq!(OutputPort::from_raw(4), OutputPort::Hdmi);
        assert_eq!(OutputPort::from_raw(0xFF), OutputPort::Hdmi);
        assert_eq!(OutputPort::from_ordinal(7), None);
    }

    #[test]
    fn test_toggles() {
        assert_eq!(Region::Ntsc.toggled(), Region::Pal);
        assert_eq!(Region::Pal.toggled().toggled(), Region::Pal);
        assert_eq!(AspectRatio::Standard.toggled(), AspectRatio::Wide);
    }

    #[test]
    fn test_field_cycle() {
        assert_eq!(
            SelectableField::ExitAfterApply.step(Direction::Forward),
            SelectableField::Region
        );
        assert_eq!(
            SelectableField::Region.step(Direction::Backward),
            SelectableField::ExitAfterApply
        );
    }
}
