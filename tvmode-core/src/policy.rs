//! Field compatibility policy
//!
//! Pure rules relating ports, regions and resolutions:
//!
//! - which resolution a port starts on when it is selected
//! - which ports may be chosen under which region

use crate::catalog::Catalog;
use crate::types::{Direction, OutputPort, Region, ResolutionCode};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Preferred resolution code for each port
///
/// The best practical mode for what the connector can carry: 720p over
/// HDMI, 480p over component, plain 480i over composite and the PAL60
/// variant of 480i over SCART.
pub fn preferred_code(port: OutputPort) -> ResolutionCode {
    match port {
        OutputPort::Hdmi => ResolutionCode(4),
        OutputPort::Component => ResolutionCode(3),
        OutputPort::Composite => ResolutionCode(2),
        OutputPort::Scart => ResolutionCode(10),
    }
}

/// Default catalog index for `port`
///
/// Total over every port: if the catalog does not list the preferred
/// code, the first entry is used.
pub fn default_resolution_index_for_port(catalog: &Catalog, port: OutputPort) -> usize {
    catalog.index_of(preferred_code(port)).unwrap_or(0)
}

/// Port/region compatibility rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CompatibilityPolicy {
    /// Every port is selectable in every region; the device rejects
    /// combinations it cannot drive
    #[default]
    Independent,
    /// Composite/S-Video is NTSC-only and SCART is PAL-only
    RegionExclusive,
}

impl CompatibilityPolicy {
    /// Check whether `port` may be selected under `region`
    pub fn port_allowed(self, port: OutputPort, region: Region) -> bool {
        match self {
            CompatibilityPolicy::Independent => true,
            CompatibilityPolicy::RegionExclusive => {
                required_region(port).map_or(true, |required| required == region)
            }
        }
    }

    /// Next selectable port from `port` in `direction` under `region`
    ///
    /// Ports that are not allowed are skipped. HDMI is allowed everywhere,
    /// so the search always ends.
    pub fn step_port(self, port: OutputPort, region: Region, direction: Direction) -> OutputPort {
        let mut next = port.step(direction);
        while !self.port_allowed(next, region) {
            next = next.step(direction);
        }
        next
    }

    /// Port to switch to after the region changes to `region`
    ///
    /// Returns `None` when `port` stays legal. Otherwise returns its
    /// companion port, which carries the same signal for the other region.
    pub fn reconcile_region_change(self, port: OutputPort, region: Region) -> Option<OutputPort> {
        if self.port_allowed(port, region) {
            None
        } else {
            Some(companion(port))
        }
    }
}

/// Region a port is locked to under [`CompatibilityPolicy::RegionExclusive`]
fn required_region(port: OutputPort) -> Option<Region> {
    match port {
        OutputPort::Composite => Some(Region::Ntsc),
        OutputPort::Scart => Some(Region::Pal),
        OutputPort::Hdmi | OutputPort::Component => None,
    }
}

fn companion(port: OutputPort) -> OutputPort {
    match port {
        OutputPort::Composite => OutputPort::Scart,
        OutputPort::Scart => OutputPort::Composite,
        other => other,
    }
}
