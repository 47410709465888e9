//! AV device facade

use crate::types::{AspectRatio, OutputPort, Region, ResolutionCode};

/// Errors reported by the AV device when applying a mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DeviceError {
    /// The device refused the request, e.g. a port/region combination it
    /// cannot drive
    Rejected,
}

/// Reads and writes the device's video output configuration
///
/// Every apply call is fallible and synchronous. A failure leaves the
/// device in whatever state it was before the call.
pub trait VideoDevice {
    /// Port the device currently outputs on
    fn read_port(&mut self) -> OutputPort;

    /// Broadcast region currently in use
    fn read_region(&mut self) -> Region;

    /// Current output resolution
    ///
    /// Returns `None` when the device cannot report it.
    fn read_resolution(&mut self) -> Option<ResolutionCode>;

    /// Current TV aspect ratio
    fn read_aspect_ratio(&mut self) -> AspectRatio;

    /// Switch region, port and resolution in one call
    fn apply_region_port_resolution(
        &mut self,
        region: Region,
        port: OutputPort,
        resolution: ResolutionCode,
    ) -> Result<(), DeviceError>;

    /// Switch port and resolution, keeping the region
    fn apply_port_resolution(
        &mut self,
        port: OutputPort,
        resolution: ResolutionCode,
    ) -> Result<(), DeviceError>;

    /// Change only the scan resolution
    fn apply_resolution(&mut self, resolution: ResolutionCode) -> Result<(), DeviceError>;

    /// Change the TV aspect ratio
    fn apply_aspect_ratio(&mut self, aspect_ratio: AspectRatio) -> Result<(), DeviceError>;
}
