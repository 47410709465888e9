//! Platform abstraction traits
//!
//! These traits define the interface between the settings logic and the
//! platform: the AV device that applies video modes and the host process
//! environment that drives the tool's lifecycle.

pub mod device;
pub mod host;

pub use device::{DeviceError, VideoDevice};
pub use host::{Host, ProcessStatus};
