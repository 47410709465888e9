//! Apply algorithm
//!
//! Chooses the device call for the pending state and folds the device's
//! answer back into the committed state. Only confirmed results are
//! committed.

use crate::catalog::Catalog;
use crate::traits::{DeviceError, VideoDevice};

use super::machine::{CommittedState, PendingState};

/// Which primary device call an apply used
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ApplyBranch {
    /// Region changed: region, port and resolution in one call
    RegionPortResolution,
    /// Port changed: port and resolution
    PortResolution,
    /// Neither changed: resolution only
    ResolutionOnly,
}

impl ApplyBranch {
    /// Pick the primary call, by priority region > port > resolution
    ///
    /// A region or port change carries the resolution with it, so exactly
    /// one branch applies.
    pub fn select(pending: &PendingState, committed: &CommittedState) -> Self {
        if pending.region != committed.region {
            ApplyBranch::RegionPortResolution
        } else if pending.port != committed.port {
            ApplyBranch::PortResolution
        } else {
            ApplyBranch::ResolutionOnly
        }
    }
}

/// Outcome of one apply
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ApplyReport {
    pub branch: ApplyBranch,
    /// Result of the primary call
    pub primary: Result<(), DeviceError>,
    /// Result of the aspect ratio call, if one was needed
    pub aspect_ratio: Option<Result<(), DeviceError>>,
    /// The session should end (exit-after-apply set and primary succeeded)
    pub finish: bool,
}

impl ApplyReport {
    pub fn primary_succeeded(&self) -> bool {
        self.primary.is_ok()
    }
}

/// Issue the device calls for `pending` and commit what the device accepts
pub(crate) fn apply<D: VideoDevice>(
    device: &mut D,
    catalog: &Catalog,
    pending: &PendingState,
    committed: &mut CommittedState,
) -> ApplyReport {
    let branch = ApplyBranch::select(pending, committed);
    let code = catalog.entry(pending.resolution_index).code;

    let primary = match branch {
        ApplyBranch::RegionPortResolution => {
            debug!(
                "Applying region {:?}, port {:?}, resolution {:?}",
                pending.region, pending.port, code
            );
            device
                .apply_region_port_resolution(pending.region, pending.port, code)
                .map(|()| {
                    committed.region = pending.region;
                    committed.port = pending.port;
                    committed.resolution_index = pending.resolution_index;
                })
        }
        ApplyBranch::PortResolution => {
            debug!("Applying port {:?}, resolution {:?}", pending.port, code);
            device.apply_port_resolution(pending.port, code).map(|()| {
                committed.port = pending.port;
                committed.resolution_index = pending.resolution_index;
            })
        }
        ApplyBranch::ResolutionOnly => {
            debug!("Applying resolution {:?}", code);
            device
                .apply_resolution(code)
                .map(|()| committed.resolution_index = pending.resolution_index)
        }
    };

    if let Err(e) = primary {
        warn!("Device rejected {:?}: {:?}", branch, e);
    }

    // Aspect ratio is a separate device property; it is applied whether or
    // not the primary call went through.
    let aspect_ratio = (pending.aspect_ratio != committed.aspect_ratio).then(|| {
        debug!("Applying aspect ratio {:?}", pending.aspect_ratio);
        let result = device
            .apply_aspect_ratio(pending.aspect_ratio)
            .map(|()| committed.aspect_ratio = pending.aspect_ratio);
        if let Err(e) = result {
            warn!("Device rejected aspect ratio: {:?}", e);
        }
        result
    });

    ApplyReport {
        branch,
        primary,
        aspect_ratio,
        finish: pending.exit_after_apply && primary.is_ok(),
    }
}
