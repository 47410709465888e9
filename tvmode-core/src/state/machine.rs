//! Settings state machine definition
//!
//! All screen content and every device call is a function of the cursor,
//! the pending state and the committed state held here.

use tvmode_input::ButtonSet;

use super::actions::Action;
use super::apply::{self, ApplyReport};
use crate::catalog::Catalog;
use crate::policy::{default_resolution_index_for_port, CompatibilityPolicy};
use crate::traits::VideoDevice;
use crate::types::{AspectRatio, Direction, OutputPort, Region, SelectableField};

/// Last configuration the device confirmed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CommittedState {
    pub region: Region,
    pub port: OutputPort,
    /// Index into the catalog
    pub resolution_index: usize,
    pub aspect_ratio: AspectRatio,
}

/// User-selected configuration, not yet applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PendingState {
    pub region: Region,
    pub port: OutputPort,
    /// Index into the catalog
    pub resolution_index: usize,
    pub aspect_ratio: AspectRatio,
    /// Leave the tool once an apply succeeds
    pub exit_after_apply: bool,
}

impl PendingState {
    /// Pending state equal to `committed`
    pub fn from_committed(committed: &CommittedState, exit_after_apply: bool) -> Self {
        Self {
            region: committed.region,
            port: committed.port,
            resolution_index: committed.resolution_index,
            aspect_ratio: committed.aspect_ratio,
            exit_after_apply,
        }
    }

    /// Check whether every device-backed field equals `committed`
    pub fn matches(&self, committed: &CommittedState) -> bool {
        self.region == committed.region
            && self.port == committed.port
            && self.resolution_index == committed.resolution_index
            && self.aspect_ratio == committed.aspect_ratio
    }
}

/// Read-only projection of the machine for the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RenderModel {
    pub cursor: SelectableField,
    pub pending: PendingState,
    pub region_label: &'static str,
    pub port_label: &'static str,
    pub resolution_label: &'static str,
    pub aspect_ratio_label: &'static str,
    pub exit_after_apply: bool,
}

impl RenderModel {
    /// Value text for `field`
    pub fn value_label(&self, field: SelectableField) -> &'static str {
        match field {
            SelectableField::Region => self.region_label,
            SelectableField::Port => self.port_label,
            SelectableField::Resolution => self.resolution_label,
            SelectableField::AspectRatio => self.aspect_ratio_label,
            SelectableField::ExitAfterApply => {
                if self.exit_after_apply {
                    "Yes"
                } else {
                    "No"
                }
            }
        }
    }
}

/// Result of one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Frame {
    pub model: RenderModel,
    /// Screen content changed since the last frame
    pub redraw: bool,
    /// Report of the apply processed this tick, if any
    pub apply: Option<ApplyReport>,
    /// The interactive session should end
    pub finished: bool,
}

/// The settings context: cursor, pending and committed state
#[derive(Debug, Clone)]
pub struct SettingsMachine {
    catalog: Catalog,
    policy: CompatibilityPolicy,
    cursor: SelectableField,
    pending: PendingState,
    committed: CommittedState,
    apply_requested: bool,
    redraw: bool,
}

impl SettingsMachine {
    /// Create a machine whose pending state equals `committed`
    ///
    /// An out-of-range `committed.resolution_index` is replaced by the
    /// port's default.
    pub fn new(
        catalog: Catalog,
        policy: CompatibilityPolicy,
        mut committed: CommittedState,
        exit_after_apply: bool,
    ) -> Self {
        if committed.resolution_index >= catalog.len() {
            committed.resolution_index = default_resolution_index_for_port(&catalog, committed.port);
        }

        Self {
            catalog,
            policy,
            cursor: SelectableField::default(),
            pending: PendingState::from_committed(&committed, exit_after_apply),
            committed,
            apply_requested: false,
            redraw: true,
        }
    }

    /// Seed both states from the device's current configuration
    ///
    /// A resolution the device cannot report, or one the catalog does not
    /// list, falls back to the port's default.
    pub fn seed<D: VideoDevice>(
        device: &mut D,
        catalog: Catalog,
        policy: CompatibilityPolicy,
        exit_after_apply: bool,
    ) -> Self {
        let region = device.read_region();
        let port = device.read_port();
        let aspect_ratio = device.read_aspect_ratio();

        let resolution_index = match device.read_resolution() {
            Some(code) => match catalog.index_of(code) {
                Some(index) => index,
                None => {
                    warn!("Resolution {:?} not in catalog, using port default", code);
                    default_resolution_index_for_port(&catalog, port)
                }
            },
            None => {
                warn!("Device did not report a resolution, using port default");
                default_resolution_index_for_port(&catalog, port)
            }
        };

        info!(
            "Seeded: region={:?} port={:?} resolution={} aspect={:?}",
            region,
            port,
            catalog.entry(resolution_index).name,
            aspect_ratio
        );

        let committed = CommittedState {
            region,
            port,
            resolution_index,
            aspect_ratio,
        };
        Self::new(catalog, policy, committed, exit_after_apply)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn cursor(&self) -> SelectableField {
        self.cursor
    }

    pub fn pending(&self) -> &PendingState {
        &self.pending
    }

    pub fn committed(&self) -> &CommittedState {
        &self.committed
    }

    /// Check if an apply is waiting to be processed
    pub fn apply_requested(&self) -> bool {
        self.apply_requested
    }

    /// Request a redraw, e.g. when returning to the foreground
    pub fn force_redraw(&mut self) {
        self.redraw = true;
    }

    /// Move the cursor one field, wrapping
    pub fn move_cursor(&mut self, direction: Direction) {
        self.cursor = self.cursor.step(direction);
        self.redraw = true;
    }

    /// Change the field under the cursor
    pub fn edit_field(&mut self, direction: Direction) {
        match self.cursor {
            SelectableField::Region => {
                self.pending.region = self.pending.region.toggled();
                if let Some(port) = self
                    .policy
                    .reconcile_region_change(self.pending.port, self.pending.region)
                {
                    debug!(
                        "Port {:?} unavailable in {:?}, switching to {:?}",
                        self.pending.port,
                        self.pending.region,
                        port
                    );
                    self.select_port(port);
                }
            }
            SelectableField::Port => {
                let port = self
                    .policy
                    .step_port(self.pending.port, self.pending.region, direction);
                self.select_port(port);
            }
            SelectableField::Resolution => {
                self.pending.resolution_index =
                    self.catalog.step(self.pending.resolution_index, direction);
            }
            SelectableField::AspectRatio => {
                self.pending.aspect_ratio = self.pending.aspect_ratio.toggled();
            }
            SelectableField::ExitAfterApply => {
                self.pending.exit_after_apply = !self.pending.exit_after_apply;
            }
        }
        self.redraw = true;
    }

    // A resolution picked for one port is not carried over to another.
    fn select_port(&mut self, port: OutputPort) {
        self.pending.port = port;
        self.pending.resolution_index = default_resolution_index_for_port(&self.catalog, port);
    }

    /// Mark pending values for commit on the next [`process_apply`](Self::process_apply)
    ///
    /// Repeated requests before processing collapse into one apply.
    pub fn request_apply(&mut self) {
        self.apply_requested = true;
    }

    /// Run the apply algorithm if one was requested
    pub fn process_apply<D: VideoDevice>(&mut self, device: &mut D) -> Option<ApplyReport> {
        if !core::mem::take(&mut self.apply_requested) {
            return None;
        }

        debug_assert!(self.pending.resolution_index < self.catalog.len());
        let report = apply::apply(device, &self.catalog, &self.pending, &mut self.committed);
        info!(
            "Apply {:?}: primary={:?} aspect={:?}",
            report.branch, report.primary, report.aspect_ratio
        );
        self.redraw = true;
        Some(report)
    }

    /// Handle one tick's buttons and produce the frame to show
    pub fn advance<D: VideoDevice>(&mut self, device: &mut D, buttons: ButtonSet) -> Frame {
        for action in Action::from_buttons(buttons) {
            trace!("Action: {:?}", action);
            match action {
                Action::Edit(direction) => self.edit_field(direction),
                Action::MoveCursor(direction) => self.move_cursor(direction),
                Action::RequestApply => self.request_apply(),
            }
        }

        let apply = self.process_apply(device);

        Frame {
            model: self.render_model(),
            redraw: core::mem::take(&mut self.redraw),
            finished: apply.is_some_and(|report| report.finish),
            apply,
        }
    }

    /// Projection of the current state for the renderer
    pub fn render_model(&self) -> RenderModel {
        RenderModel {
            cursor: self.cursor,
            pending: self.pending,
            region_label: self.pending.region.label(),
            port_label: self.pending.port.label(),
            resolution_label: self.catalog.entry(self.pending.resolution_index).name,
            aspect_ratio_label: self.pending.aspect_ratio.label(),
            exit_after_apply: self.pending.exit_after_apply,
        }
    }
}
