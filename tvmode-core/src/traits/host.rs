//! Host process environment

use core::time::Duration;

/// Process state reported by the host on each loop iteration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ProcessStatus {
    /// Tool owns the screen and input
    Foreground,
    /// Host is taking the foreground away; release display buffers now
    ReleaseForeground,
    /// Tool is suspended in the background
    Background,
    /// Host asked the tool to quit
    Exiting,
}

/// Host process environment
///
/// A tool can run standalone or hosted inside another title. Leaving a
/// hosted session means relaunching the host title; a standalone tool is
/// left through the system menu instead.
pub trait Host {
    /// Pump host messages and report the current process state
    fn process_messages(&mut self) -> ProcessStatus;

    /// Acknowledge a [`ProcessStatus::ReleaseForeground`] once buffers
    /// have been released
    fn release_done(&mut self);

    /// Returns true when running inside a host title
    fn is_hosted(&self) -> bool;

    /// Disable the system home menu (used while hosted)
    fn disable_home_menu(&mut self);

    /// Relaunch the host title, ending the tool
    fn relaunch(&mut self);

    /// Block for `duration`
    fn sleep(&mut self, duration: Duration);
}
