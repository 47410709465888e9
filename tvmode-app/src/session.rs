//! Interactive session loop
//!
//! Runs the settings machine once per tick while the host keeps the tool
//! in the foreground. Screen buffers are released whenever the host asks
//! for the foreground and reacquired on return.

use tvmode_core::config::ToolConfig;
use tvmode_core::state::ApplyReport;
use tvmode_core::traits::{Host, ProcessStatus, VideoDevice};
use tvmode_core::{Catalog, SettingsMachine};
use tvmode_display::{render, DisplayBackend, DisplayError, Screen, ScreenBuffers};
use tvmode_input::{Button, InputSource};

/// Why a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ExitReason {
    /// The host asked the tool to quit
    HostExit,
    /// Home was pressed while hosted and the host title was relaunched
    Relaunched,
    /// Settings were applied with "exit after applying" set
    Applied,
}

/// Session errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SessionError {
    /// Screen buffers or console failed
    Display(DisplayError),
}

impl From<DisplayError> for SessionError {
    fn from(e: DisplayError) -> Self {
        SessionError::Display(e)
    }
}

/// One run of the tool
///
/// Owns the platform handles for its lifetime:
/// - `H`: host process environment
/// - `D`: AV device
/// - `I`: normalized controller input
/// - `S`: text console and its screen buffers
pub struct Session<H, D, I, S> {
    host: H,
    device: D,
    input: I,
    display: S,
    config: ToolConfig,
    screen: Screen,
    buffers_held: bool,
}

impl<H, D, I, S> Session<H, D, I, S>
where
    H: Host,
    D: VideoDevice,
    I: InputSource,
    S: DisplayBackend + ScreenBuffers,
{
    pub fn new(host: H, device: D, input: I, display: S, config: ToolConfig) -> Self {
        Self {
            host,
            device,
            input,
            display,
            config,
            screen: Screen::new(),
            buffers_held: false,
        }
    }

    pub fn device(&self) -> &D {
        &self.device
    }

    pub fn input(&self) -> &I {
        &self.input
    }

    pub fn display(&self) -> &S {
        &self.display
    }

    /// Run until the host exits or an apply finishes the session
    ///
    /// Screen buffers are released before returning, on success or error.
    pub fn run(&mut self) -> Result<ExitReason, SessionError> {
        let hosted = self.host.is_hosted();
        info!("Session starting (hosted: {})", hosted);

        if hosted {
            self.host.disable_home_menu();
        }

        let result = self.start().and_then(|machine| self.run_loop(machine));

        self.release_buffers();
        match result {
            Ok(reason) => info!("Session ended: {:?}", reason),
            Err(e) => error!("Session failed: {:?}", e),
        }
        result
    }

    fn start(&mut self) -> Result<SettingsMachine, SessionError> {
        self.acquire_buffers()?;

        let machine = SettingsMachine::seed(
            &mut self.device,
            Catalog::STANDARD,
            self.config.policy.compatibility,
            self.config.session.exit_after_apply,
        );

        // The first read after launch still reports the press that
        // started the tool.
        let _ = self.input.poll();

        Ok(machine)
    }

    fn run_loop(&mut self, mut machine: SettingsMachine) -> Result<ExitReason, SessionError> {
        let hosted = self.host.is_hosted();
        let tick = self.config.session.tick_interval();

        loop {
            let status = self.host.process_messages();
            if status == ProcessStatus::Exiting {
                return Ok(ExitReason::HostExit);
            }

            self.host.sleep(tick);

            match status {
                ProcessStatus::ReleaseForeground => {
                    debug!("Releasing foreground");
                    self.release_buffers();
                    self.host.release_done();
                }
                ProcessStatus::Background | ProcessStatus::Exiting => {}
                ProcessStatus::Foreground => {
                    if !self.buffers_held {
                        debug!("Back in foreground");
                        self.acquire_buffers()?;
                        machine.force_redraw();
                    }

                    let buttons = self.input.poll();
                    if buttons.contains(Button::Home) {
                        if hosted {
                            // Nothing else from this tick reaches the device.
                            info!("Home pressed, relaunching host");
                            self.host.relaunch();
                            return Ok(ExitReason::Relaunched);
                        }
                        debug!("Home ignored outside hosted mode");
                    }

                    let frame = machine.advance(&mut self.device, buttons);
                    if let Some(report) = frame.apply {
                        log_apply(&report);
                    }

                    if frame.redraw {
                        render(&frame.model, &mut self.screen);
                        self.screen.present(&mut self.display)?;
                    }

                    if frame.finished {
                        if hosted {
                            self.host.relaunch();
                        }
                        return Ok(ExitReason::Applied);
                    }
                }
            }
        }
    }

    fn acquire_buffers(&mut self) -> Result<(), SessionError> {
        self.display.acquire()?;
        self.buffers_held = true;
        self.screen.mark_dirty();
        Ok(())
    }

    fn release_buffers(&mut self) {
        if self.buffers_held {
            self.display.release();
            self.buffers_held = false;
        }
    }
}

fn log_apply(report: &ApplyReport) {
    if report.primary_succeeded() {
        info!("Applied settings ({:?})", report.branch);
    } else {
        warn!("Apply failed ({:?}): {:?}", report.branch, report.primary);
    }
    if let Some(Err(e)) = report.aspect_ratio {
        warn!("Aspect ratio not applied: {:?}", e);
    }
}
