use std::time::Duration;

use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::system::{JackSense, OutputSwitch};

use super::JACK_SENSE_CONTROL;
use super::event::{ControlEvent, ElemInterface, EventKind};
use super::toggle::OutputToggle;

/// Upper bound on one blocking wait inside the loop. The wait returns early
/// when a notification arrives; the ceiling only keeps the process able to
/// observe external termination in a timely manner.
pub const POLL_INTERVAL: Duration = Duration::from_secs(1);

/// Drives the jack-sense loop: establishes the initial output state, then
/// blocks on the control session and applies the toggle for every matching
/// notification.
///
/// `run` never returns `Ok` - the loop has no clean shutdown path; it ends
/// on a fatal error or external process kill.
pub struct JackMonitor<'a, M: JackSense, S: OutputSwitch> {
    sense: &'a M,
    outputs: OutputToggle<S>,
}

impl<'a, M: JackSense, S: OutputSwitch> JackMonitor<'a, M, S> {
    pub fn new(sense: &'a M, outputs: OutputToggle<S>) -> Self {
        Self { sense, outputs }
    }

    /// One-shot startup step: read the jack state and apply the toggle before
    /// any notification is waited for, so no window exists where both or
    /// neither output is enabled.
    pub fn apply_initial_state(&self) -> Result<()> {
        let present = self.sense.headphones_present()?;
        info!(
            "Initial jack state: headphones {}",
            if present { "plugged" } else { "unplugged" }
        );
        self.outputs.apply(present)
    }

    /// Run the startup sequence and then the notification loop.
    pub fn run(&self) -> Result<()> {
        self.apply_initial_state()?;

        info!("Watching '{JACK_SENSE_CONTROL}' for changes");
        loop {
            if !self.sense.wait(POLL_INTERVAL)? {
                continue;
            }

            let Some(event) = self.sense.next_event()? else {
                continue;
            };

            self.dispatch(&event)?;
        }
    }

    /// Classify one notification and, on a match, re-read the sense value and
    /// apply the toggle.
    fn dispatch(&self, event: &ControlEvent) -> Result<()> {
        if event.kind != EventKind::ElemChanged {
            // The control stream's contract changed underneath us.
            return Err(Error::Protocol(format!(
                "unexpected event kind {:?}",
                event.kind
            )));
        }

        if !event.value_changed || event.interface != ElemInterface::Card {
            debug!(
                "Ignoring {} event for '{}'",
                event.interface, event.element
            );
            return Ok(());
        }

        if event.element != JACK_SENSE_CONTROL {
            debug!("Ignoring value change of unrelated '{}'", event.element);
            return Ok(());
        }

        let present = self.sense.headphones_present()?;
        info!(
            "Headphones {}",
            if present { "plugged in" } else { "unplugged" }
        );
        self.outputs.apply(present)
    }
}
