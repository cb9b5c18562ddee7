use std::time::Duration;

use crate::audio::event::ControlEvent;
use crate::error::Result;

/// Trait for a settable audio output path - abstracts a mixer playback switch
pub trait OutputSwitch {
    /// Logical name of the output ("Speaker", "Headphones")
    fn name(&self) -> &str;

    /// Enable or disable playback through this output
    fn set_enabled(&self, enabled: bool) -> Result<()>;
}

/// Trait for the control-session side of jack sensing - abstracts the ALSA
/// ctl handle so the notification loop is testable without hardware
pub trait JackSense {
    /// Block until a notification is pending or the timeout elapses.
    /// Returns Ok(true) when the session is readable, Ok(false) on timeout.
    fn wait(&self, timeout: Duration) -> Result<bool>;

    /// Read one pending notification; None if the stream had nothing after all
    fn next_event(&self) -> Result<Option<ControlEvent>>;

    /// Read the current jack-insertion state of the sense control
    fn headphones_present(&self) -> Result<bool>;
}
