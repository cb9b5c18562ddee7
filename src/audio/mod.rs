use std::ffi::CStr;

pub mod elements;
pub mod event;
pub mod monitor;
pub mod session;
pub mod toggle;

/// Mixer control driving the built-in speaker path. Must exist on the card.
pub const SPEAKER_CONTROL: &str = "Speaker";

/// Mixer control driving the headphone path. May be absent.
pub const HEADPHONE_CONTROL: &str = "Headphones";

/// Card-interface control reporting physical jack-insertion state.
pub const JACK_SENSE_CONTROL: &str = "Headphones Jack";
// Same name, for the ALSA calls that take a C string.
pub(crate) const JACK_SENSE_CONTROL_C: &CStr = c"Headphones Jack";

pub use event::{ControlEvent, ElemInterface, EventKind};
pub use monitor::JackMonitor;
pub use session::DeviceSession;
pub use toggle::OutputToggle;
