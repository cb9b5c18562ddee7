pub mod audio;
pub mod card;
pub mod error;
pub mod system;

pub use audio::{DeviceSession, JackMonitor, OutputToggle};
pub use error::{Error, Result};
