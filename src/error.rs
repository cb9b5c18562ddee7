use thiserror::Error;

/// Everything that can go fatally wrong in the daemon.
///
/// The loop tolerates exactly one class of condition silently: notifications
/// that fail the mask/interface/name filter. Every other failure propagates up
/// to `main`, which logs it and exits nonzero; there is no degraded mode.
#[derive(Debug, Error)]
pub enum Error {
    /// Wrong or unsupported hardware: unresolvable card, missing required
    /// mixer control, missing jack sense control.
    #[error("configuration error: {0}")]
    Config(String),

    /// A control or mixer operation failed.
    #[error("{op} failed")]
    Io {
        op: &'static str,
        #[source]
        source: alsa::Error,
    },

    /// The control stream delivered something outside its contract.
    #[error("control stream protocol violation: {0}")]
    Protocol(String),
}

impl Error {
    pub(crate) fn io(op: &'static str, source: alsa::Error) -> Self {
        Error::Io { op, source }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
