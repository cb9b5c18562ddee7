use tracing::debug;

use crate::error::Result;
use crate::system::OutputSwitch;

/// The single point of truth for output state.
///
/// Holds the speaker switch and, when the card has one, the headphone switch.
/// Applying a sense value enables exactly one side: headphones follow the
/// jack, the speaker gets the negation. On cards without a "Headphones"
/// mixer control only the speaker side is driven.
pub struct OutputToggle<S: OutputSwitch> {
    speaker: S,
    headphones: Option<S>,
}

impl<S: OutputSwitch> OutputToggle<S> {
    pub fn new(speaker: S, headphones: Option<S>) -> Self {
        Self {
            speaker,
            headphones,
        }
    }

    pub fn has_headphones(&self) -> bool {
        self.headphones.is_some()
    }

    /// Apply a fresh jack-sense reading to both outputs.
    ///
    /// Must be called once before the notification loop starts and then on
    /// every matching notification; a failed switch write is fatal upstream.
    pub fn apply(&self, headphones_present: bool) -> Result<()> {
        if let Some(headphones) = &self.headphones {
            headphones.set_enabled(headphones_present)?;
            debug!(
                "Set {} playback to {}",
                headphones.name(),
                headphones_present
            );
        }

        self.speaker.set_enabled(!headphones_present)?;
        debug!(
            "Set {} playback to {}",
            self.speaker.name(),
            !headphones_present
        );

        Ok(())
    }
}
