use alsa::mixer::{Mixer, Selem, SelemId};
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::system::OutputSwitch;

use super::toggle::OutputToggle;
use super::{HEADPHONE_CONTROL, SPEAKER_CONTROL};

/// An output path backed by the playback switch of a simple mixer element
pub struct MixerSwitch<'a> {
    selem: Selem<'a>,
    name: &'static str,
}

impl<'a> MixerSwitch<'a> {
    /// Resolve the simple mixer element with this exact name at index 0
    pub fn locate(mixer: &'a Mixer, name: &'static str) -> Option<MixerSwitch<'a>> {
        mixer
            .find_selem(&SelemId::new(name, 0))
            .map(|selem| MixerSwitch { selem, name })
    }
}

impl OutputSwitch for MixerSwitch<'_> {
    fn name(&self) -> &str {
        self.name
    }

    fn set_enabled(&self, enabled: bool) -> Result<()> {
        self.selem
            .set_playback_switch_all(enabled as i32)
            .map_err(|e| Error::io("snd_mixer_selem_set_playback_switch_all", e))
    }
}

/// Resolve the speaker and headphone mixer controls.
///
/// "Speaker" must exist - without it there is no output to fall back to and
/// the daemon is useless on this card. "Headphones" may legitimately be
/// missing; the toggle then drives the speaker side only.
pub fn locate_outputs(mixer: &Mixer) -> Result<OutputToggle<MixerSwitch<'_>>> {
    let speaker = MixerSwitch::locate(mixer, SPEAKER_CONTROL).ok_or_else(|| {
        Error::Config(format!(
            "required mixer control '{SPEAKER_CONTROL}' not found"
        ))
    })?;

    let headphones = MixerSwitch::locate(mixer, HEADPHONE_CONTROL);
    match &headphones {
        Some(_) => info!("Located '{SPEAKER_CONTROL}' and '{HEADPHONE_CONTROL}' controls"),
        None => debug!("No '{HEADPHONE_CONTROL}' control on this card, driving speaker only"),
    }

    Ok(OutputToggle::new(speaker, headphones))
}
