use std::time::Duration;

use alsa::ctl::{Ctl, ElemId, ElemIface, ElemType, ElemValue};
use alsa::mixer::Mixer;
use tracing::info;

use crate::error::{Error, Result};
use crate::system::JackSense;

use super::event::{ControlEvent, EventKind};
use super::{JACK_SENSE_CONTROL, JACK_SENSE_CONTROL_C};


/// Process-lifetime handles to one sound card: the control interface the jack
/// notifications arrive on, and the mixer the output switches live in.
///
/// Both handles are opened by the constructor or the constructor fails; no
/// partially initialized session is ever observable. Dropping the session
/// releases the card.
pub struct DeviceSession {
    ctl: Ctl,
    mixer: Mixer,
    device: String,
}

impl DeviceSession {
    /// Open the control interface (non-blocking, subscribed for element
    /// events) and the mixer of the given ALSA device.
    pub fn open(device: &str) -> Result<Self> {
        let ctl = Ctl::new(device, true).map_err(|e| Error::io("snd_ctl_open", e))?;
        ctl.subscribe_events(true)
            .map_err(|e| Error::io("snd_ctl_subscribe_events", e))?;

        let mixer = Mixer::new(device, false).map_err(|e| Error::io("snd_mixer_open", e))?;

        info!("Opened control and mixer sessions on {}", device);

        Ok(Self {
            ctl,
            mixer,
            device: device.to_string(),
        })
    }

    pub fn mixer(&self) -> &Mixer {
        &self.mixer
    }
}

impl JackSense for DeviceSession {
    fn wait(&self, timeout: Duration) -> Result<bool> {
        let timeout_ms = timeout.as_millis().min(i32::MAX as u128) as u32;
        self.ctl
            .wait(Some(timeout_ms))
            .map_err(|e| Error::io("snd_ctl_wait", e))
    }

    fn next_event(&self) -> Result<Option<ControlEvent>> {
        let event = match self.ctl.read().map_err(|e| Error::io("snd_ctl_read", e))? {
            Some(event) => event,
            None => return Ok(None),
        };

        let id = event.get_id();
        let mask = event.get_mask();
        let element = id
            .get_name()
            .map_err(|e| Error::io("snd_ctl_elem_id_get_name", e))?
            .to_string();

        // The ctl read API only surfaces element events; anything else would
        // already have failed the read above.
        Ok(Some(ControlEvent {
            kind: EventKind::ElemChanged,
            interface: id.get_interface().into(),
            value_changed: mask.value()
                && !mask.remove()
                && !mask.info()
                && !mask.add()
                && !mask.tlv(),
            element,
        }))
    }

    fn headphones_present(&self) -> Result<bool> {
        let mut id = ElemId::new(ElemIface::Card);
        id.set_name(JACK_SENSE_CONTROL_C);
        id.set_index(0);

        let mut value = ElemValue::new(ElemType::Boolean)
            .map_err(|e| Error::io("snd_ctl_elem_value_malloc", e))?;
        value.set_id(&id);

        // The daemon's entire purpose depends on this control existing; a card
        // without it is a misconfiguration, not a retryable condition.
        self.ctl.elem_read(&mut value).map_err(|_| {
            Error::Config(format!(
                "sense control '{JACK_SENSE_CONTROL}' not found on {}",
                self.device
            ))
        })?;

        value.get_boolean(0).ok_or_else(|| {
            Error::Protocol(format!("'{JACK_SENSE_CONTROL}' is not a boolean control"))
        })
    }
}
