use std::fmt;

/// Kind of a control-session notification.
///
/// alsa-lib currently only delivers element-changed events through the ctl
/// read API, but the loop treats any other kind as a broken contract rather
/// than skipping it, so the variant stays representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    ElemChanged,
    Unknown,
}

/// Source interface of a changed control element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElemInterface {
    Card,
    Mixer,
    Pcm,
    Other,
}

impl From<alsa::ctl::ElemIface> for ElemInterface {
    fn from(iface: alsa::ctl::ElemIface) -> Self {
        match iface {
            alsa::ctl::ElemIface::Card => ElemInterface::Card,
            alsa::ctl::ElemIface::Mixer => ElemInterface::Mixer,
            alsa::ctl::ElemIface::PCM => ElemInterface::Pcm,
            _ => ElemInterface::Other,
        }
    }
}

impl fmt::Display for ElemInterface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElemInterface::Card => write!(f, "CARD"),
            ElemInterface::Mixer => write!(f, "MIXER"),
            ElemInterface::Pcm => write!(f, "PCM"),
            ElemInterface::Other => write!(f, "other"),
        }
    }
}

/// One notification drawn from the control session, reduced to the fields the
/// jack monitor classifies on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlEvent {
    pub kind: EventKind,
    pub interface: ElemInterface,
    /// True when the change mask is exactly "value changed"; an info, add,
    /// tlv or remove bit disqualifies the event.
    pub value_changed: bool,
    /// Name of the changed element.
    pub element: String,
}

impl ControlEvent {
    /// A plain value-changed event for a CARD-interface element, the shape a
    /// jack insertion produces.
    pub fn value_change(element: &str) -> Self {
        Self {
            kind: EventKind::ElemChanged,
            interface: ElemInterface::Card,
            value_changed: true,
            element: element.to_string(),
        }
    }
}
