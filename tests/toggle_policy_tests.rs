use alsa_jack_monitor::Error;
use alsa_jack_monitor::audio::OutputToggle;
use alsa_jack_monitor::system::MockOutputSwitch;

fn toggle_with_headphones() -> (OutputToggle<MockOutputSwitch>, MockOutputSwitch, MockOutputSwitch)
{
    let speaker = MockOutputSwitch::new("Speaker");
    let headphones = MockOutputSwitch::new("Headphones");
    let toggle = OutputToggle::new(speaker.clone(), Some(headphones.clone()));
    (toggle, speaker, headphones)
}

#[test]
fn no_headphones_plugged_enables_speaker() {
    let (toggle, speaker, headphones) = toggle_with_headphones();

    toggle.apply(false).unwrap();

    assert_eq!(speaker.last_state(), Some(true));
    assert_eq!(headphones.last_state(), Some(false));
}

#[test]
fn headphones_plugged_enables_headphones() {
    let (toggle, speaker, headphones) = toggle_with_headphones();

    toggle.apply(true).unwrap();

    assert_eq!(speaker.last_state(), Some(false));
    assert_eq!(headphones.last_state(), Some(true));
}

#[test]
fn exactly_one_output_is_enabled_after_apply() {
    let (toggle, speaker, headphones) = toggle_with_headphones();

    for present in [false, true, true, false] {
        toggle.apply(present).unwrap();
        let speaker_on = speaker.last_state().unwrap();
        let headphones_on = headphones.last_state().unwrap();
        assert!(
            speaker_on != headphones_on,
            "both outputs in state {speaker_on} after applying {present}"
        );
    }
}

#[test]
fn apply_is_idempotent() {
    let (toggle, speaker, headphones) = toggle_with_headphones();

    toggle.apply(true).unwrap();
    let after_once = (speaker.last_state(), headphones.last_state());

    toggle.apply(true).unwrap();
    let after_twice = (speaker.last_state(), headphones.last_state());

    assert_eq!(after_once, after_twice);
}

#[test]
fn missing_headphone_element_degrades_to_speaker_only() {
    let speaker = MockOutputSwitch::new("Speaker");
    let toggle = OutputToggle::new(speaker.clone(), None);

    assert!(!toggle.has_headphones());

    toggle.apply(true).unwrap();
    assert_eq!(speaker.last_state(), Some(false));

    toggle.apply(false).unwrap();
    assert_eq!(speaker.last_state(), Some(true));
}

#[test]
fn switch_failure_propagates() {
    let (toggle, speaker, _headphones) = toggle_with_headphones();
    speaker.set_failure(true);

    let err = toggle.apply(false).unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
}

#[test]
fn headphone_switch_failure_propagates_before_speaker_is_touched() {
    let (toggle, speaker, headphones) = toggle_with_headphones();
    headphones.set_failure(true);

    assert!(toggle.apply(true).is_err());
    assert_eq!(speaker.call_count(), 0);
}
