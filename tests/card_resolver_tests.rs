use alsa_jack_monitor::Error;
use alsa_jack_monitor::card::resolve_card;

#[test]
fn device_paths_are_passed_through_unchanged() {
    assert_eq!(resolve_card("hw:0").unwrap(), "hw:0");
    assert_eq!(resolve_card("hw:1,0").unwrap(), "hw:1,0");
    assert_eq!(resolve_card("plughw:0").unwrap(), "plughw:0");
    assert_eq!(resolve_card("default").unwrap(), "default");
}

#[test]
fn unknown_identifier_is_a_configuration_error() {
    let err = resolve_card("definitely not an installed sound card").unwrap_err();
    assert!(matches!(err, Error::Config(_)));
    assert!(err.to_string().contains("no such sound card"));
}
