use std::ffi::CString;
use std::fmt::Write as _;

use alsa::Card;
use tracing::debug;

use crate::error::{Error, Result};

/// Identifier shapes handed straight to `snd_ctl_open` without resolution
fn is_device_path(identifier: &str) -> bool {
    identifier.starts_with("hw:") || identifier.starts_with("plughw:") || identifier == "default"
}

/// Exact-name lookup over an (index, name) listing
fn match_card_name(cards: &[(i32, String)], wanted: &str) -> Option<i32> {
    cards
        .iter()
        .find(|(_, name)| name == wanted)
        .map(|(index, _)| *index)
}

/// Enumerate installed sound cards as (index, name) pairs.
/// Cards that fail to report a name are skipped.
pub fn installed_cards() -> Vec<(i32, String)> {
    let mut cards = Vec::new();
    for card in alsa::card::Iter::new() {
        let Ok(card) = card else { continue };
        if let Ok(name) = card.get_name() {
            cards.push((card.get_index(), name));
        }
    }
    cards
}

/// Resolve a user-supplied card identifier to an ALSA device path.
///
/// Pre-formatted device paths pass through untouched. Everything else is
/// resolved against the installed cards: exact name match first, then a
/// numeric card index, then the card ID known to alsa-lib. An identifier
/// matching none of these is a configuration error - the daemon is being
/// pointed at hardware that is not there.
pub fn resolve_card(identifier: &str) -> Result<String> {
    if is_device_path(identifier) {
        debug!("Using '{}' as a device path directly", identifier);
        return Ok(identifier.to_string());
    }

    let cards = installed_cards();

    if let Some(index) = match_card_name(&cards, identifier) {
        debug!("Resolved card name '{}' to index {}", identifier, index);
        return Ok(format!("hw:{index}"));
    }

    if let Ok(index) = identifier.parse::<i32>() {
        if cards.iter().any(|(installed, _)| *installed == index) {
            return Ok(format!("hw:{index}"));
        }
    }

    if let Ok(id) = CString::new(identifier) {
        if let Ok(card) = Card::from_str(&id) {
            debug!(
                "Resolved card id '{}' to index {}",
                identifier,
                card.get_index()
            );
            return Ok(format!("hw:{}", card.get_index()));
        }
    }

    Err(Error::Config(format!("no such sound card: '{identifier}'")))
}

/// Help-text footer enumerating the discoverable cards
pub fn possible_cards_help() -> String {
    let mut help = String::from("Possible cards:\n * default");
    for (_, name) in installed_cards() {
        let _ = write!(help, "\n * {name}");
    }
    help
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn device_paths_pass_through() {
        assert!(is_device_path("hw:0"));
        assert!(is_device_path("hw:1,0"));
        assert!(is_device_path("plughw:0"));
        assert!(is_device_path("default"));
        assert!(!is_device_path("HDA Intel PCH"));
        assert!(!is_device_path("0"));
    }

    #[test]
    fn name_match_is_exact() {
        let cards = vec![
            (0, "HDA Intel PCH".to_string()),
            (1, "USB Audio".to_string()),
        ];
        assert_eq!(match_card_name(&cards, "USB Audio"), Some(1));
        assert_eq!(match_card_name(&cards, "HDA Intel PCH"), Some(0));
        assert_eq!(match_card_name(&cards, "USB"), None);
        assert_eq!(match_card_name(&cards, "usb audio"), None);
    }
}
