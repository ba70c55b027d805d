use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use derive_deref::{Deref, DerefMut};
use serde::{de::Deserializer, Deserialize, Serialize};
use strum::Display;

/// Everything a key can be bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Action {
    Quit,
    Suspend,
    NextPage,
    PrevPage,
    GoHome,
    GoSolar,
    GoWind,
    GoDmfc,
    ToggleMenu,
    CloseMenu,
    Up,
    Down,
    Confirm,
    SelectNext,
    SelectPrev,
    SkipReveal,
    ReplayReveal,
}

#[derive(Clone, Debug, Default, PartialEq, Deref, DerefMut)]
pub struct KeyBindings(pub HashMap<KeyEvent, Action>);

impl KeyBindings {
    /// Looks a key up, ignoring the shift modifier on characters since the
    /// character itself already carries the case.
    pub fn action_for(&self, key: &KeyEvent) -> Option<Action> {
        self.0.get(&normalize(*key)).copied()
    }
}

impl<'de> Deserialize<'de> for KeyBindings {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let parsed_map = HashMap::<String, Action>::deserialize(deserializer)?;

        let keybindings = parsed_map
            .into_iter()
            .map(|(key_str, action)| {
                parse_key_event(&key_str)
                    .map(|key| (key, action))
                    .map_err(serde::de::Error::custom)
            })
            .collect::<Result<_, _>>()?;

        Ok(KeyBindings(keybindings))
    }
}

fn normalize(key: KeyEvent) -> KeyEvent {
    let modifiers = match key.code {
        KeyCode::Char(_) => key.modifiers.difference(KeyModifiers::SHIFT),
        _ => key.modifiers,
    };
    KeyEvent::new(key.code, modifiers)
}

/// Parses `<q>`, `<Ctrl-c>`, `<right>` and the like. The angle brackets
/// are optional.
pub fn parse_key_event(raw: &str) -> Result<KeyEvent, String> {
    let trimmed = raw.trim();
    let inner = trimmed
        .strip_prefix('<')
        .and_then(|s| s.strip_suffix('>'))
        .unwrap_or(trimmed);
    if inner.is_empty() {
        return Err(format!("Unable to parse `{raw}`"));
    }
    let (remaining, modifiers) = extract_modifiers(inner);
    parse_key_code_with_modifiers(remaining, modifiers)
}

fn extract_modifiers(raw: &str) -> (&str, KeyModifiers) {
    let mut modifiers = KeyModifiers::empty();
    let mut current = raw;

    loop {
        let lower = current.to_ascii_lowercase();
        if lower.starts_with("ctrl-") {
            modifiers.insert(KeyModifiers::CONTROL);
            current = &current[5..];
        } else if lower.starts_with("alt-") {
            modifiers.insert(KeyModifiers::ALT);
            current = &current[4..];
        } else if lower.starts_with("shift-") {
            modifiers.insert(KeyModifiers::SHIFT);
            current = &current[6..];
        } else {
            break;
        }
    }

    (current, modifiers)
}

fn parse_key_code_with_modifiers(
    raw: &str,
    mut modifiers: KeyModifiers,
) -> Result<KeyEvent, String> {
    let c = match raw.to_ascii_lowercase().as_str() {
        "esc" => KeyCode::Esc,
        "enter" => KeyCode::Enter,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" => KeyCode::PageUp,
        "pagedown" => KeyCode::PageDown,
        "backtab" => {
            modifiers.insert(KeyModifiers::SHIFT);
            KeyCode::BackTab
        }
        "backspace" => KeyCode::Backspace,
        "delete" => KeyCode::Delete,
        "tab" => KeyCode::Tab,
        "space" => KeyCode::Char(' '),
        "hyphen" | "minus" => KeyCode::Char('-'),
        _ => {
            let mut chars = raw.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => KeyCode::Char(c),
                _ => return Err(format!("Unable to parse {raw}")),
            }
        }
    };
    let modifiers = match c {
        KeyCode::Char(_) => modifiers.difference(KeyModifiers::SHIFT),
        _ => modifiers,
    };
    Ok(KeyEvent::new(c, modifiers))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::*;

    use super::*;

    #[rstest]
    #[case("<q>", KeyEvent::new(KeyCode::Char('q'), KeyModifiers::empty()))]
    #[case("q", KeyEvent::new(KeyCode::Char('q'), KeyModifiers::empty()))]
    #[case("<Ctrl-c>", KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL))]
    #[case("<ctrl-alt-a>", KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL | KeyModifiers::ALT))]
    #[case("<right>", KeyEvent::new(KeyCode::Right, KeyModifiers::empty()))]
    #[case("<space>", KeyEvent::new(KeyCode::Char(' '), KeyModifiers::empty()))]
    #[case("<backtab>", KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT))]
    #[case("<Shift-G>", KeyEvent::new(KeyCode::Char('G'), KeyModifiers::empty()))]
    fn test_parse_key_event(#[case] raw: &str, #[case] expected: KeyEvent) {
        assert_eq!(parse_key_event(raw), Ok(expected));
    }

    #[rstest]
    #[case("<>")]
    #[case("<nope>")]
    fn test_parse_key_event_invalid(#[case] raw: &str) {
        assert!(parse_key_event(raw).is_err());
    }

    #[test]
    fn test_deserialize_keybindings() -> Result<(), json5::Error> {
        let bindings: KeyBindings = json5::from_str(r#"{ "<q>": "Quit", "<tab>": "NextPage" }"#)?;
        assert_eq!(
            bindings.action_for(&KeyEvent::new(KeyCode::Char('q'), KeyModifiers::empty())),
            Some(Action::Quit)
        );
        assert_eq!(
            bindings.action_for(&KeyEvent::new(KeyCode::Tab, KeyModifiers::empty())),
            Some(Action::NextPage)
        );
        Ok(())
    }

    #[test]
    fn test_action_for_ignores_shift_on_chars() {
        let mut bindings = KeyBindings::default();
        bindings.insert(
            KeyEvent::new(KeyCode::Char('G'), KeyModifiers::empty()),
            Action::GoHome,
        );
        let pressed = KeyEvent::new(KeyCode::Char('G'), KeyModifiers::SHIFT);
        assert_eq!(bindings.action_for(&pressed), Some(Action::GoHome));
    }
}
