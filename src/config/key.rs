//! Key representation used by the keybinding config.
//!
//! Keys serialize as human-readable strings ("ctrl+c", "Esc", "Tab") so the
//! config file stays hand-editable.

use std::fmt;
use std::str::FromStr;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Key {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl Key {
    #[must_use]
    pub const fn new(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[must_use]
    pub const fn with_ctrl(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::CONTROL,
        }
    }

    /// Whether an incoming event matches this key.
    ///
    /// For character keys the shift modifier is ignored since the case of
    /// the character already encodes it ('G' arrives with SHIFT set).
    #[must_use]
    pub fn matches(&self, event: &KeyEvent) -> bool {
        match (self.code, event.code) {
            (KeyCode::Char(a), KeyCode::Char(b)) => {
                a == b
                    && (self.modifiers & !KeyModifiers::SHIFT)
                        == (event.modifiers & !KeyModifiers::SHIFT)
            }
            // Terminals report BackTab with the shift modifier set.
            (KeyCode::BackTab, KeyCode::BackTab) => {
                (self.modifiers & !KeyModifiers::SHIFT) == (event.modifiers & !KeyModifiers::SHIFT)
            }
            _ => self.code == event.code && self.modifiers == event.modifiers,
        }
    }

    #[must_use]
    pub fn display(&self) -> String {
        let mut parts = Vec::new();
        if self.modifiers.contains(KeyModifiers::CONTROL) {
            parts.push("ctrl".to_string());
        }
        if self.modifiers.contains(KeyModifiers::ALT) {
            parts.push("alt".to_string());
        }
        if self.modifiers.contains(KeyModifiers::SHIFT) {
            parts.push("shift".to_string());
        }

        let key = match self.code {
            KeyCode::Char(' ') => "Space".to_string(),
            KeyCode::Char(c) => c.to_string(),
            KeyCode::Enter => "Enter".to_string(),
            KeyCode::Esc => "Esc".to_string(),
            KeyCode::Tab => "Tab".to_string(),
            KeyCode::BackTab => "shift+Tab".to_string(),
            KeyCode::Backspace => "Backspace".to_string(),
            KeyCode::Delete => "Delete".to_string(),
            KeyCode::Home => "Home".to_string(),
            KeyCode::End => "End".to_string(),
            KeyCode::PageUp => "PageUp".to_string(),
            KeyCode::PageDown => "PageDown".to_string(),
            KeyCode::Up => "Up".to_string(),
            KeyCode::Down => "Down".to_string(),
            KeyCode::Left => "Left".to_string(),
            KeyCode::Right => "Right".to_string(),
            KeyCode::F(n) => format!("F{n}"),
            _ => "?".to_string(),
        };
        parts.push(key);
        parts.join("+")
    }
}

impl FromStr for Key {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let parts: Vec<&str> = s.split('+').collect();

        let mut modifiers = KeyModifiers::NONE;
        let mut key_part = s;
        if parts.len() > 1 {
            for part in &parts[..parts.len() - 1] {
                match part.to_lowercase().as_str() {
                    "ctrl" | "control" => modifiers |= KeyModifiers::CONTROL,
                    "alt" => modifiers |= KeyModifiers::ALT,
                    "shift" => modifiers |= KeyModifiers::SHIFT,
                    _ => return Err(format!("Unknown modifier: {part}")),
                }
            }
            key_part = parts[parts.len() - 1];
        }

        let code = match key_part.to_lowercase().as_str() {
            "enter" | "return" => KeyCode::Enter,
            "esc" | "escape" => KeyCode::Esc,
            "tab" => {
                if modifiers.contains(KeyModifiers::SHIFT) {
                    // Terminals deliver shift+tab as BackTab.
                    modifiers &= !KeyModifiers::SHIFT;
                    KeyCode::BackTab
                } else {
                    KeyCode::Tab
                }
            }
            "backtab" => KeyCode::BackTab,
            "backspace" => KeyCode::Backspace,
            "delete" | "del" => KeyCode::Delete,
            "home" => KeyCode::Home,
            "end" => KeyCode::End,
            "pageup" | "pgup" => KeyCode::PageUp,
            "pagedown" | "pgdn" => KeyCode::PageDown,
            "up" => KeyCode::Up,
            "down" => KeyCode::Down,
            "left" => KeyCode::Left,
            "right" => KeyCode::Right,
            "space" => KeyCode::Char(' '),
            lower if lower.starts_with('f') && lower.len() > 1 => {
                let num: u8 = lower[1..]
                    .parse()
                    .map_err(|_| format!("Invalid function key: {key_part}"))?;
                KeyCode::F(num)
            }
            // Preserve the case from the original input for single chars.
            lower if lower.chars().count() == 1 => match key_part.chars().next() {
                Some(c) => KeyCode::Char(c),
                None => return Err(format!("Unknown key: {key_part}")),
            },
            _ => return Err(format!("Unknown key: {key_part}")),
        };

        Ok(Self { code, modifiers })
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

impl Serialize for Key {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.display())
    }
}

impl<'de> Deserialize<'de> for Key {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::from_str(&s).map_err(serde::de::Error::custom)
    }
}

/// One or more keys bound to the same action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum KeyBinding {
    Single(Key),
    Multiple(Vec<Key>),
}

impl KeyBinding {
    #[must_use]
    pub fn multiple(keys: Vec<Key>) -> Self {
        Self::Multiple(keys)
    }

    #[must_use]
    pub fn matches(&self, event: &KeyEvent) -> bool {
        match self {
            Self::Single(key) => key.matches(event),
            Self::Multiple(keys) => keys.iter().any(|k| k.matches(event)),
        }
    }

    #[must_use]
    pub fn display(&self) -> String {
        match self {
            Self::Single(key) => key.display(),
            Self::Multiple(keys) => keys
                .iter()
                .map(Key::display)
                .collect::<Vec<_>>()
                .join("/"),
        }
    }
}

impl Default for KeyBinding {
    fn default() -> Self {
        Self::Single(Key::new(KeyCode::Null))
    }
}

impl From<Key> for KeyBinding {
    fn from(key: Key) -> Self {
        Self::Single(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_parsing() {
        assert_eq!(Key::from_str("v").unwrap(), Key::new(KeyCode::Char('v')));
        assert_eq!(Key::from_str("Enter").unwrap(), Key::new(KeyCode::Enter));
        assert_eq!(Key::from_str("Esc").unwrap(), Key::new(KeyCode::Esc));
        assert_eq!(Key::from_str("Tab").unwrap(), Key::new(KeyCode::Tab));
        assert_eq!(
            Key::from_str("shift+tab").unwrap(),
            Key::new(KeyCode::BackTab)
        );
        assert_eq!(
            Key::from_str("ctrl+c").unwrap(),
            Key::with_ctrl(KeyCode::Char('c'))
        );
        assert_eq!(Key::from_str("F1").unwrap(), Key::new(KeyCode::F(1)));
    }

    #[test]
    fn test_key_display() {
        assert_eq!(Key::new(KeyCode::Char('v')).display(), "v");
        assert_eq!(Key::new(KeyCode::Esc).display(), "Esc");
        assert_eq!(Key::with_ctrl(KeyCode::Char('c')).display(), "ctrl+c");
        assert_eq!(Key::new(KeyCode::BackTab).display(), "shift+Tab");
    }

    #[test]
    fn test_key_matches() {
        let key = Key::new(KeyCode::Char('v'));
        assert!(key.matches(&KeyEvent::new(KeyCode::Char('v'), KeyModifiers::NONE)));
        assert!(!key.matches(&KeyEvent::new(KeyCode::Char('i'), KeyModifiers::NONE)));
    }

    #[test]
    fn test_uppercase_char_matches_with_shift() {
        let key = Key::new(KeyCode::Char('G'));
        assert!(key.matches(&KeyEvent::new(KeyCode::Char('G'), KeyModifiers::SHIFT)));
        // Lowercase binding stays distinct from the uppercase event.
        let lower = Key::new(KeyCode::Char('g'));
        assert!(!lower.matches(&KeyEvent::new(KeyCode::Char('G'), KeyModifiers::SHIFT)));
    }

    #[test]
    fn test_binding_multiple() {
        let binding =
            KeyBinding::multiple(vec![Key::new(KeyCode::Char('k')), Key::new(KeyCode::Up)]);
        assert!(binding.matches(&KeyEvent::new(KeyCode::Up, KeyModifiers::NONE)));
        assert!(binding.matches(&KeyEvent::new(KeyCode::Char('k'), KeyModifiers::NONE)));
        assert_eq!(binding.display(), "k/Up");
    }
}
