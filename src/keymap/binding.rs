//! Key bindings: a key string such as "ctrl+s" or "shift+tab" mapped to an action.

use super::Action;
use crossterm::event::{KeyCode, KeyModifiers};
use serde::{Deserialize, Serialize};

/// A single key binding
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyBinding {
    /// Key string (e.g., "j", "down", "ctrl+s", "shift+tab")
    pub key: String,

    /// The action this key triggers
    pub action: Action,
}

/// Parsed key representation for matching
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedKey {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    pub fn new(key: &str, action: Action) -> Self {
        Self {
            key: key.to_string(),
            action,
        }
    }

    /// Check if this binding matches the given key event.
    /// Bindings that fail to parse never match.
    pub fn matches(&self, code: KeyCode, modifiers: KeyModifiers) -> bool {
        match parse_key_string(&self.key) {
            Ok(parsed) => normalize(parsed.code, parsed.modifiers) == normalize(code, modifiers),
            Err(_) => false,
        }
    }

    /// Display string for the footer and help overlay (e.g., "Ctrl+S")
    pub fn display(&self) -> String {
        format_key_display(&self.key)
    }
}

/// Terminals report Shift+Tab as BackTab, sometimes with SHIFT set and
/// sometimes without. Treat all of those as the same key.
fn normalize(code: KeyCode, modifiers: KeyModifiers) -> (KeyCode, KeyModifiers) {
    match code {
        KeyCode::BackTab => (KeyCode::Tab, KeyModifiers::SHIFT),
        KeyCode::Tab if modifiers.contains(KeyModifiers::SHIFT) => (KeyCode::Tab, KeyModifiers::SHIFT),
        // 'G' may arrive with or without SHIFT; bindings spell it "shift+g".
        KeyCode::Char(c) if c.is_ascii_uppercase() => (
            KeyCode::Char(c.to_ascii_lowercase()),
            modifiers | KeyModifiers::SHIFT,
        ),
        // Symbols like '?' arrive with SHIFT on some terminals.
        KeyCode::Char(c) if !c.is_ascii_alphabetic() => {
            (code, modifiers.difference(KeyModifiers::SHIFT))
        }
        _ => (code, modifiers),
    }
}

/// Parse a key string like "ctrl+shift+n" into KeyCode and KeyModifiers
pub fn parse_key_string(key: &str) -> Result<ParsedKey, String> {
    let key = key.trim().to_lowercase();
    let (modifier_parts, key_part) = match key.rsplit_once('+') {
        // "+" on its own, or a trailing "+" as in "ctrl++"
        Some((mods, "")) => (mods.trim_end_matches('+'), "+"),
        Some((mods, last)) => (mods, last),
        None => ("", key.as_str()),
    };

    let mut modifiers = KeyModifiers::NONE;
    for part in modifier_parts.split('+').map(str::trim).filter(|p| !p.is_empty()) {
        match part {
            "ctrl" | "control" => modifiers |= KeyModifiers::CONTROL,
            "alt" | "option" => modifiers |= KeyModifiers::ALT,
            "shift" => modifiers |= KeyModifiers::SHIFT,
            _ => return Err(format!("Unknown modifier: {}", part)),
        }
    }

    let code = parse_key_code(key_part)?;
    Ok(ParsedKey { code, modifiers })
}

/// Parse a single key name into KeyCode
fn parse_key_code(key: &str) -> Result<KeyCode, String> {
    let key = key.trim();
    let code = match key {
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" | "pgup" => KeyCode::PageUp,
        "pagedown" | "pgdn" => KeyCode::PageDown,
        "enter" | "return" => KeyCode::Enter,
        "esc" | "escape" => KeyCode::Esc,
        "space" => KeyCode::Char(' '),
        "tab" => KeyCode::Tab,
        "backtab" => KeyCode::BackTab,
        "backspace" | "bs" => KeyCode::Backspace,
        "delete" | "del" => KeyCode::Delete,
        _ => {
            if let Some(n) = key.strip_prefix('f').and_then(|n| n.parse::<u8>().ok()) {
                if (1..=12).contains(&n) {
                    return Ok(KeyCode::F(n));
                }
            }
            let mut chars = key.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => KeyCode::Char(c),
                _ => return Err(format!("Unknown key: {}", key)),
            }
        }
    };
    Ok(code)
}

/// Format a key string for display (e.g., "ctrl+s" -> "Ctrl+S")
pub fn format_key_display(key: &str) -> String {
    key.split('+')
        .map(|part| {
            let part = part.trim().to_lowercase();
            match part.as_str() {
                "ctrl" | "control" => "Ctrl".to_string(),
                "alt" | "option" => "Alt".to_string(),
                "shift" => "Shift".to_string(),
                "up" => "↑".to_string(),
                "down" => "↓".to_string(),
                "left" => "←".to_string(),
                "right" => "→".to_string(),
                "enter" | "return" => "Enter".to_string(),
                "esc" | "escape" => "Esc".to_string(),
                "space" => "Space".to_string(),
                "tab" => "Tab".to_string(),
                "backspace" | "bs" => "Backspace".to_string(),
                "delete" | "del" => "Del".to_string(),
                "home" => "Home".to_string(),
                "end" => "End".to_string(),
                _ => part.to_uppercase(),
            }
        })
        .collect::<Vec<_>>()
        .join("+")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_and_special_keys() {
        assert_eq!(parse_key_string("j").unwrap().code, KeyCode::Char('j'));
        assert_eq!(parse_key_string("enter").unwrap().code, KeyCode::Enter);
        assert_eq!(parse_key_string("esc").unwrap().code, KeyCode::Esc);
        assert_eq!(parse_key_string("space").unwrap().code, KeyCode::Char(' '));
        assert_eq!(parse_key_string("f5").unwrap().code, KeyCode::F(5));
        assert!(parse_key_string("f13").is_err());
    }

    #[test]
    fn test_parse_modifiers() {
        let parsed = parse_key_string("ctrl+s").unwrap();
        assert_eq!(parsed.code, KeyCode::Char('s'));
        assert_eq!(parsed.modifiers, KeyModifiers::CONTROL);

        let parsed = parse_key_string("Ctrl+Shift+N").unwrap();
        assert_eq!(parsed.modifiers, KeyModifiers::CONTROL | KeyModifiers::SHIFT);

        assert!(parse_key_string("hyper+x").is_err());
    }

    #[test]
    fn test_parse_plus_key() {
        assert_eq!(parse_key_string("+").unwrap().code, KeyCode::Char('+'));
        let parsed = parse_key_string("ctrl++").unwrap();
        assert_eq!(parsed.code, KeyCode::Char('+'));
        assert_eq!(parsed.modifiers, KeyModifiers::CONTROL);
    }

    #[test]
    fn test_shift_tab_matches_backtab() {
        let binding = KeyBinding::new("shift+tab", Action::PrevTab);
        assert!(binding.matches(KeyCode::BackTab, KeyModifiers::SHIFT));
        assert!(binding.matches(KeyCode::BackTab, KeyModifiers::NONE));
        assert!(!binding.matches(KeyCode::Tab, KeyModifiers::NONE));
    }

    #[test]
    fn test_question_mark_matches_with_shift() {
        let binding = KeyBinding::new("?", Action::Help);
        assert!(binding.matches(KeyCode::Char('?'), KeyModifiers::SHIFT));
        assert!(binding.matches(KeyCode::Char('?'), KeyModifiers::NONE));
    }

    #[test]
    fn test_shift_letter_matches_uppercase() {
        let binding = KeyBinding::new("shift+g", Action::GoToEnd);
        assert!(binding.matches(KeyCode::Char('G'), KeyModifiers::SHIFT));
        assert!(binding.matches(KeyCode::Char('G'), KeyModifiers::NONE));
        assert!(!binding.matches(KeyCode::Char('g'), KeyModifiers::NONE));
    }

    #[test]
    fn test_binding_matches_exact_modifiers() {
        let binding = KeyBinding::new("ctrl+s", Action::Save);
        assert!(binding.matches(KeyCode::Char('s'), KeyModifiers::CONTROL));
        assert!(!binding.matches(KeyCode::Char('s'), KeyModifiers::NONE));
    }

    #[test]
    fn test_invalid_binding_never_matches() {
        let binding = KeyBinding::new("nonsense", Action::Quit);
        assert!(!binding.matches(KeyCode::Char('n'), KeyModifiers::NONE));
    }

    #[test]
    fn test_format_key_display() {
        assert_eq!(format_key_display("ctrl+s"), "Ctrl+S");
        assert_eq!(format_key_display("up"), "↑");
        assert_eq!(format_key_display("esc"), "Esc");
        assert_eq!(format_key_display("?"), "?");
    }
}
