//! Keymap configuration module
//!
//! Provides customizable keyboard shortcuts with preset keymaps (standard, vim, emacs).

mod actions;
mod binding;
mod presets;

pub use actions::Action;
pub use binding::{format_key_display, parse_key_string, KeyBinding, ParsedKey};
pub use presets::KeymapPreset;

use crossterm::event::{KeyCode, KeyModifiers};
use serde::{Deserialize, Serialize};

/// Keymap configuration with preset and optional overrides
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Keymap {
    /// Base preset keymap
    #[serde(default)]
    pub preset: KeymapPreset,

    /// User-defined overrides (checked before preset)
    #[serde(default)]
    pub overrides: Vec<KeyBinding>,
}

impl Keymap {
    /// Get the action for a key event, checking overrides first then preset.
    /// If an action is overridden, preset bindings for that action are ignored.
    pub fn get_action(&self, code: KeyCode, modifiers: KeyModifiers) -> Option<Action> {
        self.all_bindings()
            .into_iter()
            .find(|binding| binding.matches(code, modifiers))
            .map(|binding| binding.action)
    }

    /// All bindings (overrides + preset), overrides shadowing the preset per action
    pub fn all_bindings(&self) -> Vec<KeyBinding> {
        let mut bindings = self.overrides.clone();
        bindings.extend(
            self.preset
                .bindings()
                .into_iter()
                .filter(|p| !self.overrides.iter().any(|o| o.action == p.action)),
        );
        bindings
    }

    /// Display string for the first key bound to `action` (e.g., Action::Quit -> "Q")
    pub fn key_display(&self, action: Action) -> String {
        self.all_bindings()
            .iter()
            .find(|b| b.action == action)
            .map(KeyBinding::display)
            .unwrap_or_else(|| format!("{:?}", action))
    }

    /// Display string for navigation keys (up/down)
    pub fn navigation_display(&self) -> String {
        format!(
            "{}/{}",
            self.key_display(Action::MoveUp),
            self.key_display(Action::MoveDown)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_keymap() {
        let keymap = Keymap::default();
        assert_eq!(keymap.preset, KeymapPreset::Standard);
        assert!(keymap.overrides.is_empty());
        assert_eq!(
            keymap.get_action(KeyCode::Enter, KeyModifiers::NONE),
            Some(Action::Confirm)
        );
    }

    #[test]
    fn test_override_shadows_preset_action() {
        let keymap = Keymap {
            preset: KeymapPreset::Standard,
            overrides: vec![KeyBinding::new("x", Action::Quit)],
        };
        assert_eq!(
            keymap.get_action(KeyCode::Char('x'), KeyModifiers::NONE),
            Some(Action::Quit)
        );
        // Both preset quit keys are gone
        assert_eq!(keymap.get_action(KeyCode::Char('q'), KeyModifiers::NONE), None);
        assert_eq!(keymap.get_action(KeyCode::Char('c'), KeyModifiers::CONTROL), None);
    }

    #[test]
    fn test_vim_preset() {
        let keymap = Keymap {
            preset: KeymapPreset::Vim,
            overrides: Vec::new(),
        };
        assert_eq!(
            keymap.get_action(KeyCode::Char('j'), KeyModifiers::NONE),
            Some(Action::MoveDown)
        );
        assert_eq!(keymap.navigation_display(), "K/J");
    }

    #[test]
    fn test_key_display() {
        let keymap = Keymap::default();
        assert_eq!(keymap.key_display(Action::Confirm), "Enter");
        assert_eq!(keymap.key_display(Action::Save), "Ctrl+S");
        assert_eq!(keymap.navigation_display(), "↑/↓");
    }
}
