//! Semantic actions triggered by keyboard shortcuts.

use serde::{Deserialize, Serialize};

/// All actions a key can be bound to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    // ============ Navigation ============
    /// Move selection up in a list
    MoveUp,
    /// Move selection down in a list
    MoveDown,
    /// Move cursor left in an input
    MoveLeft,
    /// Move cursor right in an input
    MoveRight,
    /// Select the first item
    GoToTop,
    /// Select the last item
    GoToEnd,
    /// Jump to start of input
    Home,
    /// Jump to end of input
    End,

    // ============ Buttons ============
    /// Press the selected button / pick the selected item (Enter)
    Confirm,
    /// Go back / cancel (Esc)
    Cancel,
    /// Add the dish from anywhere on the details form
    Save,

    // ============ Global ============
    /// Quit the application
    Quit,
    /// Toggle help overlay
    Help,

    // ============ Text editing ============
    /// Delete character before cursor
    Backspace,
    /// Delete character at cursor
    DeleteChar,

    // ============ Field navigation ============
    /// Focus next input or button
    NextTab,
    /// Focus previous input or button
    PrevTab,
}

impl Action {
    /// Human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            Action::MoveUp => "Move up",
            Action::MoveDown => "Move down",
            Action::MoveLeft => "Cursor left",
            Action::MoveRight => "Cursor right",
            Action::GoToTop => "First item",
            Action::GoToEnd => "Last item",
            Action::Home => "Start of input",
            Action::End => "End of input",
            Action::Confirm => "Select / press button",
            Action::Cancel => "Back / cancel",
            Action::Save => "Add dish",
            Action::Quit => "Quit",
            Action::Help => "Toggle help",
            Action::Backspace => "Backspace",
            Action::DeleteChar => "Delete character",
            Action::NextTab => "Next field",
            Action::PrevTab => "Previous field",
        }
    }

    /// Category for grouping in the help overlay
    pub fn category(&self) -> &'static str {
        match self {
            Action::MoveUp
            | Action::MoveDown
            | Action::MoveLeft
            | Action::MoveRight
            | Action::GoToTop
            | Action::GoToEnd
            | Action::Home
            | Action::End => "Navigation",

            Action::Confirm | Action::Cancel | Action::Save => "Buttons",

            Action::Quit | Action::Help => "Global",

            Action::Backspace | Action::DeleteChar => "Text Editing",

            Action::NextTab | Action::PrevTab => "Field Navigation",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_category() {
        assert_eq!(Action::MoveUp.category(), "Navigation");
        assert_eq!(Action::Quit.category(), "Global");
        assert_eq!(Action::Save.category(), "Buttons");
    }

    #[test]
    fn test_action_serialization() {
        let json = serde_json::to_string(&Action::NextTab).unwrap();
        assert_eq!(json, "\"next_tab\"");
        let action: Action = serde_json::from_str("\"go_to_end\"").unwrap();
        assert_eq!(action, Action::GoToEnd);
    }
}
