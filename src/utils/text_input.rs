use crate::keymap::Action;
use crossterm::event::KeyCode;

/// A single-line text input with a cursor.
///
/// The cursor counts characters, not bytes. Any printable character is
/// accepted; nothing is validated.
///
/// # Example
/// ```
/// use christoffels_kitchen::utils::TextInput;
///
/// let mut input = TextInput::new();
/// input.insert_char('4');
/// input.insert_char('5');
/// assert_eq!(input.text(), "45");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    text: String,
    cursor: usize,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a text input with initial text, cursor at the end.
    pub fn with_text(text: impl Into<String>) -> Self {
        let mut input = Self::new();
        input.set_text(text);
        input
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Cursor position in characters.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// Byte offset of the character at `index` (or the end of the text).
    fn byte_index(&self, index: usize) -> usize {
        self.text
            .char_indices()
            .nth(index)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }

    /// Set the text and move cursor to end.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.cursor = self.char_count();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    /// Insert a character at the cursor. Control characters are ignored.
    pub fn insert_char(&mut self, c: char) {
        if c.is_control() {
            return;
        }
        let at = self.byte_index(self.cursor);
        self.text.insert(at, c);
        self.cursor += 1;
    }

    /// Delete the character before the cursor.
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let at = self.byte_index(self.cursor);
        self.text.remove(at);
    }

    /// Delete the character under the cursor.
    pub fn delete(&mut self) {
        if self.cursor < self.char_count() {
            let at = self.byte_index(self.cursor);
            self.text.remove(at);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.char_count());
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.char_count();
    }

    /// Handle a raw key code.
    ///
    /// Returns true if the key was handled.
    pub fn handle_key(&mut self, key_code: KeyCode) -> bool {
        match key_code {
            KeyCode::Char(c) => self.insert_char(c),
            KeyCode::Backspace => self.backspace(),
            KeyCode::Delete => self.delete(),
            KeyCode::Left => self.move_left(),
            KeyCode::Right => self.move_right(),
            KeyCode::Home => self.move_home(),
            KeyCode::End => self.move_end(),
            _ => return false,
        }
        true
    }

    /// Handle an editing action from the keymap.
    ///
    /// Returns true if the action was handled.
    pub fn handle_action(&mut self, action: Action) -> bool {
        match action {
            Action::MoveLeft => self.move_left(),
            Action::MoveRight => self.move_right(),
            Action::Home => self.move_home(),
            Action::End => self.move_end(),
            Action::Backspace => self.backspace(),
            Action::DeleteChar => self.delete(),
            _ => return false,
        }
        true
    }

    /// Whether a keymap action should still fire while an input has focus.
    ///
    /// Field navigation, buttons and editing pass through; anything else
    /// (like `Quit` bound to 'q') is suppressed so the key is typed instead.
    pub fn is_action_allowed_when_focused(action: &Action) -> bool {
        matches!(
            action,
            Action::Cancel
                | Action::Confirm
                | Action::Save
                | Action::NextTab
                | Action::PrevTab
                | Action::MoveLeft
                | Action::MoveRight
                | Action::Home
                | Action::End
                | Action::Backspace
                | Action::DeleteChar
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_in_middle() {
        let mut input = TextInput::with_text("hllo");
        input.move_home();
        input.move_right();
        input.insert_char('e');
        assert_eq!(input.text(), "hello");
        assert_eq!(input.cursor(), 2);
    }

    #[test]
    fn test_control_chars_ignored() {
        let mut input = TextInput::new();
        input.insert_char('\n');
        input.insert_char('\t');
        assert!(input.is_empty());
    }

    #[test]
    fn test_backspace_and_delete() {
        let mut input = TextInput::with_text("Tarts");
        input.backspace();
        assert_eq!(input.text(), "Tart");
        input.move_home();
        input.backspace();
        assert_eq!(input.text(), "Tart");
        input.delete();
        assert_eq!(input.text(), "art");
        assert_eq!(input.cursor(), 0);
        input.move_end();
        input.delete();
        assert_eq!(input.text(), "art");
    }

    #[test]
    fn test_unicode_cursor_counts_chars() {
        let mut input = TextInput::with_text("crème");
        assert_eq!(input.cursor(), 5);
        input.move_left();
        input.move_left();
        input.backspace();
        assert_eq!(input.text(), "crme");
        input.insert_char('è');
        assert_eq!(input.text(), "crème");
    }

    #[test]
    fn test_cursor_is_clamped() {
        let mut input = TextInput::with_text("ab");
        input.move_right();
        assert_eq!(input.cursor(), 2);
        input.move_home();
        input.move_left();
        assert_eq!(input.cursor(), 0);
    }

    #[test]
    fn test_handle_key() {
        let mut input = TextInput::new();
        assert!(input.handle_key(KeyCode::Char('4')));
        assert!(input.handle_key(KeyCode::Char('5')));
        assert_eq!(input.text(), "45");
        assert!(!input.handle_key(KeyCode::Enter));
        assert!(input.handle_key(KeyCode::Backspace));
        assert_eq!(input.text(), "4");
    }

    #[test]
    fn test_handle_action() {
        let mut input = TextInput::with_text("hello");
        assert!(input.handle_action(Action::Home));
        assert!(input.handle_action(Action::DeleteChar));
        assert_eq!(input.text(), "ello");
        assert!(!input.handle_action(Action::Quit));
    }

    #[test]
    fn test_clear() {
        let mut input = TextInput::with_text("x");
        input.clear();
        assert!(input.is_empty());
        assert_eq!(input.cursor(), 0);
    }

    #[test]
    fn test_is_action_allowed_when_focused() {
        assert!(TextInput::is_action_allowed_when_focused(&Action::Cancel));
        assert!(TextInput::is_action_allowed_when_focused(&Action::NextTab));
        assert!(TextInput::is_action_allowed_when_focused(&Action::Save));
        assert!(!TextInput::is_action_allowed_when_focused(&Action::Quit));
        assert!(!TextInput::is_action_allowed_when_focused(&Action::Help));
        assert!(!TextInput::is_action_allowed_when_focused(&Action::MoveDown));
    }
}
