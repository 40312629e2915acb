//! Text input widget for rendering [`TextInput`] instances.
//!
//! Draws a rounded bordered box with the entered text, or the placeholder
//! when empty, and places the terminal cursor when focused.

use crate::utils::TextInput;
use crate::utils::{
    focused_border_style, input_placeholder_style, input_text_style, unfocused_border_style,
};
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// A widget for rendering a TextInput with consistent styling.
pub struct TextInputWidget<'a> {
    input: &'a TextInput,
    title: Option<&'a str>,
    placeholder: Option<&'a str>,
    focused: bool,
}

impl<'a> TextInputWidget<'a> {
    pub fn new(input: &'a TextInput) -> Self {
        Self {
            input,
            title: None,
            placeholder: None,
            focused: false,
        }
    }

    pub fn title(mut self, title: &'a str) -> Self {
        self.title = Some(title);
        self
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Entered text, or the placeholder when empty.
    fn display_text(&self) -> &'a str {
        if self.input.is_empty() {
            self.placeholder.unwrap_or("")
        } else {
            self.input.text()
        }
    }

    fn text_style(&self) -> Style {
        if self.input.is_empty() {
            input_placeholder_style()
        } else {
            input_text_style()
        }
    }

    fn border_style(&self) -> Style {
        if self.focused {
            focused_border_style()
        } else {
            unfocused_border_style()
        }
    }

    fn create_block(&self) -> Block<'a> {
        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.border_style());
        if let Some(title) = self.title {
            block = block.title(format!(" {} ", title));
        }
        block
    }

    /// Terminal cursor position for this input drawn in `area`.
    ///
    /// Text longer than the box scrolls so the cursor stays visible.
    fn cursor_position(&self, area: Rect) -> Position {
        let inner = self.create_block().inner(area);
        let cursor = self.input.cursor().min(self.input.text().chars().count());
        let max_x = inner.width.saturating_sub(1) as usize;
        Position::new(inner.x + cursor.min(max_x) as u16, inner.y)
    }

    /// Horizontal scroll so the cursor stays inside the box.
    fn scroll_offset(&self, area: Rect) -> u16 {
        let inner_width = self.create_block().inner(area).width as usize;
        self.input
            .cursor()
            .saturating_sub(inner_width.saturating_sub(1)) as u16
    }
}

impl Widget for TextInputWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let scroll = if self.input.is_empty() {
            0
        } else {
            self.scroll_offset(area)
        };
        Paragraph::new(self.display_text())
            .block(self.create_block())
            .style(self.text_style())
            .scroll((0, scroll))
            .render(area, buf);
    }
}

/// Extension trait for Frame to render a TextInputWidget with cursor support.
///
/// The Widget trait has no access to the Frame, which owns the cursor.
pub trait TextInputWidgetExt {
    fn render_text_input_widget(&mut self, widget: TextInputWidget, area: Rect);
}

impl TextInputWidgetExt for Frame<'_> {
    fn render_text_input_widget(&mut self, widget: TextInputWidget, area: Rect) {
        let cursor = widget.focused.then(|| widget.cursor_position(area));
        self.render_widget(widget, area);
        if let Some(position) = cursor {
            self.set_cursor_position(position);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_to_string(widget: TextInputWidget, width: u16) -> String {
        let area = Rect::new(0, 0, width, 3);
        let mut buf = Buffer::empty(area);
        widget.render(area, &mut buf);
        (0..width)
            .map(|x| buf[(x, 1)].symbol().to_string())
            .collect()
    }

    #[test]
    fn test_placeholder_when_empty() {
        let input = TextInput::new();
        let widget = TextInputWidget::new(&input).placeholder("Price");
        assert_eq!(widget.display_text(), "Price");
        assert!(render_to_string(widget, 20).contains("Price"));
    }

    #[test]
    fn test_text_replaces_placeholder() {
        let input = TextInput::with_text("45");
        let widget = TextInputWidget::new(&input).placeholder("Price");
        let line = render_to_string(widget, 20);
        assert!(line.contains("45"));
        assert!(!line.contains("Price"));
    }

    #[test]
    fn test_cursor_position_follows_text() {
        let input = TextInput::with_text("abc");
        let widget = TextInputWidget::new(&input).focused(true);
        assert_eq!(widget.cursor_position(Rect::new(0, 0, 20, 3)), Position::new(4, 1));
    }

    #[test]
    fn test_long_text_scrolls() {
        let input = TextInput::with_text("0123456789");
        let widget = TextInputWidget::new(&input);
        // 8 columns wide -> 6 inside the borders; cursor at 10 needs 5 columns scrolled
        assert_eq!(widget.scroll_offset(Rect::new(0, 0, 8, 3)), 5);
        assert_eq!(widget.cursor_position(Rect::new(0, 0, 8, 3)), Position::new(6, 1));
    }
}
