//! Filled button widget ("Next", "Back", "Add Dish", "Cancel", "Done").

use crate::styles::theme;
use ratatui::prelude::*;

/// A one-line filled button with a centered label.
///
/// When focused the label is wrapped in `[ ]` and underlined.
#[derive(Debug, Clone)]
pub struct Button<'a> {
    label: &'a str,
    fill: Color,
    focused: bool,
}

impl<'a> Button<'a> {
    pub fn new(label: &'a str, fill: Color) -> Self {
        Self {
            label,
            fill,
            focused: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Width including padding, so callers can lay buttons out.
    pub fn width(&self) -> u16 {
        self.label.chars().count() as u16 + 6
    }

    fn display_label(&self) -> String {
        if self.focused {
            format!("[ {} ]", self.label)
        } else {
            format!("  {}  ", self.label)
        }
    }
}

impl Widget for Button<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let style = theme().button_style(self.fill, self.focused);
        buf.set_style(area, style);
        Line::from(self.display_label())
            .alignment(Alignment::Center)
            .style(style)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focused_label_is_bracketed() {
        let area = Rect::new(0, 0, 12, 1);
        let mut buf = Buffer::empty(area);
        Button::new("Next", Color::Blue).focused(true).render(area, &mut buf);
        let row: String = (0..12).map(|x| buf[(x, 0)].symbol().to_string()).collect();
        assert!(row.contains("[ Next ]"));
    }

    #[test]
    fn test_width_fits_label() {
        let button = Button::new("Add Dish", Color::Blue);
        assert_eq!(button.width(), 14);
        assert_eq!(button.display_label().chars().count(), 12);
    }
}
