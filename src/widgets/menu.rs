//! Card list widget used for the course buttons and the dish list.
//!
//! Each item renders as a 3-line card (padding, label, padding) so it reads
//! like a tappable button, with a bar marking the selected card.

use crate::styles::{theme, LIST_HIGHLIGHT_SYMBOL};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{StatefulWidget, Widget},
};

/// Height of one card in rows
pub const CARD_HEIGHT: u16 = 3;

/// A single card
#[derive(Debug, Clone)]
pub struct MenuItem {
    /// Label shown on the card
    pub text: String,
    /// Text color
    pub color: Color,
}

impl MenuItem {
    pub fn new(text: impl Into<String>, color: Color) -> Self {
        Self {
            text: text.into(),
            color,
        }
    }
}

/// Selection state for the Menu widget
#[derive(Debug, Default, Clone)]
pub struct MenuState {
    selected: Option<usize>,
}

impl MenuState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(&mut self, index: Option<usize>) {
        self.selected = index;
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Move the selection up, wrapping to the last of `len` items
    pub fn select_previous(&mut self, len: usize) {
        if len == 0 {
            self.selected = None;
            return;
        }
        self.selected = Some(match self.selected {
            Some(0) | None => len - 1,
            Some(i) => (i - 1).min(len - 1),
        });
    }

    /// Move the selection down, wrapping to the first item
    pub fn select_next(&mut self, len: usize) {
        if len == 0 {
            self.selected = None;
            return;
        }
        self.selected = Some(match self.selected {
            Some(i) if i + 1 < len => i + 1,
            _ => 0,
        });
    }
}

/// Card list widget
#[derive(Debug, Clone)]
pub struct Menu {
    items: Vec<MenuItem>,
    alignment: Alignment,
}

impl Menu {
    pub fn new(items: Vec<MenuItem>) -> Self {
        Self {
            items,
            alignment: Alignment::Center,
        }
    }

    pub fn alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Rows needed to show every card
    pub fn height(&self) -> u16 {
        CARD_HEIGHT * self.items.len() as u16
    }

    /// Card rectangles that fit inside `area`, with their item index
    pub fn clickable_areas(&self, area: Rect) -> Vec<(Rect, usize)> {
        (0..self.items.len())
            .map(|i| (area.y + i as u16 * CARD_HEIGHT, i))
            .take_while(|(y, _)| y + CARD_HEIGHT <= area.y + area.height)
            .map(|(y, i)| (Rect::new(area.x, y, area.width, CARD_HEIGHT), i))
            .collect()
    }
}

impl StatefulWidget for Menu {
    type State = MenuState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let t = theme();

        for (card, i) in self.clickable_areas(area) {
            let item = &self.items[i];
            let is_selected = state.selected == Some(i);

            let fill = if is_selected {
                t.highlight_style()
            } else {
                t.background_style()
            };
            buf.set_style(card, fill);

            if is_selected {
                let bar = Style::default().fg(t.border_focused);
                for y in card.y..card.y + card.height {
                    buf.set_string(card.x, y, LIST_HIGHLIGHT_SYMBOL, bar);
                }
            }

            let mut label = Style::default().fg(item.color);
            if is_selected {
                label = label.add_modifier(Modifier::BOLD);
            }
            let inner = Rect::new(
                card.x + 2,
                card.y + 1,
                card.width.saturating_sub(4),
                1,
            );
            Line::from(Span::styled(item.text.as_str(), label))
                .alignment(self.alignment)
                .render(inner, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items() -> Vec<MenuItem> {
        vec![
            MenuItem::new("Starters", Color::Red),
            MenuItem::new("Main Course", Color::Red),
            MenuItem::new("Desert", Color::Red),
        ]
    }

    #[test]
    fn test_menu_state_wraps() {
        let mut state = MenuState::new();
        state.select_next(3);
        assert_eq!(state.selected(), Some(0));
        state.select_previous(3);
        assert_eq!(state.selected(), Some(2));
        state.select_next(3);
        assert_eq!(state.selected(), Some(0));
        state.select_next(0);
        assert_eq!(state.selected(), None);
    }

    #[test]
    fn test_clickable_areas() {
        let menu = Menu::new(items());
        let areas = menu.clickable_areas(Rect::new(0, 4, 30, 9));
        assert_eq!(areas.len(), 3);
        assert_eq!(areas[1], (Rect::new(0, 7, 30, 3), 1));
        assert_eq!(menu.height(), 9);
    }

    #[test]
    fn test_clickable_areas_truncated_when_short() {
        let menu = Menu::new(items());
        let areas = menu.clickable_areas(Rect::new(0, 0, 30, 7));
        assert_eq!(areas.len(), 2);
    }

    #[test]
    fn test_render_labels() {
        let area = Rect::new(0, 0, 30, 9);
        let mut buf = Buffer::empty(area);
        let mut state = MenuState::new();
        state.select(Some(1));
        Menu::new(items()).render(area, &mut buf, &mut state);

        let row: String = (0..30).map(|x| buf[(x, 4)].symbol().to_string()).collect();
        assert!(row.contains("Main Course"));
        assert_eq!(buf[(0, 4)].symbol(), LIST_HIGHLIGHT_SYMBOL);
        assert_eq!(buf[(0, 1)].symbol(), " ");
    }
}
