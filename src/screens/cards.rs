//! Shared layout and input handling for the two list screens
//! (course selection and dish menu): a column of cards followed by a
//! "Back" button.

use crate::keymap::{Action, Keymap};
use crate::styles::theme;
use crate::utils::center_rect;
use crate::widgets::{Button, Menu, MenuItem, MenuState};
use crossterm::event::{Event, KeyEventKind, MouseButton, MouseEventKind};
use ratatui::layout::Position;
use ratatui::prelude::*;

/// Widest the card column gets.
const COLUMN_WIDTH: u16 = 40;

/// What the user did on a card list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardEvent {
    /// A card was picked.
    Pick(usize),
    /// The "Back" button was pressed (or Esc).
    Back,
}

/// Selection over `len` cards plus the trailing "Back" button.
#[derive(Debug, Default)]
pub struct CardList {
    state: MenuState,
    card_areas: Vec<(Rect, usize)>,
    back_area: Option<Rect>,
}

impl CardList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select a card (or the back button at index `len`).
    pub fn select(&mut self, index: usize) {
        self.state.select(Some(index));
    }

    pub fn selected(&self) -> Option<usize> {
        self.state.selected()
    }

    /// Draw the cards centered in `area` with the "Back" button underneath.
    pub fn render(&mut self, frame: &mut Frame, area: Rect, items: Vec<MenuItem>) {
        let t = theme();
        let count = items.len();
        let menu = Menu::new(items);
        let back = Button::new("Back", t.button_back).focused(self.state.selected() == Some(count));

        let column = center_rect(area, COLUMN_WIDTH, menu.height() + 2);
        let [cards_area, _, back_row] = Layout::vertical([
            Constraint::Length(menu.height()),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(column);

        self.card_areas = menu.clickable_areas(cards_area);
        let back_area = center_rect(back_row, back.width(), 1);
        self.back_area = Some(back_area);

        // The back button is drawn separately; hide the card highlight while it is selected.
        let mut card_state = self.state.clone();
        if card_state.selected() == Some(count) {
            card_state.select(None);
        }
        frame.render_stateful_widget(menu, cards_area, &mut card_state);
        frame.render_widget(back, back_area);
    }

    /// Translate an input event for a list of `len` cards.
    pub fn handle_event(&mut self, event: &Event, keymap: &Keymap, len: usize) -> Option<CardEvent> {
        let slots = len + 1;
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                match keymap.get_action(key.code, key.modifiers)? {
                    Action::MoveUp | Action::PrevTab => self.state.select_previous(slots),
                    Action::MoveDown | Action::NextTab => self.state.select_next(slots),
                    Action::GoToTop => self.state.select(Some(0)),
                    Action::GoToEnd => self.state.select(Some(slots - 1)),
                    Action::Confirm => {
                        return match self.state.selected() {
                            Some(i) if i < len => Some(CardEvent::Pick(i)),
                            Some(_) => Some(CardEvent::Back),
                            None => None,
                        };
                    }
                    Action::Cancel => return Some(CardEvent::Back),
                    _ => {}
                }
                None
            }
            Event::Mouse(mouse) => {
                let position = Position::new(mouse.column, mouse.row);
                match mouse.kind {
                    MouseEventKind::Down(MouseButton::Left) => {
                        if self.back_area.is_some_and(|r| r.contains(position)) {
                            return Some(CardEvent::Back);
                        }
                        let (_, index) = self
                            .card_areas
                            .iter()
                            .find(|(rect, _)| rect.contains(position))?;
                        self.state.select(Some(*index));
                        Some(CardEvent::Pick(*index))
                    }
                    MouseEventKind::ScrollUp => {
                        self.state.select_previous(slots);
                        None
                    }
                    MouseEventKind::ScrollDown => {
                        self.state.select_next(slots);
                        None
                    }
                    _ => None,
                }
            }
            _ => None,
        }
    }
}
