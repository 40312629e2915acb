//! Dish menu screen: the dishes of the selected course plus "Back".

use crate::components::Header;
use crate::keymap::Action;
use crate::screens::cards::{CardEvent, CardList};
use crate::screens::screen_trait::{RenderContext, Screen, ScreenAction, ScreenContext};
use crate::state::{FlowAction, ScreenId};
use crate::styles::theme;
use crate::widgets::MenuItem;
use anyhow::Result;
use crossterm::event::Event;
use ratatui::prelude::*;

#[derive(Debug, Default)]
pub struct MenuScreen {
    cards: CardList,
}

impl MenuScreen {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Screen for MenuScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()> {
        let [header_area, body] =
            Layout::vertical([Constraint::Length(Header::HEIGHT), Constraint::Min(0)]).areas(area);
        let subtitle = ctx.flow.course().map(|course| format!("Course: {}", course));
        Header::render(frame, header_area, ScreenId::Menu.title(), subtitle.as_deref());

        let color = theme().dish;
        let items = ctx
            .flow
            .dishes()
            .iter()
            .map(|dish| MenuItem::new(dish.as_str(), color))
            .collect();
        self.cards.render(frame, body, items);
        Ok(())
    }

    fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction> {
        let dishes = ctx.flow.dishes();
        let action = match self.cards.handle_event(&event, &ctx.config.keymap, dishes.len()) {
            Some(CardEvent::Pick(index)) => dishes
                .get(index)
                .map(|dish| FlowAction::SelectDish(dish.clone()).into())
                .unwrap_or_default(),
            Some(CardEvent::Back) => FlowAction::Back.into(),
            None => ScreenAction::None,
        };
        Ok(action)
    }

    fn on_enter(&mut self, _ctx: &ScreenContext) -> Result<()> {
        self.cards.select(0);
        Ok(())
    }

    fn footer_text(&self, ctx: &ScreenContext) -> String {
        let k = &ctx.config.keymap;
        format!(
            "Navigate: {} | Select: {} | Back: {} | Help: {}",
            k.navigation_display(),
            k.key_display(Action::Confirm),
            k.key_display(Action::Cancel),
            k.key_display(Action::Help)
        )
    }
}
