//! Course selection screen: one card per course plus "Back".

use crate::components::Header;
use crate::keymap::Action;
use crate::menu::Course;
use crate::screens::cards::{CardEvent, CardList};
use crate::screens::screen_trait::{RenderContext, Screen, ScreenAction, ScreenContext};
use crate::state::{FlowAction, ScreenId};
use crate::styles::theme;
use crate::widgets::MenuItem;
use anyhow::Result;
use crossterm::event::Event;
use ratatui::prelude::*;

#[derive(Debug, Default)]
pub struct CourseSelectionScreen {
    cards: CardList,
}

impl CourseSelectionScreen {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Screen for CourseSelectionScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect, _ctx: &RenderContext) -> Result<()> {
        let [header_area, body] =
            Layout::vertical([Constraint::Length(Header::HEIGHT), Constraint::Min(0)]).areas(area);
        Header::render(frame, header_area, ScreenId::CourseSelection.title(), None);

        let color = theme().course;
        let items = Course::ALL
            .iter()
            .map(|course| MenuItem::new(course.label(), color))
            .collect();
        self.cards.render(frame, body, items);
        Ok(())
    }

    fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction> {
        let action = match self.cards.handle_event(&event, &ctx.config.keymap, Course::ALL.len()) {
            Some(CardEvent::Pick(index)) => Course::from_index(index)
                .map(|course| FlowAction::SelectCourse(course.label().to_string()).into())
                .unwrap_or_default(),
            Some(CardEvent::Back) => FlowAction::Back.into(),
            None => ScreenAction::None,
        };
        Ok(action)
    }

    /// Highlight the previously chosen course, if any.
    fn on_enter(&mut self, ctx: &ScreenContext) -> Result<()> {
        let index = ctx
            .flow
            .course()
            .and_then(Course::from_label)
            .map_or(0, Course::to_index);
        self.cards.select(index);
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
