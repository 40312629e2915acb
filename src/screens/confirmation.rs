//! Confirmation screen shown after "Add Dish".

use crate::keymap::Action;
use crate::screens::screen_trait::{RenderContext, Screen, ScreenAction, ScreenContext};
use crate::state::{DishField, FlowAction};
use crate::styles::theme;
use crate::utils::center_rect;
use crate::widgets::{Button, KitchenLogo};
use anyhow::Result;
use crossterm::event::{Event, KeyEventKind, MouseButton, MouseEventKind};
use ratatui::layout::Position;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub const SUCCESS_TEXT: &str = "Dish Added Successfully!";

#[derive(Debug, Default)]
pub struct ConfirmationScreen {
    done_area: Option<Rect>,
}

impl ConfirmationScreen {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Screen for ConfirmationScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()> {
        let t = theme();
        let logo = KitchenLogo::regular();
        let column = center_rect(area, 40, logo.height() + 5);
        let [logo_area, _, message_area, dish_area, _, button_row] = Layout::vertical([
            Constraint::Length(logo.height()),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(column);

        frame.render_widget(logo, logo_area);
        frame.render_widget(
            Paragraph::new(SUCCESS_TEXT)
                .style(t.success_style())
                .alignment(Alignment::Center),
            message_area,
        );
        frame.render_widget(
            Paragraph::new(ctx.flow.details().get(DishField::Name).to_string())
                .style(t.muted_style())
                .alignment(Alignment::Center),
            dish_area,
        );

        let done = Button::new("Done", t.button_done).focused(true);
        let done_area = center_rect(button_row, done.width(), 1);
        frame.render_widget(done, done_area);
        self.done_area = Some(done_area);
        Ok(())
    }

    fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction> {
        let done = match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => matches!(
                ctx.config.keymap.get_action(key.code, key.modifiers),
                Some(Action::Confirm | Action::Cancel)
            ),
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => self
                .done_area
                .is_some_and(|r| r.contains(Position::new(mouse.column, mouse.row))),
            _ => false,
        };
        Ok(if done {
            FlowAction::Done.into()
        } else {
            ScreenAction::None
        })
    }

    fn footer_text(&self, ctx: &ScreenContext) -> String {
        let k = &ctx.config.keymap;
        format!(
            "Done: {} | Help: {} | Quit: {}",
            k.key_display(Action::Confirm),
            k.key_display(Action::Help),
            k.key_display(Action::Quit)
        )
    }
}
