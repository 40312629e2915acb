//! Home screen: the welcome banner and the "Next" button.

use crate::keymap::Action;
use crate::screens::screen_trait::{RenderContext, Screen, ScreenAction, ScreenContext};
use crate::state::FlowAction;
use crate::styles::theme;
use crate::utils::center_rect;
use crate::widgets::{Button, KitchenLogo};
use anyhow::Result;
use crossterm::event::{Event, KeyEventKind, MouseButton, MouseEventKind};
use ratatui::layout::Position;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub const WELCOME_TEXT: &str = "WELCOME TO CHRISTOFFEL'S KITCHEN";

#[derive(Debug, Default)]
pub struct HomeScreen {
    next_area: Option<Rect>,
}

impl HomeScreen {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Screen for HomeScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect, _ctx: &RenderContext) -> Result<()> {
        let t = theme();
        let logo = KitchenLogo::regular();
        let column = center_rect(area, WELCOME_TEXT.len() as u16 + 4, logo.height() + 4);
        let [logo_area, _, title_area, _, button_row] = Layout::vertical([
            Constraint::Length(logo.height()),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(column);

        frame.render_widget(logo, logo_area);
        frame.render_widget(
            Paragraph::new(WELCOME_TEXT)
                .style(t.title_style())
                .alignment(Alignment::Center),
            title_area,
        );

        let next = Button::new("Next", t.button_forward).focused(true);
        let next_area = center_rect(button_row, next.width(), 1);
        frame.render_widget(next, next_area);
        self.next_area = Some(next_area);
        Ok(())
    }

    fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                match ctx.config.keymap.get_action(key.code, key.modifiers) {
                    Some(Action::Confirm) => Ok(FlowAction::Next.into()),
                    Some(Action::Cancel) => Ok(ScreenAction::Quit),
                    _ => Ok(ScreenAction::None),
                }
            }
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                let clicked = self
                    .next_area
                    .is_some_and(|r| r.contains(Position::new(mouse.column, mouse.row)));
                Ok(if clicked {
                    FlowAction::Next.into()
                } else {
                    ScreenAction::None
                })
            }
            _ => Ok(ScreenAction::None),
        }
    }

    fn footer_text(&self, ctx: &ScreenContext) -> String {
        let k = &ctx.config.keymap;
        format!(
            "Next: {} | Help: {} | Quit: {}",
            k.key_display(Action::Confirm),
            k.key_display(Action::Help),
            k.key_display(Action::Quit)
        )
    }
}
