//! Dish details form.
//!
//! Three inputs (name, description, price) followed by the "Add Dish" and
//! "Cancel" buttons. Focus cycles through all five with Tab/Shift+Tab.
//! Every edit is reported as a `FlowAction::UpdateField` so the flow state
//! always holds what is on screen.

use crate::keymap::Action;
use crate::screens::screen_trait::{RenderContext, Screen, ScreenAction, ScreenContext};
use crate::state::{DishField, FlowAction};
use crate::styles::theme;
use crate::utils::{center_rect, TextInput};
use crate::widgets::{Button, KitchenLogo, TextInputWidget, TextInputWidgetExt};
use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind};
use ratatui::layout::Position;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

const FORM_WIDTH: u16 = 44;
const INPUT_HEIGHT: u16 = 3;
const FIELD_COUNT: usize = DishField::EDITABLE.len();

/// Which element of the form has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    /// Index into `DishField::EDITABLE`
    Input(usize),
    AddButton,
    CancelButton,
}

impl Default for Focus {
    fn default() -> Self {
        Focus::Input(0)
    }
}

impl Focus {
    const COUNT: usize = FIELD_COUNT + 2;

    fn index(self) -> usize {
        match self {
            Focus::Input(i) => i,
            Focus::AddButton => FIELD_COUNT,
            Focus::CancelButton => FIELD_COUNT + 1,
        }
    }

    fn from_index(index: usize) -> Self {
        match index % Self::COUNT {
            i if i < FIELD_COUNT => Focus::Input(i),
            FIELD_COUNT => Focus::AddButton,
            _ => Focus::CancelButton,
        }
    }

    fn next(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    fn previous(self) -> Self {
        Self::from_index(self.index() + Self::COUNT - 1)
    }
}

#[derive(Debug, Default)]
pub struct DetailsScreen {
    inputs: [TextInput; FIELD_COUNT],
    focus: Focus,
    input_areas: [Rect; FIELD_COUNT],
    add_area: Rect,
    cancel_area: Rect,
}

impl DetailsScreen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text currently in the input for `field` (empty for non-editable fields).
    pub fn input_text(&self, field: DishField) -> &str {
        DishField::EDITABLE
            .iter()
            .position(|f| *f == field)
            .map_or("", |i| self.inputs[i].text())
    }

    /// Apply a key to the focused input and report the edit, if any.
    fn edit_input(&mut self, index: usize, key: &KeyEvent, action: Option<Action>) -> ScreenAction {
        let input = &mut self.inputs[index];
        let before = input.text().to_string();

        match action {
            Some(action) => {
                input.handle_action(action);
            }
            None if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
                input.handle_key(key.code);
            }
            None => {}
        }

        if input.text() == before {
            ScreenAction::None
        } else {
            FlowAction::UpdateField(DishField::EDITABLE[index], input.text().to_string()).into()
        }
    }

    fn handle_key(&mut self, key: &KeyEvent, ctx: &ScreenContext) -> ScreenAction {
        let action = ctx.config.keymap.get_action(key.code, key.modifiers);

        match self.focus {
            Focus::Input(index) => {
                // Chorded moves (Emacs Ctrl+N/Ctrl+P) cannot be typed, so they still move focus
                let chord = key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);
                match action {
                    Some(Action::MoveDown) if chord => {
                        self.focus = self.focus.next();
                        return ScreenAction::None;
                    }
                    Some(Action::MoveUp) if chord => {
                        self.focus = self.focus.previous();
                        return ScreenAction::None;
                    }
                    _ => {}
                }

                let action = action.filter(TextInput::is_action_allowed_when_focused);
                match action {
                    Some(Action::NextTab | Action::Confirm) => self.focus = self.focus.next(),
                    Some(Action::PrevTab) => self.focus = self.focus.previous(),
                    Some(Action::Save) => return FlowAction::AddDish.into(),
                    Some(Action::Cancel) => return FlowAction::Cancel.into(),
                    None if key.code == KeyCode::Down => self.focus = self.focus.next(),
                    None if key.code == KeyCode::Up => self.focus = self.focus.previous(),
                    other => return self.edit_input(index, key, other),
                }
            }
            Focus::AddButton | Focus::CancelButton => match action {
                Some(Action::NextTab | Action::MoveDown | Action::MoveRight) => {
                    self.focus = self.focus.next();
                }
                Some(Action::PrevTab | Action::MoveUp | Action::MoveLeft) => {
                    self.focus = self.focus.previous();
                }
                Some(Action::Confirm) if self.focus == Focus::AddButton => {
                    return FlowAction::AddDish.into();
                }
                Some(Action::Confirm | Action::Cancel) => return FlowAction::Cancel.into(),
                Some(Action::Save) => return FlowAction::AddDish.into(),
                _ => {}
            },
        }
        ScreenAction::None
    }

    fn handle_click(&mut self, position: Position) -> ScreenAction {
        if self.add_area.contains(position) {
            self.focus = Focus::AddButton;
            return FlowAction::AddDish.into();
        }
        if self.cancel_area.contains(position) {
            self.focus = Focus::CancelButton;
            return FlowAction::Cancel.into();
        }
        if let Some(index) = self.input_areas.iter().position(|r| r.contains(position)) {
            self.focus = Focus::Input(index);
        }
        ScreenAction::None
    }
}

impl Screen for DetailsScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()> {
        let t = theme();
        let logo = KitchenLogo::regular();
        let form_height = logo.height() + 3 + INPUT_HEIGHT * FIELD_COUNT as u16 + 1;
        let form = center_rect(area, FORM_WIDTH, form_height);

        let [logo_area, _, course_area, _, inputs_area, button_row] = Layout::vertical([
            Constraint::Length(logo.height()),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(INPUT_HEIGHT * FIELD_COUNT as u16),
            Constraint::Length(1),
        ])
        .areas(form);

        frame.render_widget(logo, logo_area);

        let course = ctx.flow.details().get(DishField::Course);
        frame.render_widget(
            Paragraph::new(format!("Course: {}", course))
                .style(t.muted_style())
                .alignment(Alignment::Center),
            course_area,
        );

        let input_rows = Layout::vertical([Constraint::Length(INPUT_HEIGHT); FIELD_COUNT]).split(inputs_area);
        for (i, field) in DishField::EDITABLE.iter().enumerate() {
            let input = &self.inputs[i];
            let mut widget = TextInputWidget::new(input)
                .placeholder(field.placeholder())
                .focused(self.focus == Focus::Input(i));
            // Placeholder already names an empty input
            if !input.is_empty() {
                widget = widget.title(field.placeholder());
            }
            frame.render_text_input_widget(widget, input_rows[i]);
            self.input_areas[i] = input_rows[i];
        }

        let add = Button::new("Add Dish", t.button_forward).focused(self.focus == Focus::AddButton);
        let cancel = Button::new("Cancel", t.button_back).focused(self.focus == Focus::CancelButton);
        let buttons = center_rect(button_row, add.width() + 2 + cancel.width(), 1);
        let [add_area, _, cancel_area] = Layout::horizontal([
            Constraint::Length(add.width()),
            Constraint::Length(2),
            Constraint::Length(cancel.width()),
        ])
        .areas(buttons);
        frame.render_widget(add, add_area);
        frame.render_widget(cancel, cancel_area);
        self.add_area = add_area;
        self.cancel_area = cancel_area;

        Ok(())
    }

    fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction> {
        let action = match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(&key, ctx),
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                self.handle_click(Position::new(mouse.column, mouse.row))
            }
            Event::Paste(text) => match self.focus {
                Focus::Input(index) => {
                    let input = &mut self.inputs[index];
                    text.chars().for_each(|c| input.insert_char(c));
                    FlowAction::UpdateField(DishField::EDITABLE[index], input.text().to_string()).into()
                }
                _ => ScreenAction::None,
            },
            _ => ScreenAction::None,
        };
        Ok(action)
    }

    fn is_input_focused(&self) -> bool {
        matches!(self.focus, Focus::Input(_))
    }

    /// Load the form from the flow state and focus the first input.
    fn on_enter(&mut self, ctx: &ScreenContext) -> Result<()> {
        let details = ctx.flow.details();
        for (input, field) in self.inputs.iter_mut().zip(DishField::EDITABLE) {
            input.set_text(details.get(field));
        }
        self.focus = Focus::default();
        Ok(())
    }

    fn footer_text(&self, ctx: &ScreenContext) -> String {
        let k = &ctx.config.keymap;
        format!(
            "Next Field: {} | Add Dish: {} | Cancel: {}",
            k.key_display(Action::NextTab),
            k.key_display(Action::Save),
            k.key_display(Action::Cancel)
        )
    }
}
