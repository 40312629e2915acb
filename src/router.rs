//! Routes input to the current screen and applies the resulting flow actions.

use crate::components::{Footer, HelpOverlay};
use crate::config::Config;
use crate::keymap::{Action, KeymapPreset};
use crate::screens::{
    ConfirmationScreen, CourseSelectionScreen, DetailsScreen, HomeScreen, MenuScreen, RenderContext, Screen,
    ScreenAction, ScreenContext,
};
use crate::state::{FlowAction, FlowState, GlobalState, ScreenId};
use crate::styles::theme;
use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEventKind};
use ratatui::prelude::*;
use ratatui::widgets::Block;
use std::path::PathBuf;
use tracing::{debug, error, info};

/// Owns the flow state, the configuration and one controller per screen.
pub struct Router {
    flow: FlowState,
    config: Config,
    config_path: PathBuf,
    global: GlobalState,
    home: HomeScreen,
    course_selection: CourseSelectionScreen,
    menu: MenuScreen,
    details: DetailsScreen,
    confirmation: ConfirmationScreen,
}

impl Router {
    pub fn new(config: Config, config_path: PathBuf) -> Self {
        Self {
            flow: FlowState::new(),
            config,
            config_path,
            global: GlobalState::new(),
            home: HomeScreen::new(),
            course_selection: CourseSelectionScreen::new(),
            menu: MenuScreen::new(),
            details: DetailsScreen::new(),
            confirmation: ConfirmationScreen::new(),
        }
    }

    pub fn flow(&self) -> &FlowState {
        &self.flow
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn should_quit(&self) -> bool {
        self.global.should_quit
    }

    pub fn is_help_shown(&self) -> bool {
        self.global.show_help_overlay
    }

    fn screen(&self, id: ScreenId) -> &dyn Screen {
        match id {
            ScreenId::Home => &self.home,
            ScreenId::CourseSelection => &self.course_selection,
            ScreenId::Menu => &self.menu,
            ScreenId::Details => &self.details,
            ScreenId::Confirmation => &self.confirmation,
        }
    }

    /// Handle one input event.
    pub fn handle_event(&mut self, event: Event) -> Result<()> {
        if matches!(&event, Event::Key(key) if key.kind != KeyEventKind::Press) {
            return Ok(());
        }

        // The overlay sits on top of the screen and takes every event
        if self.global.show_help_overlay {
            return match &event {
                Event::Key(key) => self.handle_help_key(key),
                Event::Mouse(mouse) if matches!(mouse.kind, MouseEventKind::Down(_)) => {
                    self.global.show_help_overlay = false;
                    Ok(())
                }
                _ => Ok(()),
            };
        }

        if let Event::Key(key) = &event {
            if self.handle_global_key(key) {
                return Ok(());
            }
        }

        let id = self.flow.screen();
        let ctx = ScreenContext::new(&self.flow, &self.config);
        let action = match id {
            ScreenId::Home => self.home.handle_event(event, &ctx)?,
            ScreenId::CourseSelection => self.course_selection.handle_event(event, &ctx)?,
            ScreenId::Menu => self.menu.handle_event(event, &ctx)?,
            ScreenId::Details => self.details.handle_event(event, &ctx)?,
            ScreenId::Confirmation => self.confirmation.handle_event(event, &ctx)?,
        };
        self.global.input_mode_active = self.screen(id).is_input_focused();
        self.dispatch(action)
    }

    /// Quit and help, unless a text input would swallow the key.
    ///
    /// Quit bound to a Ctrl chord always fires so Ctrl+C works while typing.
    fn handle_global_key(&mut self, key: &KeyEvent) -> bool {
        let Some(action) = self.config.keymap.get_action(key.code, key.modifiers) else {
            return false;
        };
        let typing = self.global.input_mode_active;
        match action {
            Action::Quit if !typing || key.modifiers.contains(KeyModifiers::CONTROL) => {
                info!("Quit requested");
                self.global.should_quit = true;
                true
            }
            Action::Help if !typing => {
                self.global.toggle_help();
                true
            }
            _ => false,
        }
    }

    /// While help is shown: 1/2/3 switch the keymap preset, any other key closes it.
    fn handle_help_key(&mut self, key: &KeyEvent) -> Result<()> {
        let preset = match key.code {
            KeyCode::Char(c @ '1'..='9') => KeymapPreset::ALL.get(c as usize - '1' as usize).copied(),
            _ => None,
        };

        match preset {
            Some(preset) if preset != self.config.keymap.preset => {
                info!("Switching keymap preset to {}", preset.name());
                self.config.keymap.preset = preset;
                if let Err(e) = self.config.save(&self.config_path) {
                    error!("Failed to save keymap preset: {:#}", e);
                }
            }
            Some(_) => {}
            None => self.global.show_help_overlay = false,
        }
        Ok(())
    }

    /// Apply a screen's action.
    pub fn dispatch(&mut self, action: ScreenAction) -> Result<()> {
        match action {
            ScreenAction::None => Ok(()),
            ScreenAction::Quit => {
                info!("Quit requested");
                self.global.should_quit = true;
                Ok(())
            }
            ScreenAction::ToggleHelp => {
                self.global.toggle_help();
                Ok(())
            }
            ScreenAction::Flow(action) => self.apply(action),
        }
    }

    /// Apply a flow action and enter the new screen if it changed.
    pub fn apply(&mut self, action: FlowAction) -> Result<()> {
        let Some(transition) = self.flow.apply(action) else {
            return Ok(());
        };
        if transition.changed() {
            debug!("Entering {}", transition.to);
            let ctx = ScreenContext::new(&self.flow, &self.config);
            match transition.to {
                ScreenId::Home => self.home.on_enter(&ctx)?,
                ScreenId::CourseSelection => self.course_selection.on_enter(&ctx)?,
                ScreenId::Menu => self.menu.on_enter(&ctx)?,
                ScreenId::Details => self.details.on_enter(&ctx)?,
                ScreenId::Confirmation => self.confirmation.on_enter(&ctx)?,
            }
            self.global.input_mode_active = self.screen(transition.to).is_input_focused();
        }
        Ok(())
    }

    /// Draw the current screen, its footer and, if shown, the help overlay.
    pub fn draw(&mut self, frame: &mut Frame) {
        let area = frame.area();
        frame.render_widget(Block::default().style(theme().background_style()), area);

        let [body, footer_area] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(Footer::HEIGHT)]).areas(area);

        let id = self.flow.screen();
        let footer = self.screen(id).footer_text(&ScreenContext::new(&self.flow, &self.config));

        let ctx = RenderContext::new(&self.flow, &self.config);
        let screen: &mut dyn Screen = match id {
            ScreenId::Home => &mut self.home,
            ScreenId::CourseSelection => &mut self.course_selection,
            ScreenId::Menu => &mut self.menu,
            ScreenId::Details => &mut self.details,
            ScreenId::Confirmation => &mut self.confirmation,
        };
        if let Err(e) = screen.render(frame, body, &ctx) {
            error!("Error rendering {}: {:#}", id, e);
        }

        Footer::render(frame, footer_area, &footer);

        if self.global.show_help_overlay {
            HelpOverlay::render(frame, area, &self.config.keymap, &self.config_path.to_string_lossy());
        }
    }
}
