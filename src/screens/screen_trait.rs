//! Screen trait and associated types.
//!
//! Each screen renders a read-only snapshot of the flow state and turns input
//! events into a [`ScreenAction`]. Screens never mutate the flow state
//! themselves; the router applies the action they return.

use crate::config::Config;
use crate::state::{FlowAction, FlowState};
use anyhow::Result;
use crossterm::event::Event;
use ratatui::layout::Rect;
use ratatui::Frame;

/// Context provided for rendering screens.
pub struct RenderContext<'a> {
    /// Snapshot of the flow state.
    pub flow: &'a FlowState,
    /// Application configuration.
    pub config: &'a Config,
}

impl<'a> RenderContext<'a> {
    pub fn new(flow: &'a FlowState, config: &'a Config) -> Self {
        Self { flow, config }
    }
}

/// Context provided for handling events.
pub struct ScreenContext<'a> {
    /// Snapshot of the flow state.
    pub flow: &'a FlowState,
    /// Application configuration (keymap lookups).
    pub config: &'a Config,
}

impl<'a> ScreenContext<'a> {
    pub fn new(flow: &'a FlowState, config: &'a Config) -> Self {
        Self { flow, config }
    }
}

/// What a screen asks the router to do after handling an event.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ScreenAction {
    /// No action needed, stay on current screen.
    #[default]
    None,
    /// Apply a flow action.
    Flow(FlowAction),
    /// Toggle the help overlay.
    ToggleHelp,
    /// Request to quit the application.
    Quit,
}

impl From<FlowAction> for ScreenAction {
    fn from(action: FlowAction) -> Self {
        Self::Flow(action)
    }
}

/// Trait for screen controllers.
///
/// # Example
///
/// ```rust,ignore
/// impl Screen for ConfirmationScreen {
///     fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()> {
///         frame.render_widget(KitchenLogo::regular(), area);
///         Ok(())
///     }
///
///     fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction> {
///         match event {
///             Event::Key(_) => Ok(FlowAction::Done.into()),
///             _ => Ok(ScreenAction::None),
///         }
///     }
/// }
/// ```
pub trait Screen {
    /// Render the screen into `area`.
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()>;

    /// Handle an input event and return what should happen next.
    fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction>;

    /// Check if a text input is currently focused.
    ///
    /// When true, global keybindings are disabled so users can type freely.
    fn is_input_focused(&self) -> bool {
        false
    }

    /// Called when the screen is entered (navigated to).
    fn on_enter(&mut self, _ctx: &ScreenContext) -> Result<()> {
        Ok(())
    }

    /// Key hints for the footer.
    fn footer_text(&self, ctx: &ScreenContext) -> String;
}
